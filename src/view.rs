//! Comparison view: the one piece of mutable state behind the dashboard.
//!
//! The view owns the selected endpoint tab and composes dataset slices
//! into chart specs. A snapshot is an immutable description of everything
//! the render layer needs; any binding layer (server-side redraw, reactive
//! frontend) can consume it.

use crate::chart::{ChartKind, ChartSpec, SeriesSpec};
use crate::dataset::{EndpointId, MetricsDataset};
use crate::error::ReportError;
use crate::theme::{token_name, SeriesTheme, ThemeRegistry};
use crate::tooltip::{self, TooltipEntry, TooltipFragment};

/// Series key of the baseline system.
pub const SERIES_GO: &str = "go";
/// Series key of the compared system.
pub const SERIES_RUST: &str = "rust";

/// Dash pattern per endpoint group on the cross-endpoint chart, so series
/// sharing a color stay distinguishable. Ping is solid.
fn group_dash(id: EndpointId) -> Option<(u8, u8)> {
    match id {
        EndpointId::Ping => None,
        EndpointId::Data => Some((5, 5)),
        EndpointId::Process => Some((3, 3)),
    }
}

/// A chart plus its pre-rendered per-category tooltips.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartCard {
    pub spec: ChartSpec,
    pub tooltips: Vec<TooltipFragment>,
}

/// One entry of the endpoint tab list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    pub id: EndpointId,
    pub selected: bool,
}

/// Immutable render snapshot of the whole dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub selected: EndpointId,
    pub tabs: Vec<TabState>,
    pub headline: String,
    pub aggregate: ChartCard,
    pub detail: ChartCard,
    pub crossover: ChartCard,
    pub theme_css: String,
}

pub struct ComparisonView {
    dataset: &'static MetricsDataset,
    theme: SeriesTheme,
    registry: ThemeRegistry,
    selected: EndpointId,
    // Independent of the selected tab; built once and shared across
    // snapshots so a tab transition recomputes the detail chart only.
    aggregate: ChartCard,
    crossover: ChartCard,
}

impl ComparisonView {
    pub fn new(theme: SeriesTheme) -> Result<Self, ReportError> {
        let dataset = MetricsDataset::get();
        let mut registry = ThemeRegistry::new();
        registry.bind(&theme)?;

        let aggregate = build_aggregate_card(dataset, &theme);
        let crossover = build_crossover_card(dataset, &theme);
        let selected = dataset.group_ids()[0];

        Ok(Self {
            dataset,
            theme,
            registry,
            selected,
            aggregate,
            crossover,
        })
    }

    pub fn selected(&self) -> EndpointId {
        self.selected
    }

    /// Tab transition: select an endpoint group by identifier.
    pub fn select(&mut self, id: EndpointId) {
        self.selected = id;
    }

    /// Tab transition from an externally supplied name.
    pub fn select_by_name(&mut self, name: &str) -> Result<(), ReportError> {
        self.select(name.parse()?);
        Ok(())
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// Produce the snapshot the render layer consumes.
    ///
    /// Rebinds the theme on every call; binding is idempotent, so repeated
    /// snapshots leave the token registry untouched.
    pub fn snapshot(&mut self) -> Result<DashboardSnapshot, ReportError> {
        self.registry.bind(&self.theme)?;

        let tabs = self
            .dataset
            .group_ids()
            .iter()
            .map(|&id| TabState {
                id,
                selected: id == self.selected,
            })
            .collect();

        Ok(DashboardSnapshot {
            selected: self.selected,
            tabs,
            headline: headline(self.dataset, &self.theme),
            aggregate: self.aggregate.clone(),
            detail: build_detail_card(self.dataset, &self.theme, self.selected),
            crossover: self.crossover.clone(),
            theme_css: self.registry.to_css(),
        })
    }
}

fn series_label<'a>(theme: &'a SeriesTheme, key: &'a str) -> &'a str {
    theme.style(key).map(|s| s.label.as_str()).unwrap_or(key)
}

fn headline(dataset: &MetricsDataset, theme: &SeriesTheme) -> String {
    let record = dataset.aggregate();
    let (winner, loser) = if record.percent_difference >= 0.0 {
        (SERIES_RUST, SERIES_GO)
    } else {
        (SERIES_GO, SERIES_RUST)
    };
    format!(
        "{} outperforms {} by {}% in overall throughput",
        series_label(theme, winner),
        series_label(theme, loser),
        record.percent_difference.abs()
    )
}

fn build_aggregate_card(dataset: &MetricsDataset, theme: &SeriesTheme) -> ChartCard {
    let record = dataset.aggregate();
    let go = series_label(theme, SERIES_GO);
    let rust = series_label(theme, SERIES_RUST);

    let spec = ChartSpec::new("aggregate-chart", "Overall Performance", ChartKind::Bar)
        .with_labels(vec![record.metric.clone()])
        .with_series(
            SeriesSpec::new(go, token_name(SERIES_GO)).with_values(vec![Some(record.value_a)]),
        )
        .with_series(
            SeriesSpec::new(rust, token_name(SERIES_RUST)).with_values(vec![Some(record.value_b)]),
        );

    let payload = [
        TooltipEntry::new(go, record.value_a),
        TooltipEntry::new(rust, record.value_b),
    ];
    let tooltips = tooltip::render(true, &payload).into_iter().collect();

    ChartCard { spec, tooltips }
}

fn build_detail_card(dataset: &MetricsDataset, theme: &SeriesTheme, id: EndpointId) -> ChartCard {
    let records = dataset.group(id);
    let go = series_label(theme, SERIES_GO);
    let rust = series_label(theme, SERIES_RUST);

    let spec = ChartSpec::new(
        "detail-chart",
        "Detailed Metrics Comparison",
        ChartKind::HorizontalBar,
    )
    .with_labels(records.iter().map(|r| r.metric.clone()).collect())
    .with_series(
        SeriesSpec::new(go, token_name(SERIES_GO))
            .with_values(records.iter().map(|r| Some(r.value_a)).collect()),
    )
    .with_series(
        SeriesSpec::new(rust, token_name(SERIES_RUST))
            .with_values(records.iter().map(|r| Some(r.value_b)).collect()),
    );

    let tooltips = records
        .iter()
        .filter_map(|r| {
            tooltip::render(
                true,
                &[
                    TooltipEntry::new(go, r.value_a),
                    TooltipEntry::new(rust, r.value_b),
                ],
            )
        })
        .collect();

    ChartCard { spec, tooltips }
}

/// Cross-endpoint line chart: six series (two systems x three groups) over
/// a shared category axis. Identically named metrics from different groups
/// stay separate slots; labels are deliberately not deduplicated.
fn build_crossover_card(dataset: &MetricsDataset, theme: &SeriesTheme) -> ChartCard {
    let go = series_label(theme, SERIES_GO);
    let rust = series_label(theme, SERIES_RUST);

    let mut labels = Vec::new();
    for id in dataset.group_ids() {
        labels.extend(dataset.group(id).iter().map(|r| r.metric.clone()));
    }
    let total = labels.len();

    let mut spec = ChartSpec::new(
        "crossover-chart",
        "Performance by Endpoint",
        ChartKind::Line,
    )
    .with_labels(labels);

    let mut offset = 0;
    for id in dataset.group_ids() {
        let records = dataset.group(id);

        let mut go_values = vec![None; total];
        let mut rust_values = vec![None; total];
        for (i, r) in records.iter().enumerate() {
            go_values[offset + i] = Some(r.value_a);
            rust_values[offset + i] = Some(r.value_b);
        }

        let mut go_series = SeriesSpec::new(
            format!("{} - {}", go, id.label()),
            token_name(SERIES_GO),
        )
        .with_values(go_values);
        let mut rust_series = SeriesSpec::new(
            format!("{} - {}", rust, id.label()),
            token_name(SERIES_RUST),
        )
        .with_values(rust_values);
        if let Some((on, off)) = group_dash(id) {
            go_series = go_series.with_dash(on, off);
            rust_series = rust_series.with_dash(on, off);
        }

        spec = spec.with_series(go_series).with_series(rust_series);
        offset += records.len();
    }

    let mut tooltips = Vec::new();
    for id in dataset.group_ids() {
        for r in dataset.group(id) {
            let payload = [
                TooltipEntry::new(format!("{} - {}", go, id.label()), r.value_a),
                TooltipEntry::new(format!("{} - {}", rust, id.label()), r.value_b),
            ];
            if let Some(fragment) = tooltip::render(true, &payload) {
                tooltips.push(fragment);
            }
        }
    }

    ChartCard { spec, tooltips }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> SeriesTheme {
        SeriesTheme::new()
            .with_series(SERIES_GO, "Go", "#00add8")
            .with_series(SERIES_RUST, "Rust", "#dea584")
    }

    #[test]
    fn initial_selection_is_the_first_group_id() {
        let view = ComparisonView::new(theme()).unwrap();
        assert_eq!(view.selected(), EndpointId::Ping);
        assert_eq!(view.selected(), MetricsDataset::get().group_ids()[0]);
    }

    #[test]
    fn selecting_a_tab_swaps_only_the_detail_chart_input() {
        let mut view = ComparisonView::new(theme()).unwrap();
        let before = view.snapshot().unwrap();

        view.select_by_name("data").unwrap();
        let after = view.snapshot().unwrap();

        assert_eq!(after.selected, EndpointId::Data);
        assert_eq!(before.aggregate, after.aggregate);
        assert_eq!(before.crossover, after.crossover);
        assert_ne!(before.detail, after.detail);

        let expected: Vec<Option<f64>> = MetricsDataset::get()
            .group(EndpointId::Data)
            .iter()
            .map(|r| Some(r.value_a))
            .collect();
        assert_eq!(after.detail.spec.series[0].values, expected);
    }

    #[test]
    fn selecting_an_unknown_tab_name_fails_and_keeps_state() {
        let mut view = ComparisonView::new(theme()).unwrap();
        let err = view.select_by_name("upload").unwrap_err();
        assert!(matches!(err, ReportError::UnknownGroup(_)));
        assert_eq!(view.selected(), EndpointId::Ping);
    }

    #[test]
    fn detail_chart_for_data_carries_the_literal_mean_latency_pair() {
        let mut view = ComparisonView::new(theme()).unwrap();
        view.select(EndpointId::Data);
        let snapshot = view.snapshot().unwrap();

        let spec = &snapshot.detail.spec;
        let idx = spec
            .labels
            .iter()
            .position(|l| l == "Mean Latency (ms)")
            .unwrap();
        assert_eq!(spec.series[0].values[idx], Some(2071.92));
        assert_eq!(spec.series[1].values[idx], Some(1347.12));
    }

    #[test]
    fn repeated_snapshots_do_not_mutate_the_token_registry() {
        let mut view = ComparisonView::new(theme()).unwrap();
        let _ = view.snapshot().unwrap();
        let revision = view.registry().revision();

        let _ = view.snapshot().unwrap();
        let _ = view.snapshot().unwrap();
        assert_eq!(view.registry().revision(), revision);
    }

    #[test]
    fn crossover_chart_keeps_duplicate_labels_across_groups() {
        let mut view = ComparisonView::new(theme()).unwrap();
        let snapshot = view.snapshot().unwrap();
        let spec = &snapshot.crossover.spec;

        assert_eq!(spec.labels.len(), 21);
        let mean_slots = spec
            .labels
            .iter()
            .filter(|l| *l == "Mean Latency (ms)")
            .count();
        assert_eq!(mean_slots, 3);

        assert_eq!(spec.series.len(), 6);
        assert_eq!(spec.series[0].name, "Go - Ping");
        assert_eq!(spec.series[3].name, "Rust - Data");
        assert_eq!(spec.series[3].dash, Some((5, 5)));

        // Each series only spans its own group's segment.
        let data_go = &spec.series[2];
        assert_eq!(data_go.values[0], None);
        assert_eq!(data_go.values[7], Some(2071.92));
        assert_eq!(data_go.values[14], None);
    }

    #[test]
    fn tabs_mark_exactly_the_selected_entry() {
        let mut view = ComparisonView::new(theme()).unwrap();
        view.select(EndpointId::Process);
        let snapshot = view.snapshot().unwrap();

        let selected: Vec<EndpointId> = snapshot
            .tabs
            .iter()
            .filter(|t| t.selected)
            .map(|t| t.id)
            .collect();
        assert_eq!(selected, vec![EndpointId::Process]);
        assert_eq!(snapshot.tabs.len(), 3);
    }

    #[test]
    fn series_without_a_themed_label_falls_back_to_its_key() {
        let partial = SeriesTheme::new().with_series(SERIES_GO, "Go", "#00add8");
        let mut view = ComparisonView::new(partial).unwrap();
        view.select(EndpointId::Data);
        let snapshot = view.snapshot().unwrap();

        let spec = &snapshot.detail.spec;
        assert_eq!(spec.series[0].name, "Go");
        assert_eq!(spec.series[1].name, SERIES_RUST);

        let idx = spec
            .labels
            .iter()
            .position(|l| l == "Mean Latency (ms)")
            .unwrap();
        assert_eq!(spec.series[0].values[idx], Some(2071.92));
        assert_eq!(spec.series[1].values[idx], Some(1347.12));
    }

    #[test]
    fn headline_names_the_faster_system() {
        let mut view = ComparisonView::new(theme()).unwrap();
        let snapshot = view.snapshot().unwrap();
        assert_eq!(
            snapshot.headline,
            "Rust outperforms Go by 17.8% in overall throughput"
        );
    }
}
