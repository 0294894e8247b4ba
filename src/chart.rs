//! Renderer-agnostic chart descriptions.
//!
//! The comparison view produces `ChartSpec` values; the report layer turns
//! them into Chart.js configurations. Colors are carried as style-token
//! names and resolved against the page's CSS custom properties at paint
//! time.

use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Bar,
    /// Category on the value axis, one bar pair per metric row.
    HorizontalBar,
    Line,
}

/// One plotted series. `values` is aligned with the chart's category
/// labels; `None` marks a slot the series has no point for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSpec {
    pub name: String,
    /// Style token supplying the stroke/fill color, e.g. `--color-go`.
    pub color_token: String,
    /// Dash pattern (on, off) for line series; solid when absent.
    pub dash: Option<(u8, u8)>,
    pub values: Vec<Option<f64>>,
}

impl SeriesSpec {
    pub fn new(name: impl Into<String>, color_token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color_token: color_token.into(),
            dash: None,
            values: Vec::new(),
        }
    }

    pub fn with_dash(mut self, on: u8, off: u8) -> Self {
        self.dash = Some((on, off));
        self
    }

    pub fn with_values(mut self, values: Vec<Option<f64>>) -> Self {
        self.values = values;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Canvas element id on the rendered page.
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<SeriesSpec>,
}

impl ChartSpec {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            labels: Vec::new(),
            series: Vec::new(),
        }
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_series(mut self, series: SeriesSpec) -> Self {
        self.series.push(series);
        self
    }

    /// Chart.js configuration for this spec. The page script replaces each
    /// dataset's `colorToken` with the resolved custom-property value
    /// before constructing the chart.
    pub fn chart_js_config(&self) -> Value {
        let datasets: Vec<Value> = self
            .series
            .iter()
            .map(|series| {
                let mut dataset = json!({
                    "label": series.name,
                    "data": series.values,
                    "colorToken": series.color_token,
                    "borderWidth": 2,
                });
                if let Some((on, off)) = series.dash {
                    dataset["borderDash"] = json!([on, off]);
                }
                if self.kind == ChartKind::Line {
                    dataset["spanGaps"] = json!(false);
                    dataset["fill"] = json!(false);
                }
                dataset
            })
            .collect();

        let (chart_type, index_axis) = match self.kind {
            ChartKind::Bar => ("bar", "x"),
            ChartKind::HorizontalBar => ("bar", "y"),
            ChartKind::Line => ("line", "x"),
        };

        json!({
            "type": chart_type,
            "data": {
                "labels": self.labels,
                "datasets": datasets,
            },
            "options": {
                "indexAxis": index_axis,
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": {
                    "legend": { "position": "top" },
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_bars_put_the_category_on_the_value_axis() {
        let spec = ChartSpec::new("detail", "Detail", ChartKind::HorizontalBar)
            .with_labels(vec!["Mean Latency (ms)".to_string()])
            .with_series(SeriesSpec::new("Go", "--color-go").with_values(vec![Some(2071.92)]));

        let config = spec.chart_js_config();
        assert_eq!(config["type"], "bar");
        assert_eq!(config["options"]["indexAxis"], "y");
        assert_eq!(config["data"]["datasets"][0]["data"][0], 2071.92);
        assert_eq!(config["data"]["datasets"][0]["colorToken"], "--color-go");
    }

    #[test]
    fn line_series_carry_dash_pattern_and_null_slots() {
        let spec = ChartSpec::new("crossover", "Crossover", ChartKind::Line)
            .with_labels(vec!["a".to_string(), "b".to_string()])
            .with_series(
                SeriesSpec::new("Go - Data", "--color-go")
                    .with_dash(5, 5)
                    .with_values(vec![None, Some(1.5)]),
            );

        let config = spec.chart_js_config();
        assert_eq!(config["type"], "line");
        assert_eq!(config["data"]["datasets"][0]["borderDash"], json!([5, 5]));
        assert_eq!(config["data"]["datasets"][0]["data"][0], Value::Null);
        assert_eq!(config["data"]["datasets"][0]["data"][1], 1.5);
        assert_eq!(config["data"]["datasets"][0]["spanGaps"], false);
    }
}
