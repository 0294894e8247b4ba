//! HTML report generation.
//!
//! Assembles the dashboard page as a string: Chart.js from CDN, a
//! generated stylesheet carrying the style tokens, chart payloads embedded
//! as JSON, and pre-rendered tooltip nodes the page script reveals on
//! hover. The same page is served by the dashboard server and written to
//! disk by the export subcommand.

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::view::{ChartCard, DashboardSnapshot};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct ReportRenderer {
    config: ReportConfig,
}

impl ReportRenderer {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Render the full dashboard page for one snapshot.
    pub fn render_page(&self, snapshot: &DashboardSnapshot) -> String {
        let mut html = String::new();

        html.push_str(&self.render_head(snapshot));
        html.push_str("<body>\n    <div class=\"container\">\n");

        html.push_str(&self.render_header_card(snapshot));
        html.push_str(&self.render_aggregate_card(snapshot));
        html.push_str(&self.render_detail_card(snapshot));
        html.push_str(&self.render_chart_card(
            &snapshot.crossover,
            self.config.chart_height,
            None,
        ));

        html.push_str("    </div>\n");
        html.push_str(&self.render_scripts(snapshot));
        html.push_str("</body>\n</html>\n");

        html
    }

    /// Write the rendered report to `dir` as a standalone `index.html`.
    pub fn write_to_dir(
        &self,
        snapshot: &DashboardSnapshot,
        dir: &Path,
    ) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(dir)?;
        let path = dir.join("index.html");
        fs::write(&path, self.render_page(snapshot))?;
        info!("Report written to {}", path.display());
        Ok(path)
    }

    fn render_head(&self, snapshot: &DashboardSnapshot) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <style>
{}

{}
    </style>
</head>
"#,
            self.config.title,
            snapshot.theme_css,
            BASE_CSS,
        )
    }

    fn render_header_card(&self, snapshot: &DashboardSnapshot) -> String {
        format!(
            r#"        <div class="card">
            <h1>{}</h1>
            <p class="subtitle">{}</p>
            <p class="badge">{}</p>
        </div>
"#,
            self.config.title, self.config.subtitle, snapshot.headline,
        )
    }

    fn render_aggregate_card(&self, snapshot: &DashboardSnapshot) -> String {
        self.render_chart_card(&snapshot.aggregate, self.config.chart_height, None)
    }

    fn render_detail_card(&self, snapshot: &DashboardSnapshot) -> String {
        let mut tabs = String::from("            <div class=\"tabs\">\n");
        for tab in &snapshot.tabs {
            let class = if tab.selected { "tab active" } else { "tab" };
            tabs.push_str(&format!(
                "                <a class=\"{}\" href=\"/?endpoint={}\">{}</a>\n",
                class,
                tab.id,
                tab.id.title(),
            ));
        }
        tabs.push_str("            </div>\n");

        self.render_chart_card(
            &snapshot.detail,
            self.config.detail_chart_height,
            Some(&tabs),
        )
    }

    fn render_chart_card(&self, card: &ChartCard, height: u32, extra: Option<&str>) -> String {
        let mut html = format!(
            r#"        <div class="card">
            <h2>{}</h2>
"#,
            card.spec.title,
        );
        if let Some(extra) = extra {
            html.push_str(extra);
        }
        html.push_str(&format!(
            r#"            <div class="chart-container" style="height: {}px">
                <canvas id="{}"></canvas>
            </div>
"#,
            height, card.spec.id,
        ));

        // Hidden tooltip nodes, one per category slot, revealed on hover.
        for (index, fragment) in card.tooltips.iter().enumerate() {
            html.push_str(&format!(
                "            <div class=\"chart-tooltip\" id=\"tooltip-{}-{}\">{}</div>\n",
                card.spec.id,
                index,
                fragment.to_html(),
            ));
        }

        html.push_str("        </div>\n");
        html
    }

    fn render_scripts(&self, snapshot: &DashboardSnapshot) -> String {
        let charts = [&snapshot.aggregate, &snapshot.detail, &snapshot.crossover];
        let mut configs = String::from("{");
        for (i, card) in charts.iter().enumerate() {
            if i > 0 {
                configs.push_str(", ");
            }
            configs.push_str(&format!(
                "\"{}\": {}",
                card.spec.id,
                card.spec.chart_js_config(),
            ));
        }
        configs.push('}');

        format!(
            r#"    <script>
        const chartConfigs = {};

{}
    </script>
"#,
            configs, DASHBOARD_JS,
        )
    }
}

const BASE_CSS: &str = r#"        * { margin: 0; padding: 0; box-sizing: border-box; }
        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background: #f8f9fa; color: #333; }
        .container { max-width: 1200px; margin: 0 auto; padding: 20px; }
        .card { background: white; padding: 25px; border-radius: 8px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); margin-bottom: 30px; }
        .card h1 { color: #2d3748; text-align: center; margin-bottom: 10px; }
        .card h2 { color: #4a5568; margin-bottom: 15px; }
        .subtitle { text-align: center; color: #718096; margin-bottom: 15px; }
        .badge { text-align: center; font-weight: bold; background: #edf2f7; border-radius: 12px; padding: 8px; }
        .tabs { margin-bottom: 15px; }
        .tab { display: inline-block; padding: 8px 16px; margin-right: 8px; border-radius: 6px; color: #4a5568; text-decoration: none; background: #edf2f7; }
        .tab.active { background: var(--color-go); color: white; }
        .chart-container { position: relative; width: 100%; }
        .chart-tooltip { display: none; position: absolute; background: white; border: 1px solid #e2e8f0; border-radius: 6px; padding: 8px; box-shadow: 0 2px 6px rgba(0,0,0,0.15); pointer-events: none; }
        .tooltip-grid { display: grid; grid-template-columns: auto auto; gap: 4px 12px; }
        .tooltip-entry { display: flex; flex-direction: column; }
        .tooltip-label { font-size: 0.7rem; text-transform: uppercase; color: #718096; }
        .tooltip-value { font-weight: bold; color: #2d3748; }"#;

const DASHBOARD_JS: &str = r#"        function cssToken(name) {
            return getComputedStyle(document.documentElement).getPropertyValue(name).trim();
        }

        function hideTooltips(chartId) {
            document.querySelectorAll(`[id^="tooltip-${chartId}-"]`).forEach(node => {
                node.style.display = 'none';
            });
        }

        function externalTooltip(chartId) {
            return (context) => {
                hideTooltips(chartId);
                const tooltip = context.tooltip;
                if (tooltip.opacity === 0 || !tooltip.dataPoints || tooltip.dataPoints.length === 0) {
                    return;
                }
                const index = tooltip.dataPoints[0].dataIndex;
                const node = document.getElementById(`tooltip-${chartId}-${index}`);
                if (!node) {
                    return;
                }
                const canvas = context.chart.canvas;
                node.style.display = 'block';
                node.style.left = canvas.offsetLeft + tooltip.caretX + 'px';
                node.style.top = canvas.offsetTop + tooltip.caretY + 'px';
            };
        }

        function buildChart(id, config) {
            const canvas = document.getElementById(id);
            if (!canvas) {
                return;
            }
            config.data.datasets.forEach(dataset => {
                const color = cssToken(dataset.colorToken);
                dataset.backgroundColor = color;
                dataset.borderColor = color;
                delete dataset.colorToken;
            });
            config.options.plugins.tooltip = { enabled: false, external: externalTooltip(id) };
            new Chart(canvas, config);
        }

        document.addEventListener('DOMContentLoaded', () => {
            for (const [id, config] of Object.entries(chartConfigs)) {
                buildChart(id, config);
            }
        });"#;
