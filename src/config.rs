//! Configuration for report generation and the dashboard server.

use crate::error::ReportError;
use crate::theme::SeriesTheme;
use crate::view::{SERIES_GO, SERIES_RUST};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Colors assigned to the two compared router series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub go_color: String,
    pub rust_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report title shown on the dashboard header
    pub title: String,
    /// Subtitle below the header
    pub subtitle: String,
    /// Output directory for exported reports
    pub output_dir: PathBuf,
    /// Height of the aggregate and cross-endpoint charts in pixels
    pub chart_height: u32,
    /// Height of the detail chart in pixels
    pub detail_chart_height: u32,
    /// Series colors
    pub theme: ThemeConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "API Router Performance Comparison".to_string(),
            subtitle: "Comparing high-performance API routers in Go and Rust".to_string(),
            output_dir: PathBuf::from("./benchmark-reports"),
            chart_height: 300,
            detail_chart_height: 400,
            theme: ThemeConfig {
                go_color: "#00add8".to_string(),
                rust_color: "#dea584".to_string(),
            },
        }
    }
}

impl ReportConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ReportError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ReportError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file(&self, path: &Path) -> Result<(), ReportError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ReportError::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The series theme the configured colors describe.
    pub fn series_theme(&self) -> SeriesTheme {
        SeriesTheme::new()
            .with_series(SERIES_GO, "Go", self.theme.go_color.clone())
            .with_series(SERIES_RUST, "Rust", self.theme.rust_color.clone())
    }
}
