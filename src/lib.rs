//! Routerbench Reporting Framework
//!
//! This crate renders the comparative benchmark report for the Go and Rust
//! API router implementations. It includes:
//! - The embedded measurement dataset (per-endpoint metric comparisons)
//! - Series theming published as style tokens for the chart layer
//! - Chart composition for the aggregate, detail and cross-endpoint views
//! - HTML report generation and the dashboard/report API server

pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod report;
pub mod server;
pub mod theme;
pub mod tooltip;
pub mod view;

use serde::{Deserialize, Serialize};

/// A single measured metric compared between the two router implementations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub metric: String,
    /// Measured value for the baseline system (Go).
    pub value_a: f64,
    /// Measured value for the compared system (Rust).
    pub value_b: f64,
    /// Percentage difference from the source report, stored as an
    /// authoritative literal and never recomputed at render time.
    pub percent_difference: f64,
}

impl MetricRecord {
    pub fn new(
        metric: impl Into<String>,
        value_a: f64,
        value_b: f64,
        percent_difference: f64,
    ) -> Self {
        Self {
            metric: metric.into(),
            value_a,
            value_b,
            percent_difference,
        }
    }
}
