//! Embedded benchmark dataset for the Go vs Rust router comparison.
//!
//! The numbers are the published results of the source benchmark run
//! (10 concurrent connections, 1000 requests per endpoint). Percentage
//! differences are stored as literals alongside the paired values so the
//! rendered report reproduces the published figures exactly.

use crate::error::ReportError;
use crate::MetricRecord;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one benchmarked endpoint scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointId {
    Ping,
    Data,
    Process,
}

impl EndpointId {
    /// Fixed display order, used to generate the tab list.
    pub const ALL: [EndpointId; 3] = [EndpointId::Ping, EndpointId::Data, EndpointId::Process];

    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointId::Ping => "ping",
            EndpointId::Data => "data",
            EndpointId::Process => "process",
        }
    }

    /// Short display name, used in series legends.
    pub fn label(&self) -> &'static str {
        match self {
            EndpointId::Ping => "Ping",
            EndpointId::Data => "Data",
            EndpointId::Process => "Process",
        }
    }

    /// Tab title on the detail card.
    pub fn title(&self) -> &'static str {
        match self {
            EndpointId::Ping => "Ping Endpoint",
            EndpointId::Data => "Data Endpoint",
            EndpointId::Process => "Process Endpoint",
        }
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndpointId {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ping" => Ok(EndpointId::Ping),
            "data" => Ok(EndpointId::Data),
            "process" => Ok(EndpointId::Process),
            other => Err(ReportError::UnknownGroup(other.to_string())),
        }
    }
}

/// The static measurement data behind every chart. Built once, never
/// mutated, safe to share across concurrent readers.
pub struct MetricsDataset {
    aggregate: MetricRecord,
    ping: Vec<MetricRecord>,
    data: Vec<MetricRecord>,
    process: Vec<MetricRecord>,
}

fn record(metric: &str, value_a: f64, value_b: f64, percent_difference: f64) -> MetricRecord {
    MetricRecord::new(metric, value_a, value_b, percent_difference)
}

static DATASET: Lazy<MetricsDataset> = Lazy::new(|| MetricsDataset {
    aggregate: record("Throughput (req/s)", 2117.00, 2494.39, 17.8),
    ping: vec![
        record("Mean Latency (ms)", 1747.35, 1679.92, -3.9),
        record("Median Latency (ms)", 1787.81, 1758.71, -1.6),
        record("P95 Latency (ms)", 2839.14, 2673.05, -5.8),
        record("P99 Latency (ms)", 2970.45, 2744.32, -7.6),
        record("Min Latency (ms)", 501.64, 475.06, -5.3),
        record("Max Latency (ms)", 2981.54, 2754.45, -7.6),
        record("Memory Usage (MB)", 12.41, 6.21, -50.0),
    ],
    data: vec![
        record("Mean Latency (ms)", 2071.92, 1347.12, -35.0),
        record("Median Latency (ms)", 2075.57, 1373.03, -33.8),
        record("P95 Latency (ms)", 3305.88, 2116.20, -36.0),
        record("P99 Latency (ms)", 3411.34, 2191.24, -35.8),
        record("Min Latency (ms)", 554.21, 433.33, -21.8),
        record("Max Latency (ms)", 3427.85, 2204.75, -35.7),
        record("Memory Usage (MB)", 13.46, 6.98, -48.1),
    ],
    process: vec![
        record("Mean Latency (ms)", 3232.10, 3071.32, -5.0),
        record("Median Latency (ms)", 3106.42, 3097.98, -0.3),
        record("P95 Latency (ms)", 5387.03, 5076.93, -5.8),
        record("P99 Latency (ms)", 5580.99, 5220.85, -6.5),
        record("Min Latency (ms)", 910.88, 748.67, -17.8),
        record("Max Latency (ms)", 5628.19, 5268.64, -6.4),
        record("Memory Usage (MB)", 13.83, 9.02, -34.8),
    ],
});

impl MetricsDataset {
    /// Shared instance of the embedded dataset.
    pub fn get() -> &'static MetricsDataset {
        &DATASET
    }

    /// The overall cross-endpoint comparison (throughput).
    pub fn aggregate(&self) -> &MetricRecord {
        &self.aggregate
    }

    /// Ordered metric rows for one endpoint group. Order is
    /// display-significant and preserved verbatim.
    pub fn group(&self, id: EndpointId) -> &[MetricRecord] {
        match id {
            EndpointId::Ping => &self.ping,
            EndpointId::Data => &self.data,
            EndpointId::Process => &self.process,
        }
    }

    /// String-keyed group lookup for externally supplied names.
    pub fn group_by_name(&self, name: &str) -> Result<&[MetricRecord], ReportError> {
        Ok(self.group(name.parse()?))
    }

    /// Group identifiers in fixed display order.
    pub fn group_ids(&self) -> [EndpointId; 3] {
        EndpointId::ALL
    }
}
