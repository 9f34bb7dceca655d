use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anomaly score for one snapshot of one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyScore {
    pub snapshot_timestamp: DateTime<Utc>,
    pub metric_name: String,
    /// Distance from the robust baseline in MAD units. Unbounded;
    /// higher = more anomalous.
    pub score: f64,
    /// Whether the score exceeds the configured threshold.
    pub is_flagged: bool,
}
