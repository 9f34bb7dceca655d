use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of notification emitted for an alert episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Opened,
    Resolved,
}

/// A continuous span from when a metric first breaches the anomaly
/// threshold until it returns to normal for a sustained number of
/// evaluations.
///
/// Invariant: at most one open episode per metric at a time. A new breach
/// while one is open updates `peak_score` rather than opening a duplicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEpisode {
    pub metric_name: String,
    pub opened_at: DateTime<Utc>,
    /// Set when the episode resolves; `None` while open.
    pub closed_at: Option<DateTime<Utc>>,
    /// Highest anomaly score observed during the episode.
    pub peak_score: f64,
}

impl AlertEpisode {
    pub fn is_open(&self) -> bool {
        self.closed_at.is_none()
    }
}
