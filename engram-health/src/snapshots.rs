//! Append-only metric snapshot log.
//!
//! Snapshots are ordered by ingest and never mutated after creation. Each
//! named metric reads out as an f64 series across the log.

use engram_core::constants::MAX_SNAPSHOT_LOG;
use engram_core::models::MetricSnapshot;
use tracing::warn;

/// The ordered snapshot sequence, with ring-buffer retention.
#[derive(Debug, Clone, Default)]
pub struct SnapshotLog {
    entries: Vec<MetricSnapshot>,
    max_entries: usize,
}

impl SnapshotLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            max_entries: MAX_SNAPSHOT_LOG,
        }
    }

    /// Create with a custom retention capacity.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Append a snapshot. A timestamp earlier than the previous entry is
    /// accepted (collaborator clock skew) but logged; order is by ingest.
    pub fn push(&mut self, snapshot: MetricSnapshot) {
        if let Some(last) = self.entries.last() {
            if snapshot.timestamp < last.timestamp {
                warn!(
                    timestamp = %snapshot.timestamp,
                    previous = %last.timestamp,
                    "snapshot timestamp earlier than previous entry"
                );
            }
        }
        self.entries.push(snapshot);
        if self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&MetricSnapshot> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[MetricSnapshot] {
        &self.entries
    }

    /// The trailing `n` snapshots (all of them when fewer exist).
    pub fn last_n(&self, n: usize) -> &[MetricSnapshot] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// The full series of a named metric across the log, in ingest order.
    /// Unknown metric names yield an empty series.
    pub fn series(&self, metric_name: &str) -> Vec<f64> {
        self.entries
            .iter()
            .filter_map(|s| s.metric_value(metric_name))
            .collect()
    }
}
