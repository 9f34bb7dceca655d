//! Robust per-metric anomaly scoring.
//!
//! Median/MAD distance rather than mean/stddev: a single extreme value in
//! the baseline shifts the median by at most one rank step, so a past spike
//! does not mask the next one.

use chrono::{DateTime, Utc};
use engram_core::config::HealthConfig;
use engram_core::constants::{MAD_CONSISTENCY, MIN_MAD_SCALE};
use engram_core::models::AnomalyScore;

/// Scores one metric's latest value against a rolling baseline of prior
/// values. One detector instance per metric; no cross-metric state.
#[derive(Debug, Clone)]
pub struct AnomalyDetector {
    metric_name: String,
    baseline_window: usize,
    min_baseline: usize,
    mad_threshold: f64,
}

impl AnomalyDetector {
    pub fn new(metric_name: &str, config: &HealthConfig) -> Self {
        Self {
            metric_name: metric_name.to_string(),
            baseline_window: config.baseline_window,
            min_baseline: config.min_baseline,
            mad_threshold: config.mad_threshold,
        }
    }

    pub fn metric_name(&self) -> &str {
        &self.metric_name
    }

    /// Score `value` against the trailing window of `baseline` (values
    /// strictly before it). Below `min_baseline` prior points the detector
    /// stays quiet: score 0, never flagged.
    pub fn score(
        &self,
        baseline: &[f64],
        snapshot_timestamp: DateTime<Utc>,
        value: f64,
    ) -> AnomalyScore {
        let window = if baseline.len() > self.baseline_window {
            &baseline[baseline.len() - self.baseline_window..]
        } else {
            baseline
        };

        if window.len() < self.min_baseline {
            return AnomalyScore {
                snapshot_timestamp,
                metric_name: self.metric_name.clone(),
                score: 0.0,
                is_flagged: false,
            };
        }

        let center = median(window);
        let deviations: Vec<f64> = window.iter().map(|v| (v - center).abs()).collect();
        let mad = median(&deviations);
        let scale = (mad * MAD_CONSISTENCY).max(MIN_MAD_SCALE);
        let score = (value - center).abs() / scale;

        AnomalyScore {
            snapshot_timestamp,
            metric_name: self.metric_name.clone(),
            score,
            is_flagged: score > self.mad_threshold,
        }
    }
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
