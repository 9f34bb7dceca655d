use serde::{Deserialize, Serialize};

use super::defaults;

/// Forecasting, anomaly detection, and alert dispatch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Anomaly threshold in MAD units; scores above this are flagged.
    pub mad_threshold: f64,
    /// Rolling baseline window (snapshots) for anomaly scoring.
    pub baseline_window: usize,
    /// Below this many baseline snapshots the detector stays quiet:
    /// score 0, never flagged.
    pub min_baseline: usize,
    /// Minimum history (snapshots) required to produce a forecast.
    pub min_forecast_history: usize,
    /// Consecutive non-flagged evaluations before an open episode resolves.
    pub resolve_after: usize,
    /// Forecast horizon in cadence steps.
    pub forecast_horizon: usize,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            mad_threshold: defaults::MAD_THRESHOLD,
            baseline_window: defaults::BASELINE_WINDOW,
            min_baseline: defaults::MIN_BASELINE,
            min_forecast_history: defaults::MIN_FORECAST_HISTORY,
            resolve_after: defaults::RESOLVE_AFTER,
            forecast_horizon: defaults::FORECAST_HORIZON,
        }
    }
}
