use serde::{Deserialize, Serialize};

/// Point forecast with uncertainty bands for a single metric.
///
/// Recomputed on each cadence tick; the previous forecast for the metric is
/// replaced, not merged. The three sequences are parallel: index `i` holds
/// the estimate and bounds for `i + 1` steps ahead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub metric_name: String,
    pub horizon_steps: usize,
    pub point_estimates: Vec<f64>,
    pub lower_bound: Vec<f64>,
    pub upper_bound: Vec<f64>,
}
