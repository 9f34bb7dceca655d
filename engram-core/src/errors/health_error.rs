/// Health subsystem errors (forecasting, anomaly scoring).
#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    /// Expected quiet condition: the metric does not yet have enough
    /// snapshots to forecast. Not an error to the scheduler.
    #[error("insufficient history: need {needed} snapshots, have {available}")]
    InsufficientHistory { needed: usize, available: usize },

    #[error("unknown metric: {name}")]
    UnknownMetric { name: String },
}
