//! Shared model types produced and consumed across the workspace.

mod alert;
mod anomaly;
mod forecast;
mod metric_snapshot;
mod retrieval_result;

pub use alert::{AlertEpisode, AlertKind};
pub use anomaly::AnomalyScore;
pub use forecast::Forecast;
pub use metric_snapshot::MetricSnapshot;
pub use retrieval_result::RetrievalResult;
