//! # engram-health
//!
//! Predictive health for the memory store: an append-only snapshot log, an
//! ensemble forecaster with uncertainty bands, a robust (median/MAD)
//! anomaly detector, and a debounced alert dispatcher, coordinated by
//! [`HealthEngine`] on the metrics cadence.

pub mod alerts;
pub mod anomaly;
pub mod engine;
pub mod forecast;
pub mod snapshots;
pub mod tracing_setup;

pub use alerts::AlertDispatcher;
pub use anomaly::AnomalyDetector;
pub use engine::HealthEngine;
pub use forecast::Forecaster;
pub use snapshots::SnapshotLog;
