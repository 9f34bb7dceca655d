//! Error taxonomy for the Engram workspace.
//!
//! Each subsystem has its own error enum; [`EngramError`] aggregates them so
//! callers can hold a single error type across crate boundaries.

mod health_error;
mod retrieval_error;
mod store_error;

pub use health_error::HealthError;
pub use retrieval_error::RetrievalError;
pub use store_error::StoreError;

/// Top-level error type aggregating all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum EngramError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Health(#[from] HealthError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("config error: {0}")]
    ConfigError(String),
}

impl EngramError {
    /// Whether this is the expected quiet condition of a metric not yet
    /// having enough history to forecast. Logged at low severity by the
    /// health engine, never surfaced to the scheduler.
    pub fn is_insufficient_history(&self) -> bool {
        matches!(
            self,
            Self::Health(HealthError::InsufficientHistory { .. })
        )
    }
}

/// Convenience result alias used across the workspace.
pub type EngramResult<T> = std::result::Result<T, EngramError>;
