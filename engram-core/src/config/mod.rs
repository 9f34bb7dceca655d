//! Configuration for the retrieval and health subsystems.
//!
//! All fields have defaults; configs deserialize from TOML with any subset
//! of fields present.

mod health_config;
mod retrieval_config;

pub use health_config::HealthConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{EngramError, EngramResult};

/// Default values shared by the config structs.
pub(crate) mod defaults {
    /// Weight of the vector similarity signal in score fusion. Vector
    /// similarity is the primary relevance signal.
    pub const VECTOR_WEIGHT: f64 = 0.8;
    /// Weight of the graph corroboration signal in score fusion.
    pub const GRAPH_WEIGHT: f64 = 0.2;
    /// Boost applied for an edge with no explicit weight.
    pub const DEFAULT_EDGE_WEIGHT: f64 = 0.1;
    /// Cap on the graph boost so graph signal never dominates vector
    /// similarity.
    pub const MAX_GRAPH_BOOST: f64 = 0.3;
    /// Retrieval call timeout in milliseconds. 0 disables the deadline.
    pub const RETRIEVAL_TIMEOUT_MS: u64 = 2_000;

    /// Anomaly threshold in MAD units.
    pub const MAD_THRESHOLD: f64 = 3.0;
    /// Rolling baseline window for anomaly scoring.
    pub const BASELINE_WINDOW: usize = 50;
    /// Minimum baseline snapshots before the detector may flag.
    pub const MIN_BASELINE: usize = 5;
    /// Minimum history before a forecast can be produced.
    pub const MIN_FORECAST_HISTORY: usize = 10;
    /// Consecutive non-flagged evaluations before an episode resolves.
    pub const RESOLVE_AFTER: usize = 3;
    /// Forecast horizon in cadence steps.
    pub const FORECAST_HORIZON: usize = 12;
}

/// Top-level configuration for the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngramConfig {
    pub retrieval: RetrievalConfig,
    pub health: HealthConfig,
}

impl EngramConfig {
    /// Parse a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(raw: &str) -> EngramResult<Self> {
        toml::from_str(raw).map_err(|e| EngramError::ConfigError(e.to_string()))
    }
}
