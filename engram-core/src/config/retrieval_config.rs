use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
///
/// The fusion weights and boost bounds are deliberate defaults, not fixed
/// requirements, so they live here rather than in `constants`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Weight of vector similarity in the fused score.
    pub vector_weight: f64,
    /// Weight of the graph boost in the fused score.
    pub graph_weight: f64,
    /// Boost assumed for edges without an explicit weight.
    pub default_edge_weight: f64,
    /// Upper bound on any single record's graph boost.
    pub max_graph_boost: f64,
    /// Per-call deadline in milliseconds. 0 disables the deadline.
    pub timeout_ms: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            vector_weight: defaults::VECTOR_WEIGHT,
            graph_weight: defaults::GRAPH_WEIGHT,
            default_edge_weight: defaults::DEFAULT_EDGE_WEIGHT,
            max_graph_boost: defaults::MAX_GRAPH_BOOST,
            timeout_ms: defaults::RETRIEVAL_TIMEOUT_MS,
        }
    }
}
