use serde::{Deserialize, Serialize};

use crate::memory::ConfidenceBand;

/// A single ranked result from the hybrid retrieval engine.
/// Ephemeral: produced per query, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub record_id: String,
    /// Cosine similarity against the query embedding, clamped to [0, 1].
    pub vector_score: f64,
    /// Relationship corroboration signal, 0–1 (0 when the record was not
    /// co-referenced by any candidate).
    pub graph_boost: f64,
    /// Weighted blend of vector and graph signals, clamped to [0, 1].
    pub fused_score: f64,
    /// Coarse bucketing of the fused score.
    pub confidence_band: ConfidenceBand,
}
