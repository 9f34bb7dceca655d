//! Weighted score fusion: `fused = vector * w_v + boost * w_g`, clamped to
//! [0, 1].
//!
//! Vector similarity is the primary relevance signal; relationship context
//! is corroborating, not authoritative, which the default 0.8/0.2 weights
//! encode.

use std::collections::HashMap;

use engram_core::config::RetrievalConfig;

/// A candidate after score fusion, before ranking.
#[derive(Debug, Clone)]
pub struct FusedCandidate {
    pub record_id: String,
    pub vector_score: f64,
    pub graph_boost: f64,
    pub fused_score: f64,
}

/// Fuse vector candidates with graph boosts.
///
/// The fusion input is the union of the candidate set and the boosted
/// neighbor set; a record surfaced only by expansion enters with vector
/// score 0. Duplicate ids keep their maximum component scores.
pub fn fuse(
    candidates: &[(String, f64)],
    boosts: &HashMap<String, f64>,
    config: &RetrievalConfig,
) -> Vec<FusedCandidate> {
    let mut by_id: HashMap<String, (f64, f64)> = HashMap::new();

    for (id, vector_score) in candidates {
        let entry = by_id.entry(id.clone()).or_insert((0.0, 0.0));
        entry.0 = entry.0.max(*vector_score);
    }
    for (id, boost) in boosts {
        let entry = by_id.entry(id.clone()).or_insert((0.0, 0.0));
        entry.1 = entry.1.max(*boost);
    }

    by_id
        .into_iter()
        .map(|(record_id, (vector_score, graph_boost))| {
            let fused_score = (vector_score * config.vector_weight
                + graph_boost * config.graph_weight)
                .clamp(0.0, 1.0);
            FusedCandidate {
                record_id,
                vector_score,
                graph_boost,
                fused_score,
            }
        })
        .collect()
}
