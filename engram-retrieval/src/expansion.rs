//! One-hop relationship expansion.
//!
//! Each record one hop from a vector candidate receives a graph boost equal
//! to the edge weight (the configured default when unset), capped at
//! `max_graph_boost` so graph signal never dominates vector similarity.

use std::collections::HashMap;

use engram_core::config::RetrievalConfig;
use engram_core::errors::EngramResult;
use engram_core::traits::MemoryStore;

/// Collect graph boosts for every record co-referenced by the candidate
/// set. A record reachable through several edges keeps its maximum boost.
pub fn graph_boosts(
    store: &dyn MemoryStore,
    candidate_ids: &[String],
    config: &RetrievalConfig,
) -> EngramResult<HashMap<String, f64>> {
    let mut boosts: HashMap<String, f64> = HashMap::new();

    for id in candidate_ids {
        for edge in store.get_relationships(id, None)? {
            let Some(neighbor) = edge.other_endpoint(id) else {
                continue;
            };
            let boost = edge
                .weight
                .unwrap_or(config.default_edge_weight)
                .clamp(0.0, config.max_graph_boost);
            let entry = boosts.entry(neighbor.to_string()).or_insert(0.0);
            if boost > *entry {
                *entry = boost;
            }
        }
    }

    Ok(boosts)
}
