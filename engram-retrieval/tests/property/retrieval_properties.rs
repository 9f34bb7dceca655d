//! Property tests for the retrieval pipeline: ordering, score bounds, and
//! band assignment hold for arbitrary stores and queries.

use proptest::prelude::*;

use engram_core::config::RetrievalConfig;
use engram_core::errors::EngramResult;
use engram_core::memory::{Category, ConfidenceBand, MemoryRecord, RelationType, RelationshipEdge};
use engram_core::traits::{EmbeddingProvider, MemoryStore};
use engram_retrieval::RetrievalEngine;
use engram_store::InMemoryStore;

struct FixedEmbedder(Vec<f32>);

impl EmbeddingProvider for FixedEmbedder {
    fn embed(&self, _text: &str) -> EngramResult<Vec<f32>> {
        Ok(self.0.clone())
    }

    fn dimensions(&self) -> usize {
        self.0.len()
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Non-degenerate 3-dim embeddings: every component strictly positive so no
/// vector has zero norm and all cosines are positive.
fn embedding() -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(0.05f32..1.0, 3)
}

fn seeded_store(embeddings: &[Vec<f32>], edge_weights: &[f64]) -> InMemoryStore {
    let store = InMemoryStore::new();
    for (i, embedding) in embeddings.iter().enumerate() {
        let mut record = MemoryRecord::new(
            format!("record {i}"),
            embedding.clone(),
            Category::ALL[i % Category::COUNT],
        );
        record.id = format!("r{i}");
        store.create(record).unwrap();
    }
    // Chain edges between consecutive records with the given weights.
    for (i, weight) in edge_weights.iter().enumerate() {
        if i + 1 < embeddings.len() {
            store
                .add_relationship(&RelationshipEdge::new(
                    format!("r{i}"),
                    format!("r{}", i + 1),
                    RelationType::RelatedTo,
                    Some(*weight),
                ))
                .unwrap();
        }
    }
    store
}

proptest! {
    #[test]
    fn results_sorted_bounded_and_banded(
        embeddings in proptest::collection::vec(embedding(), 1..25),
        edge_weights in proptest::collection::vec(0.0f64..1.0, 0..24),
        query in embedding(),
        limit in 1usize..20,
    ) {
        let store = seeded_store(&embeddings, &edge_weights);
        let embedder = FixedEmbedder(query);
        let engine = RetrievalEngine::new(&embedder, &store, RetrievalConfig::default());

        let results = engine.search("query", limit, None).unwrap();

        prop_assert!(results.len() <= limit);
        for pair in results.windows(2) {
            prop_assert!(pair[0].fused_score >= pair[1].fused_score);
        }
        for r in &results {
            prop_assert!((0.0..=1.0).contains(&r.fused_score));
            prop_assert!((0.0..=1.0).contains(&r.vector_score));
            prop_assert!((0.0..=1.0).contains(&r.graph_boost));
            prop_assert_eq!(r.confidence_band, ConfidenceBand::from_score(r.fused_score));
        }
    }

    #[test]
    fn search_is_deterministic(
        embeddings in proptest::collection::vec(embedding(), 1..15),
        query in embedding(),
    ) {
        let store = seeded_store(&embeddings, &[]);
        let embedder = FixedEmbedder(query);
        let engine = RetrievalEngine::new(&embedder, &store, RetrievalConfig::default());

        let first = engine.search("query", 10, None).unwrap();
        let second = engine.search("query", 10, None).unwrap();

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            prop_assert_eq!(&a.record_id, &b.record_id);
            prop_assert_eq!(a.fused_score.to_bits(), b.fused_score.to_bits());
        }
    }
}
