//! [`InMemoryStore`] — the concurrent record store.
//!
//! Reads are lock-free over a `DashMap`; writes are serialized per record
//! id so an update or cascade delete cannot race another writer on the same
//! record, while writes to different records proceed concurrently.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use engram_core::errors::{EngramResult, StoreError};
use engram_core::memory::{Category, MemoryRecord, RelationType, RelationshipEdge};
use engram_core::models::MetricSnapshot;
use engram_core::traits::MemoryStore;

use crate::graph::RelationshipGraph;
use crate::index;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: DashMap<String, MemoryRecord>,
    /// Per-record-id write locks. Entries are created on first write and
    /// kept for the life of the store.
    write_locks: DashMap<String, Arc<Mutex<()>>>,
    graph: RwLock<RelationshipGraph>,
    /// Embedding dimensionality, fixed by the first record created.
    /// 0 means not yet established.
    dimensions: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_lock(&self, id: &str) -> Arc<Mutex<()>> {
        self.write_locks
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    fn check_dimensions(&self, embedding: &[f32]) -> EngramResult<()> {
        if embedding.is_empty() {
            return Ok(());
        }
        let expected = self.dimensions.load(Ordering::Acquire);
        if expected == 0 {
            self.dimensions.store(embedding.len(), Ordering::Release);
            return Ok(());
        }
        if embedding.len() != expected {
            return Err(StoreError::DimensionMismatch {
                expected,
                actual: embedding.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Build a metrics snapshot of the current store state, timestamped now.
    /// The p95 latency comes from the caller's query instrumentation.
    pub fn metric_snapshot(&self, p95_query_latency_ms: f64) -> MetricSnapshot {
        MetricSnapshot {
            timestamp: Utc::now(),
            total_records: self.count(),
            category_counts: self.count_by_category().into_iter().collect(),
            p95_query_latency_ms,
        }
    }
}

impl MemoryStore for InMemoryStore {
    fn create(&self, record: MemoryRecord) -> EngramResult<()> {
        self.check_dimensions(&record.embedding)?;
        let lock = self.write_lock(&record.id);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        if self.records.contains_key(&record.id) {
            return Err(StoreError::DuplicateRecord { id: record.id }.into());
        }
        self.graph
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .add_node(&record.id);
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    fn get(&self, id: &str) -> EngramResult<Option<MemoryRecord>> {
        Ok(self.records.get(id).map(|r| r.clone()))
    }

    fn update(&self, record: MemoryRecord) -> EngramResult<()> {
        self.check_dimensions(&record.embedding)?;
        let lock = self.write_lock(&record.id);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        if !self.records.contains_key(&record.id) {
            return Err(StoreError::RecordNotFound { id: record.id }.into());
        }
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    fn delete(&self, id: &str) -> EngramResult<()> {
        let lock = self.write_lock(id);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        if self.records.remove(id).is_none() {
            return Err(StoreError::RecordNotFound { id: id.to_string() }.into());
        }
        // Cascade: dropping the node drops every incident edge.
        self.graph
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove_node(id);
        debug!(record_id = %id, "record deleted with edge cascade");
        Ok(())
    }

    fn search_vector(&self, embedding: &[f32], k: usize) -> EngramResult<Vec<(String, f64)>> {
        // Early exit on zero-norm queries.
        let query_norm_sq: f64 = embedding.iter().map(|x| (*x as f64) * (*x as f64)).sum();
        if query_norm_sq == 0.0 || k == 0 {
            return Ok(Vec::new());
        }

        let mut scored: Vec<(String, f64)> = Vec::new();
        for entry in self.records.iter() {
            let record = entry.value();
            // Skip dimension mismatches without scoring.
            if record.embedding.len() != embedding.len() {
                continue;
            }
            let sim = index::cosine_similarity(embedding, &record.embedding);
            if sim > 0.0 {
                scored.push((record.id.clone(), sim.min(1.0)));
            }
        }
        index::rank(&mut scored, k);
        Ok(scored)
    }

    fn add_relationship(&self, edge: &RelationshipEdge) -> EngramResult<()> {
        for endpoint in [&edge.source_id, &edge.target_id] {
            if !self.records.contains_key(endpoint) {
                return Err(StoreError::MissingEndpoint {
                    id: endpoint.clone(),
                }
                .into());
            }
        }
        self.graph
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .add_edge(edge.clone())
    }

    fn remove_relationship(&self, source_id: &str, target_id: &str) -> EngramResult<()> {
        self.graph
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove_edges_between(source_id, target_id);
        Ok(())
    }

    fn get_relationships(
        &self,
        record_id: &str,
        relation_type: Option<RelationType>,
    ) -> EngramResult<Vec<RelationshipEdge>> {
        let edges = self
            .graph
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .edges_of(record_id);
        Ok(match relation_type {
            Some(rt) => edges.into_iter().filter(|e| e.relation_type == rt).collect(),
            None => edges,
        })
    }

    fn count(&self) -> usize {
        self.records.len()
    }

    fn count_by_category(&self) -> Vec<(Category, usize)> {
        let mut counts: HashMap<Category, usize> = HashMap::new();
        for entry in self.records.iter() {
            *counts.entry(entry.value().category).or_default() += 1;
        }
        let mut counts: Vec<(Category, usize)> = counts.into_iter().collect();
        counts.sort_by_key(|(c, _)| c.as_str());
        counts
    }
}
