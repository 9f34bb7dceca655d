use crate::errors::EngramResult;
use crate::memory::{Category, MemoryRecord, RelationType, RelationshipEdge};

/// Record store contract: CRUD with cascading edge deletion, vector
/// candidate search, relationship traversal, and the aggregation used by
/// the metrics glue.
///
/// Reads are safe to execute concurrently with no query-time mutation;
/// implementations must serialize writes per record id.
pub trait MemoryStore: Send + Sync {
    // --- CRUD ---
    fn create(&self, record: MemoryRecord) -> EngramResult<()>;
    fn get(&self, id: &str) -> EngramResult<Option<MemoryRecord>>;
    fn update(&self, record: MemoryRecord) -> EngramResult<()>;
    /// Delete a record and, as part of the same contract, remove every
    /// relationship edge referencing it.
    fn delete(&self, id: &str) -> EngramResult<()>;

    // --- Vector search ---
    /// Top-`k` records by cosine similarity to `embedding`, ranked
    /// descending. Scores are clamped to [0, 1].
    fn search_vector(&self, embedding: &[f32], k: usize) -> EngramResult<Vec<(String, f64)>>;

    // --- Relationships ---
    /// Add an edge. Both endpoints must reference existing records.
    fn add_relationship(&self, edge: &RelationshipEdge) -> EngramResult<()>;
    fn remove_relationship(&self, source_id: &str, target_id: &str) -> EngramResult<()>;
    /// All edges incident to `record_id` (both directions), optionally
    /// filtered by relation type.
    fn get_relationships(
        &self,
        record_id: &str,
        relation_type: Option<RelationType>,
    ) -> EngramResult<Vec<RelationshipEdge>>;

    // --- Aggregation ---
    fn count(&self) -> usize;
    fn count_by_category(&self) -> Vec<(Category, usize)>;
}
