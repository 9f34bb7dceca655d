//! Memory data model: records, categories, relationships, confidence bands.

mod confidence;
mod record;
mod relationships;

pub use confidence::ConfidenceBand;
pub use record::{Category, MemoryRecord, MetadataValue};
pub use relationships::{RelationType, RelationshipEdge};
