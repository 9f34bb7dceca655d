use serde::{Deserialize, Serialize};

/// The 6 typed relationships between memory records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    Precedes,
    Follows,
    RelatedTo,
    Supports,
    Contradicts,
    DerivedFrom,
}

impl RelationType {
    /// Total number of relation types.
    pub const COUNT: usize = 6;

    /// All variants for iteration.
    pub const ALL: [RelationType; 6] = [
        Self::Precedes,
        Self::Follows,
        Self::RelatedTo,
        Self::Supports,
        Self::Contradicts,
        Self::DerivedFrom,
    ];
}

/// A typed directed edge between two memory records.
///
/// Invariant: both endpoints must reference existing records at insertion
/// time. Edges are removed by cascade when either endpoint is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipEdge {
    pub source_id: String,
    pub target_id: String,
    pub relation_type: RelationType,
    /// Optional strength of the relationship, 0.0–1.0. Unset edges fall
    /// back to the configured default weight during retrieval expansion.
    pub weight: Option<f64>,
}

impl RelationshipEdge {
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        relation_type: RelationType,
        weight: Option<f64>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            relation_type,
            weight,
        }
    }

    /// The endpoint opposite to `id`, or `None` if `id` is not an endpoint.
    pub fn other_endpoint(&self, id: &str) -> Option<&str> {
        if self.source_id == id {
            Some(&self.target_id)
        } else if self.target_id == id {
            Some(&self.source_id)
        } else {
            None
        }
    }
}
