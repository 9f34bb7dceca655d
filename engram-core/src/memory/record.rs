use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The enumerated category tags a memory record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Conversation,
    Decision,
    Insight,
    Procedure,
    Reference,
    Observation,
}

impl Category {
    /// Total number of categories.
    pub const COUNT: usize = 6;

    /// All variants for iteration.
    pub const ALL: [Category; 6] = [
        Self::Conversation,
        Self::Decision,
        Self::Insight,
        Self::Procedure,
        Self::Reference,
        Self::Observation,
    ];

    /// Stable snake_case name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conversation => "conversation",
            Self::Decision => "decision",
            Self::Insight => "insight",
            Self::Procedure => "procedure",
            Self::Reference => "reference",
            Self::Observation => "observation",
        }
    }

    /// Parse from the stable snake_case name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

/// Scalar metadata value attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

/// A single memory record. Owned exclusively by the store; mutated only via
/// explicit update operations, deleted only via explicit delete (which also
/// removes all dependent relationship edges).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// UUID v4 identifier, immutable for the life of the record.
    pub id: String,
    /// Raw text content.
    pub content: String,
    /// Embedding vector, computed once when the record is created and
    /// cached here.
    pub embedding: Vec<f32>,
    /// Category tag.
    pub category: Category,
    /// Creation timestamp. Used as the ranking tie-breaker.
    pub created_at: DateTime<Utc>,
    /// Free-form scalar metadata. Insertion order is irrelevant.
    #[serde(default)]
    pub metadata: HashMap<String, MetadataValue>,
}

impl MemoryRecord {
    /// Create a new record with a fresh UUID and the current timestamp.
    pub fn new(content: impl Into<String>, embedding: Vec<f32>, category: Category) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            embedding,
            category,
            created_at: Utc::now(),
            metadata: HashMap::new(),
        }
    }
}

/// Identity equality: two records are equal if they have the same ID.
/// A record's identity is its UUID, not its content.
impl PartialEq for MemoryRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
