/// Store-layer errors for record, index, and relationship operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found: {id}")]
    RecordNotFound { id: String },

    #[error("record already exists: {id}")]
    DuplicateRecord { id: String },

    /// An edge endpoint does not reference an existing record.
    #[error("edge endpoint does not reference an existing record: {id}")]
    MissingEndpoint { id: String },

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
