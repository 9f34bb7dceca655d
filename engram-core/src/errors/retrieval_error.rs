/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// Caller error (4xx-equivalent), not retried.
    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },

    /// Dependency failure, surfaced immediately. Retried once at the
    /// caller's discretion, never silently degraded.
    #[error("embedding provider '{provider}' unavailable: {reason}")]
    EmbeddingUnavailable { provider: String, reason: String },

    /// Dependency failure. Retrieval is all-or-nothing per call, so there is
    /// no graph-only fallback when the index is down.
    #[error("vector index unavailable: {reason}")]
    IndexUnavailable { reason: String },

    /// The query exceeded the configured timeout. Safe to retry: the
    /// operation is read-only and leaves no partial state.
    #[error("retrieval timed out after {elapsed_ms} ms (limit {limit_ms} ms)")]
    Timeout { elapsed_ms: u64, limit_ms: u64 },
}
