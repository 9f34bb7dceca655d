use crate::errors::EngramResult;

/// Embedding generation provider. Consumed, not implemented, by the engine.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of fixed dimension.
    fn embed(&self, text: &str) -> EngramResult<Vec<f32>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name, used in error reports.
    fn name(&self) -> &str;

    /// Cheap liveness check. Callers may skip the embed call (and its
    /// retry) when the provider already reports itself down.
    fn is_available(&self) -> bool {
        true
    }
}
