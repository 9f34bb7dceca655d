//! Abstract collaborator contracts consumed and exposed by the engine.

mod embedding;
mod notifier;
mod store;

pub use embedding::EmbeddingProvider;
pub use notifier::Notifier;
pub use store::MemoryStore;
