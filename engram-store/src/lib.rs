//! # engram-store
//!
//! In-memory reference implementation of the [`engram_core::traits::MemoryStore`]
//! contract: a concurrent record table, brute-force cosine candidate search
//! over cached embeddings, and a typed relationship graph with cascading
//! edge deletion.
//!
//! Physical persistence is out of scope; this crate exists so the retrieval
//! and health engines have a complete store to run against.

pub mod graph;
pub mod index;
mod store;

pub use graph::RelationshipGraph;
pub use store::InMemoryStore;
