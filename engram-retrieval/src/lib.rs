//! # engram-retrieval
//!
//! Hybrid retrieval engine. A query flows through a fixed pipeline:
//! embed → vector candidate search → one-hop relationship expansion →
//! weighted score fusion → dedup/filter/rank → confidence bands.
//!
//! Retrieval is all-or-nothing per call: any dependency failure aborts the
//! whole query so fused scores stay comparable across results.

pub mod engine;
pub mod expansion;
pub mod fusion;

pub use engine::RetrievalEngine;
