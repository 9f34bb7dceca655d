//! [`RetrievalEngine`]: orchestrates the full hybrid pipeline.
//!
//! query → embed → vector candidates → one-hop expansion → fusion →
//! dedup/filter → rank → confidence bands → truncate.

use std::cmp::Ordering;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use engram_core::config::RetrievalConfig;
use engram_core::constants::{CANDIDATE_FLOOR, CANDIDATE_MULTIPLIER};
use engram_core::errors::{EngramResult, RetrievalError};
use engram_core::memory::{Category, ConfidenceBand};
use engram_core::models::RetrievalResult;
use engram_core::traits::{EmbeddingProvider, MemoryStore};

use crate::expansion;
use crate::fusion;

/// The hybrid retrieval engine. Holds borrowed collaborators; queries are
/// read-only and safe to run concurrently.
pub struct RetrievalEngine<'a> {
    embedder: &'a dyn EmbeddingProvider,
    store: &'a dyn MemoryStore,
    config: RetrievalConfig,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        embedder: &'a dyn EmbeddingProvider,
        store: &'a dyn MemoryStore,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            embedder,
            store,
            config,
        }
    }

    /// Run a semantic query, returning at most `limit` ranked results.
    ///
    /// Any dependency failure aborts the whole call; a query that matches
    /// nothing returns an empty list, not an error.
    pub fn search(
        &self,
        query_text: &str,
        limit: usize,
        category_filter: Option<Category>,
    ) -> EngramResult<Vec<RetrievalResult>> {
        let started = Instant::now();

        if query_text.trim().is_empty() {
            return Err(RetrievalError::InvalidQuery {
                reason: "query text is empty".to_string(),
            }
            .into());
        }

        // Step 1: Query embedding, with exactly one local retry.
        let query_embedding = self.embed_with_retry(query_text)?;
        self.check_deadline(started)?;

        // Step 2: Over-fetch vector candidates so fusion has material.
        let k = (limit * CANDIDATE_MULTIPLIER).max(CANDIDATE_FLOOR);
        let candidates = self
            .store
            .search_vector(&query_embedding, k)
            .map_err(|e| RetrievalError::IndexUnavailable {
                reason: e.to_string(),
            })?;

        if candidates.is_empty() {
            debug!(query = %query_text, "no vector candidates");
            return Ok(Vec::new());
        }
        debug!(candidates = candidates.len(), k, "vector search complete");
        self.check_deadline(started)?;

        // Step 3: One-hop expansion over the relationship graph.
        let candidate_ids: Vec<String> = candidates.iter().map(|(id, _)| id.clone()).collect();
        let boosts = expansion::graph_boosts(self.store, &candidate_ids, &self.config)?;

        // Step 4: Fusion (dedup by id, keep max).
        let fused = fusion::fuse(&candidates, &boosts, &self.config);
        self.check_deadline(started)?;

        // Step 5: Category filter + ranking with recency tie-break.
        let mut rows: Vec<(fusion::FusedCandidate, DateTime<Utc>)> =
            Vec::with_capacity(fused.len());
        for candidate in fused {
            // A record can disappear between stages; skip it rather than
            // failing the whole call.
            let Some(record) = self.store.get(&candidate.record_id)? else {
                continue;
            };
            if let Some(filter) = category_filter {
                if record.category != filter {
                    continue;
                }
            }
            rows.push((candidate, record.created_at));
        }
        rows.sort_by(|a, b| {
            b.0.fused_score
                .partial_cmp(&a.0.fused_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.1.cmp(&a.1))
        });
        rows.truncate(limit);

        let results: Vec<RetrievalResult> = rows
            .into_iter()
            .map(|(c, _)| RetrievalResult {
                confidence_band: ConfidenceBand::from_score(c.fused_score),
                record_id: c.record_id,
                vector_score: c.vector_score,
                graph_boost: c.graph_boost,
                fused_score: c.fused_score,
            })
            .collect();

        info!(
            results = results.len(),
            limit,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "retrieval complete"
        );
        Ok(results)
    }

    /// Embed the query. The provider is retried once on failure, then the
    /// failure is surfaced as `EmbeddingUnavailable`. A provider that
    /// reports itself down is not called at all.
    fn embed_with_retry(&self, query_text: &str) -> EngramResult<Vec<f32>> {
        if !self.embedder.is_available() {
            return Err(RetrievalError::EmbeddingUnavailable {
                provider: self.embedder.name().to_string(),
                reason: "provider reports unavailable".to_string(),
            }
            .into());
        }
        match self.embedder.embed(query_text) {
            Ok(embedding) => Ok(embedding),
            Err(first) => {
                debug!(error = %first, "embedding failed, retrying once");
                self.embedder.embed(query_text).map_err(|_| {
                    RetrievalError::EmbeddingUnavailable {
                        provider: self.embedder.name().to_string(),
                        reason: first.to_string(),
                    }
                    .into()
                })
            }
        }
    }

    fn check_deadline(&self, started: Instant) -> EngramResult<()> {
        if self.config.timeout_ms == 0 {
            return Ok(());
        }
        let elapsed_ms = started.elapsed().as_millis() as u64;
        if elapsed_ms > self.config.timeout_ms {
            return Err(RetrievalError::Timeout {
                elapsed_ms,
                limit_ms: self.config.timeout_ms,
            }
            .into());
        }
        Ok(())
    }
}
