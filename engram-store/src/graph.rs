//! Relationship graph: a petgraph `StableGraph` keyed by record id.
//!
//! Removing a node drops every incident edge, which is how the store's
//! cascading-delete contract is enforced.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use engram_core::errors::{EngramResult, StoreError};
use engram_core::memory::RelationshipEdge;

/// Directed relationship graph with an id → node index map.
/// Not internally synchronized; the store wraps it in a lock.
#[derive(Debug, Default)]
pub struct RelationshipGraph {
    graph: StableGraph<String, RelationshipEdge>,
    nodes: HashMap<String, NodeIndex>,
}

impl RelationshipGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record id as a graph node. Idempotent.
    pub fn add_node(&mut self, record_id: &str) {
        if !self.nodes.contains_key(record_id) {
            let idx = self.graph.add_node(record_id.to_string());
            self.nodes.insert(record_id.to_string(), idx);
        }
    }

    /// Remove a record's node, cascading all incident edges.
    /// Returns whether the node existed.
    pub fn remove_node(&mut self, record_id: &str) -> bool {
        match self.nodes.remove(record_id) {
            Some(idx) => {
                self.graph.remove_node(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, record_id: &str) -> bool {
        self.nodes.contains_key(record_id)
    }

    /// Insert an edge. Both endpoints must already be nodes.
    pub fn add_edge(&mut self, edge: RelationshipEdge) -> EngramResult<()> {
        let source = *self.nodes.get(&edge.source_id).ok_or_else(|| {
            StoreError::MissingEndpoint {
                id: edge.source_id.clone(),
            }
        })?;
        let target = *self.nodes.get(&edge.target_id).ok_or_else(|| {
            StoreError::MissingEndpoint {
                id: edge.target_id.clone(),
            }
        })?;
        self.graph.add_edge(source, target, edge);
        Ok(())
    }

    /// Remove every edge from `source_id` to `target_id`.
    /// Returns the number of edges removed.
    pub fn remove_edges_between(&mut self, source_id: &str, target_id: &str) -> usize {
        let (Some(&source), Some(&target)) =
            (self.nodes.get(source_id), self.nodes.get(target_id))
        else {
            return 0;
        };
        let mut removed = 0;
        while let Some(edge_idx) = self.graph.find_edge(source, target) {
            self.graph.remove_edge(edge_idx);
            removed += 1;
        }
        removed
    }

    /// All edges incident to `record_id`, outgoing then incoming.
    pub fn edges_of(&self, record_id: &str) -> Vec<RelationshipEdge> {
        let Some(&idx) = self.nodes.get(record_id) else {
            return Vec::new();
        };
        let mut edges: Vec<RelationshipEdge> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| e.weight().clone())
            .collect();
        edges.extend(
            self.graph
                .edges_directed(idx, Direction::Incoming)
                .map(|e| e.weight().clone()),
        );
        edges
    }

    /// Total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
