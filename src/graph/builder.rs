//! Fluent API for building AdjacencyGraph instances.

use std::collections::HashMap;

use crate::types::NodeId;

use super::AdjacencyGraph;

/// Fluent builder for constructing an [`AdjacencyGraph`].
///
/// `edge` registers both endpoints, so built graphs never contain dangling
/// neighbor references — [`AdjacencyGraph::validate`] always passes on them.
pub struct GraphBuilder<N: NodeId> {
    adjacency: HashMap<N, Vec<N>>,
}

impl<N: NodeId> GraphBuilder<N> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Register a node with no outgoing edges (no-op if already present).
    pub fn node(&mut self, id: N) -> &mut Self {
        self.adjacency.entry(id).or_default();
        self
    }

    /// Add a directed edge, registering both endpoints as needed.
    ///
    /// Edges are appended in call order, which fixes the neighbor order seen
    /// by traversals.
    pub fn edge(&mut self, from: N, to: N) -> &mut Self {
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency.entry(from).or_default().push(to);
        self
    }

    /// Build the final graph.
    pub fn build(self) -> AdjacencyGraph<N> {
        self.adjacency.into_iter().collect()
    }
}

impl<N: NodeId> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
