//! Core graph structure — an adjacency mapping with ordered neighbor lists.

use std::collections::HashMap;

use crate::types::{GraphError, GraphResult, NodeId};

use super::traversal;

/// A directed graph stored as an adjacency mapping.
///
/// Each node maps to an ordered list of outgoing neighbors; traversals visit
/// neighbors in list order. Neighbor lists may mention nodes without an entry
/// of their own — [`validate`](Self::validate) checks for that eagerly, and
/// traversal reports it as [`GraphError::UnknownNode`] when such a node is
/// reached.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N: NodeId> {
    /// node -> ordered outgoing neighbors.
    adjacency: HashMap<N, Vec<N>>,
}

impl<N: NodeId> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> AdjacencyGraph<N> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Insert a node with its full neighbor list, replacing any previous list.
    ///
    /// Returns the previous neighbor list if the node was already present.
    pub fn insert(&mut self, node: N, neighbors: Vec<N>) -> Option<Vec<N>> {
        self.adjacency.insert(node, neighbors)
    }

    /// Whether the node has an adjacency entry.
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// The ordered neighbor list of a node, or `None` if it has no entry.
    pub fn neighbors(&self, node: &N) -> Option<&[N]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges (sum of neighbor-list lengths).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate over all node identifiers (unspecified order).
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Check that every neighbor reference resolves to an adjacency entry.
    ///
    /// Returns [`GraphError::UnknownNode`] for the first dangling reference
    /// found. A graph that validates can be traversed from any of its nodes
    /// without hitting `UnknownNode`.
    pub fn validate(&self) -> GraphResult<(), N> {
        for neighbors in self.adjacency.values() {
            for neighbor in neighbors {
                if !self.adjacency.contains_key(neighbor) {
                    return Err(GraphError::UnknownNode(neighbor.clone()));
                }
            }
        }
        Ok(())
    }

    /// Breadth-first traversal from `root`. See [`traversal::bfs`].
    pub fn bfs(&self, root: &N) -> GraphResult<Vec<N>, N> {
        traversal::bfs(self, root)
    }

    /// Depth-first traversal from `root`. See [`traversal::dfs`].
    pub fn dfs(&self, root: &N) -> GraphResult<Vec<N>, N> {
        traversal::dfs(self, root)
    }
}

impl<N: NodeId> FromIterator<(N, Vec<N>)> for AdjacencyGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}

impl<N: NodeId, const K: usize> From<[(N, Vec<N>); K]> for AdjacencyGraph<N> {
    fn from(entries: [(N, Vec<N>); K]) -> Self {
        entries.into_iter().collect()
    }
}
