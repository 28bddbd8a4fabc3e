//! Graphwalk — breadth-first and depth-first traversal over adjacency-list graphs.
//!
//! A directed graph is an [`AdjacencyGraph`]: a mapping from node identifier to
//! an ordered list of neighbor identifiers. Traversals borrow the graph
//! immutably and return the discovery order; all bookkeeping (visited set,
//! queue or recursion stack) is local to each call.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{bfs, dfs, AdjacencyGraph, GraphBuilder};
pub use types::{GraphError, GraphResult, NodeId};
