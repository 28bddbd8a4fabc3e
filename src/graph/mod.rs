//! Graph representation and traversal — the core of the crate.

pub mod adjacency;
pub mod builder;
pub mod traversal;

pub use adjacency::AdjacencyGraph;
pub use builder::GraphBuilder;
pub use traversal::{bfs, dfs};
