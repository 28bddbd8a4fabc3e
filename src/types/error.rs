//! Error types for the graphwalk library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur during graph traversal.
///
/// Both variants indicate malformed input, not a transient condition; a
/// traversal that returns an error produced no partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<N: NodeId> {
    /// The traversal root is not a key in the adjacency mapping.
    #[error("root {0:?} is not a node in the graph")]
    InvalidRoot(N),

    /// A node reached during traversal has no adjacency entry.
    #[error("node {0:?} has no adjacency entry")]
    UnknownNode(N),
}

/// Convenience result type for graphwalk operations.
pub type GraphResult<T, N> = Result<T, GraphError<N>>;
