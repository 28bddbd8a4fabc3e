//! Shared types: node identifier bound and error taxonomy.

pub mod error;

pub use error::{GraphError, GraphResult};

use std::fmt::Debug;
use std::hash::Hash;

/// Bound on node identifiers.
///
/// Anything hashable, comparable, cloneable, and debug-printable qualifies —
/// string keys and integer keys alike. Blanket-implemented, never implemented
/// by hand.
pub trait NodeId: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> NodeId for T {}
