//! Shared identifier and distance types.

pub mod error;

pub use error::{GraphError, GraphResult};

/// Integer identifier naming a node. Identity and value coincide; ids are
/// sparse and never assumed to form a dense range.
pub type NodeId = i64;

/// Shortest-path length, counted in edges.
pub type Distance = i64;

/// Distance reported for a node with no path to the start node.
pub const UNREACHABLE: Distance = -1;
