//! hopgraph — undirected graph with BFS shortest-path distance queries.
//!
//! Nodes are bare integer identifiers; an edge is an unordered pair mirrored
//! into both endpoints' neighbor sets. Distance between two nodes is the
//! shortest path length in edges, computed by breadth-first search, with
//! unreachable nodes reported as [`UNREACHABLE`].

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, Nodes};
pub use types::{Distance, GraphError, GraphResult, NodeId, UNREACHABLE};
