//! In-memory graph operations — the core data structure.

pub mod traversal;
pub mod undirected;

pub use undirected::{Graph, Nodes};
