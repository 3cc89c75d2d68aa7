//! Error types for the hopgraph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the hopgraph library.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// Node not found by ID.
    #[error("Node ID {0} not found")]
    NodeNotFound(NodeId),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
