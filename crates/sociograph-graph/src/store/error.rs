//! Error types for graph storage and query operations.

use sociograph_core::NodeId;
use thiserror::Error;

/// Errors that can occur in graph storage and query operations.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Construction requested more nodes than the configured capacity.
    #[error("capacity exceeded: {requested} users requested, capacity is {capacity}")]
    CapacityExceeded {
        /// How many nodes construction asked for.
        requested: usize,
        /// The configured upper bound.
        capacity: usize,
    },

    /// Edge insertion referenced a node index outside the graph.
    #[error("invalid edge endpoint: {from} -> {to} (graph has {node_count} nodes)")]
    InvalidEdgeEndpoint {
        /// The edge's origin index as supplied by the caller.
        from: NodeId,
        /// The edge's destination index as supplied by the caller.
        to: NodeId,
        /// How many nodes the graph actually holds.
        node_count: usize,
    },

    /// A query referenced a node that is not in the graph.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// A user's display name exceeds the allowed length.
    #[error("user name exceeds {max} bytes: {name:?}")]
    NameTooLong {
        /// The offending name.
        name: String,
        /// The maximum allowed length in bytes.
        max: usize,
    },
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
