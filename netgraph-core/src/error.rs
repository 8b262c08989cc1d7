//! Error types for netgraph-core.

use crate::types::VertexId;
use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors returned by graph construction, queries and mutations.
///
/// A failed operation never leaves the graph partially modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Malformed or incomplete input record.
    #[error("Invalid edge record {record}: {reason}")]
    Construction {
        /// 1-based position of the record in the input.
        record: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Edge position outside the current edge list.
    #[error("Edge index {index} out of range (graph has {len} edges)")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Edge count at the time of the call.
        len: usize,
    },

    /// Referenced vertex does not appear on any edge.
    #[error("Unknown vertex: {id}")]
    UnknownVertex {
        /// The missing vertex id.
        id: VertexId,
    },

    /// Algorithm called with a source vertex that is not in the graph.
    #[error("Invalid source vertex: {id}")]
    InvalidSource {
        /// The rejected source id.
        id: VertexId,
    },
}

impl GraphError {
    pub(crate) fn construction(record: usize, reason: impl Into<String>) -> Self {
        GraphError::Construction {
            record,
            reason: reason.into(),
        }
    }
}
