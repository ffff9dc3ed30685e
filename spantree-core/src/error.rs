//! Error types for the spantree core library.
//!
//! Mutation failures are non-fatal: the rejected operation leaves the graph
//! untouched and the caller branches on the returned variant. Each variant
//! maps to a stable [`GraphErrorCode`] for logging and metrics surfaces.

use thiserror::Error;

use crate::queue::EmptyQueue;

/// Errors returned by graph mutations and the MST computation.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// A referenced label is not present in the graph.
    #[error("vertex `{label}` is not present in the graph")]
    UnknownVertex {
        /// The label that failed to resolve.
        label: String,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({origin}, {destination}) has non-finite weight")]
    NonFiniteWeight {
        /// The origin endpoint of the rejected edge.
        origin: String,
        /// The destination endpoint of the rejected edge.
        destination: String,
    },
    /// The MST start vertex cannot reach every vertex in the graph.
    ///
    /// Distinct from a successful empty tree: no partial tree is returned.
    #[error("graph is disconnected: reached {visited} of {vertex_count} vertices from `{start}`")]
    Disconnected {
        /// The start vertex the tree was grown from.
        start: String,
        /// How many vertices the traversal reached.
        visited: usize,
        /// How many vertices the graph holds.
        vertex_count: usize,
    },
    /// The priority queue was drained while the traversal loop still ran.
    ///
    /// Internal invariant violation; never expected to surface because the
    /// loop guards on emptiness before dequeuing.
    #[error("priority queue invariant violated: dequeue from an empty queue")]
    EmptyQueueAccess,
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::UnknownVertex { .. } => GraphErrorCode::UnknownVertex,
            Self::NonFiniteWeight { .. } => GraphErrorCode::NonFiniteWeight,
            Self::Disconnected { .. } => GraphErrorCode::DisconnectedGraph,
            Self::EmptyQueueAccess => GraphErrorCode::EmptyQueueAccess,
        }
    }
}

impl From<EmptyQueue> for GraphError {
    fn from(_: EmptyQueue) -> Self {
        Self::EmptyQueueAccess
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// A referenced label is not present in the graph.
    UnknownVertex,
    /// An edge carried a NaN or infinite weight.
    NonFiniteWeight,
    /// The MST start vertex cannot reach every vertex in the graph.
    DisconnectedGraph,
    /// The priority queue was drained while the traversal loop still ran.
    EmptyQueueAccess,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownVertex => "UNKNOWN_VERTEX",
            Self::NonFiniteWeight => "NON_FINITE_WEIGHT",
            Self::DisconnectedGraph => "DISCONNECTED_GRAPH",
            Self::EmptyQueueAccess => "EMPTY_QUEUE_ACCESS",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
