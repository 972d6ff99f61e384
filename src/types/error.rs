//! Error types for the graphlet library.
//!
//! The graph operations themselves are total: mutating or querying with an
//! unknown vertex is a soft no-op, never an error. These variants cover the
//! CLI surface, where user-supplied names and edge specs can be malformed.

use thiserror::Error;

/// All errors that can occur in the graphlet library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An `--edge` argument that does not parse as `u:v`.
    #[error("Invalid edge spec `{0}` (expected `u:v`)")]
    InvalidEdgeSpec(String),

    /// Unrecognized graph kind name.
    #[error("Unknown graph kind: {0}")]
    UnknownKind(String),

    /// Unrecognized traversal algorithm name.
    #[error("Unknown traversal algorithm: {0}")]
    UnknownTraversal(String),
}

/// Convenience result type for graphlet operations.
pub type GraphResult<T> = Result<T, GraphError>;
