//! Error types for the edge-list provider.
//!
//! Every variant maps to a stable [`EdgeListErrorCode`] so the CLI can log a
//! machine-readable code alongside the message.

use dualgraph_core::{GraphError, define_error_codes};
use thiserror::Error;

/// Errors raised while loading an edge list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdgeListError {
    /// The input could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The input ended before both header numbers were read.
    #[error("input ends before the `vertex_count edge_count` header")]
    MissingHeader,
    /// The header's vertex count does not describe an allocatable graph.
    #[error("header declares an unusable graph: {source}")]
    InvalidHeader {
        /// Rejection raised while allocating the graph.
        source: GraphError,
    },
    /// A token did not parse as the number expected at its position.
    #[error("line {line}: expected {expected} but found `{token}`")]
    InvalidToken {
        /// One-based line the token was found on.
        line: usize,
        /// The offending token as written.
        token: String,
        /// Description of the expected value.
        expected: &'static str,
    },
    /// The input ended before the declared number of edges.
    #[error("header declares {declared} edges but only {found} are complete")]
    TruncatedEdges {
        /// Edge count from the header.
        declared: usize,
        /// Number of complete `u v w` triples read.
        found: usize,
    },
    /// An edge was rejected by the graph.
    #[error("edge {edge} is invalid: {source}")]
    Graph {
        /// Zero-based index of the edge in the input.
        edge: usize,
        /// Rejection raised by the graph.
        source: GraphError,
    },
}

define_error_codes! {
    /// Machine-readable error codes for [`EdgeListError`].
    enum EdgeListErrorCode for EdgeListError {
        /// The input could not be read.
        Io => Io { .. } => "EDGE_LIST_IO",
        /// The header was absent.
        MissingHeader => MissingHeader => "EDGE_LIST_MISSING_HEADER",
        /// The header's vertex count was unusable.
        InvalidHeader => InvalidHeader { .. } => "EDGE_LIST_INVALID_HEADER",
        /// A token did not parse as the expected number.
        InvalidToken => InvalidToken { .. } => "EDGE_LIST_INVALID_TOKEN",
        /// Fewer edges than declared.
        TruncatedEdges => TruncatedEdges { .. } => "EDGE_LIST_TRUNCATED_EDGES",
        /// An edge was rejected by the graph.
        InvalidEdge => Graph { .. } => "EDGE_LIST_INVALID_EDGE",
    }
}
