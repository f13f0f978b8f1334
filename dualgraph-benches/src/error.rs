//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use dualgraph_core::{GraphError, MstError, PathError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Generator parameters were rejected.
    #[error("graph generation failed: {0}")]
    Graph(#[from] GraphError),
    /// A spanning-tree variant rejected the benchmark graph.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A shortest-path variant rejected the benchmark graph.
    #[error("shortest-path computation failed: {0}")]
    Path(#[from] PathError),
}
