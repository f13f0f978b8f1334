//! Shared test utilities used across dualgraph crates.
//!
//! Fixtures and oracles deal in plain `(vertex_count, edges)` data so any
//! crate can feed them to its own graph constructor.

pub mod fixtures;
pub mod oracle;
pub mod profile;
pub mod tracing;

/// An undirected edge as `(left, right, weight)`.
pub type EdgeTriple = (usize, usize, i64);
