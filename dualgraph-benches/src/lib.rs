//! Benchmark support crate for dualgraph.
//!
//! Provides seeded random graphs and parameter types used by the Criterion
//! benchmarks that pit the matrix and list variants of each algorithm
//! family against each other.

pub mod error;
pub mod graphs;
pub mod params;
