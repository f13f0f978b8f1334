//! Command-line interface orchestration for dualgraph.
//!
//! `show` prints a graph in both representations, `run` executes one
//! algorithm family on both and reports results with timings, and `simulate`
//! repeats a family over freshly generated random graphs.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, Family, GraphSource, NamedGraph, RunCommand,
    ShowCommand, SimulateCommand, run_cli,
};
pub use render::render_summary;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;
