//! Small helpers shared across CLI tests.

use std::{fs, path::PathBuf};

use clap::Parser;
use dualgraph_test_support::fixtures::GraphFixture;
use tempfile::TempDir;

use super::{Cli, CliError, ExecutionSummary, render_summary, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_fixture(dir: &TempDir, name: &str, fixture: &GraphFixture) -> PathBuf {
    write_text(dir, name, &fixture.to_edge_list())
}

pub(super) fn write_text(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write input file");
    path
}

pub(super) fn parse(args: &[&str]) -> Cli {
    match Cli::try_parse_from(std::iter::once("dualgraph").chain(args.iter().copied())) {
        Ok(cli) => cli,
        Err(err) => panic!("arguments must parse: {err}"),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn render(summary: &ExecutionSummary) -> String {
    let mut buffer = Vec::new();
    render_summary(summary, &mut buffer).expect("rendering to memory succeeds");
    String::from_utf8(buffer).expect("output is UTF-8")
}

/// Replaces every timing value so rendered output can be compared exactly.
pub(super) fn mask_timings(output: &str) -> String {
    output
        .lines()
        .map(|line| match line.rsplit_once(" time: ") {
            Some((label, _)) => format!("{label} time: <t> ms"),
            None => line.to_owned(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
