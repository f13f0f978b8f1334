//! Unit tests for the CLI commands and the text reporter.

use std::path::Path;

use clap::Parser;
use dualgraph_core::{EngineError, PathError, SimulationError};
use dualgraph_test_support::{
    fixtures::{negative_triangle, path_with_isolated_vertex, triangle, two_components},
    tracing::capture,
};
use rstest::rstest;

use super::commands::{derive_graph_name, run_command};
use super::test_helpers::{
    mask_timings, parse, render, run_cli_expecting_error, temp_dir, write_fixture, write_text,
};
use super::{Cli, CliError, Command, ExecutionSummary, GraphSource, ShowCommand, run_cli};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[rstest]
#[case::override_name("/tmp/graph.txt", Some("override"), "override")]
#[case::stem_with_extension("/tmp/graph.txt", None, "graph")]
#[case::stem_without_extension("/tmp/edges", None, "edges")]
#[case::missing_stem("", None, "graph")]
fn derive_graph_name_selects_expected_name(
    #[case] raw_path: &str,
    #[case] override_name: Option<&'static str>,
    #[case] expected: &str,
) {
    assert_eq!(derive_graph_name(Path::new(raw_path), override_name), expected);
}

#[rstest]
#[case::file_and_vertices(&["show", "--file", "g.txt", "--vertices", "3", "--density", "50"])]
#[case::vertices_without_density(&["show", "--vertices", "3"])]
#[case::unknown_family(&["run", "floyd", "--vertices", "3", "--density", "50"])]
#[case::simulate_without_density(&["simulate", "prim", "--vertices", "3"])]
fn rejects_inconsistent_arguments(#[case] args: &[&str]) {
    let argv = std::iter::once("dualgraph").chain(args.iter().copied());
    assert!(Cli::try_parse_from(argv).is_err());
}

#[test]
fn parses_kebab_case_family() {
    let cli = parse(&["run", "bellman-ford", "--source", "2", "--file", "g.txt"]);
    let Command::Run(run) = cli.command else {
        panic!("expected the run command");
    };
    assert_eq!(run.family, super::Family::BellmanFord);
    assert_eq!(run.source, 2);
    assert!(!run.quiet);
}

#[test]
fn show_prints_both_representations() -> TestResult {
    let dir = temp_dir();
    let path = write_fixture(&dir, "triangle.txt", &triangle());
    let cli = parse(&["show", "--file", path.to_str().ok_or("utf-8 path")?]);
    let output = render(&run_cli(cli)?);
    assert_eq!(
        output,
        "graph triangle: 3 vertices, 3 edges\n\
         adjacency matrix:\n0 4 5\n4 0 2\n5 2 0\n\
         adjacency list:\n0: (1, 4) (2, 5)\n1: (0, 4) (2, 2)\n2: (1, 2) (0, 5)\n"
    );
    Ok(())
}

#[test]
fn run_prim_renders_tree_per_representation() -> TestResult {
    let dir = temp_dir();
    let path = write_fixture(&dir, "triangle.txt", &triangle());
    let cli = parse(&["run", "prim", "--file", path.to_str().ok_or("utf-8 path")?]);
    let output = mask_timings(&render(&run_cli(cli)?));
    assert_eq!(
        output,
        "graph triangle: 3 vertices, 3 edges\n\
         prim (matrix):\n\
         total MST weight: 6\n\
         MST matrix:\n0 4 0\n4 0 2\n0 2 0\n\
         prim (matrix) time: <t> ms\n\
         prim (list):\n\
         total MST weight: 6\n\
         MST edges:\n0 - 1\n1 - 2\n\
         prim (list) time: <t> ms"
    );
    Ok(())
}

#[test]
fn run_dijkstra_marks_unreachable_vertices() -> TestResult {
    let dir = temp_dir();
    let path = write_fixture(&dir, "path.txt", &path_with_isolated_vertex());
    let cli = parse(&["run", "dijkstra", "--file", path.to_str().ok_or("utf-8 path")?]);
    let output = render(&run_cli(cli)?);
    for expected in ["to vertex 0: 0", "to vertex 3: 10", "to vertex 4: inf"] {
        assert_eq!(output.matches(expected).count(), 2, "missing `{expected}`");
    }
    Ok(())
}

#[test]
fn run_quiet_keeps_summary_lines() -> TestResult {
    let cli = parse(&[
        "run", "dijkstra", "--quiet", "--vertices", "8", "--density", "100", "--seed", "4",
    ]);
    let output = mask_timings(&render(&run_cli(cli)?));
    assert_eq!(
        output,
        "graph random: 8 vertices, 28 edges\n\
         reachable vertices: 8 of 8\n\
         dijkstra (matrix) time: <t> ms\n\
         reachable vertices: 8 of 8\n\
         dijkstra (list) time: <t> ms"
    );
    Ok(())
}

#[test]
fn run_bellman_ford_reports_negative_cycle() -> TestResult {
    let dir = temp_dir();
    let path = write_fixture(&dir, "neg.txt", &negative_triangle());
    let cli = parse(&["run", "bellman-ford", "--file", path.to_str().ok_or("utf-8 path")?]);
    let output = render(&run_cli(cli)?);
    assert_eq!(output.matches("negative-weight cycle detected").count(), 2);
    assert!(!output.contains("to vertex"));
    Ok(())
}

#[test]
fn run_dijkstra_rejects_negative_weights() -> TestResult {
    let dir = temp_dir();
    let path = write_fixture(&dir, "neg.txt", &negative_triangle());
    let cli = parse(&["run", "dijkstra", "--file", path.to_str().ok_or("utf-8 path")?]);
    let err = run_cli_expecting_error(cli, "negative weights must be rejected");
    assert!(matches!(
        err,
        CliError::Engine(EngineError::Path(PathError::NegativeWeight { .. }))
    ));
    assert_eq!(err.code(), "PATH_NEGATIVE_WEIGHT");
    Ok(())
}

#[test]
fn run_kruskal_rejects_disconnected_graph() -> TestResult {
    let dir = temp_dir();
    let path = write_fixture(&dir, "split.txt", &two_components());
    let cli = parse(&["run", "kruskal", "--file", path.to_str().ok_or("utf-8 path")?]);
    let err = run_cli_expecting_error(cli, "disconnected graph has no MST");
    assert_eq!(err.code(), "MST_DISCONNECTED");
    Ok(())
}

#[rstest]
#[case::missing_file(None, "EDGE_LIST_IO")]
#[case::malformed(Some("3 2\n0 1 x\n"), "EDGE_LIST_INVALID_TOKEN")]
#[case::truncated(Some("3 2\n0 1 4\n"), "EDGE_LIST_TRUNCATED_EDGES")]
#[case::oversized(Some("18446744073709551615 0\n"), "EDGE_LIST_INVALID_HEADER")]
fn load_failures_carry_path_and_code(#[case] contents: Option<&str>, #[case] code: &str) {
    let dir = temp_dir();
    let path = match contents {
        Some(text) => write_text(&dir, "input.txt", text),
        None => dir.path().join("absent.txt"),
    };
    let cli = Cli {
        command: Command::Show(ShowCommand {
            graph: GraphSource {
                file: Some(path.clone()),
                ..GraphSource::default()
            },
        }),
    };
    let err = run_cli_expecting_error(cli, "loading must fail");
    assert!(matches!(&err, CliError::EdgeList { path: p, .. } if *p == path));
    assert_eq!(err.code(), code);
}

#[test]
fn requires_a_graph_source() {
    let cli = Cli {
        command: Command::Show(ShowCommand {
            graph: GraphSource::default(),
        }),
    };
    let err = run_cli_expecting_error(cli, "no graph was given");
    assert!(matches!(err, CliError::MissingGraphSource));
}

#[test]
fn rejects_unallocatable_generated_graph() {
    let cli = parse(&["show", "--vertices", "18446744073709551615", "--density", "0"]);
    let err = run_cli_expecting_error(cli, "matrix cannot be allocated");
    assert_eq!(err.code(), "GRAPH_TOO_MANY_VERTICES");
}

#[test]
fn rejects_invalid_generator_density() {
    let cli = parse(&["show", "--vertices", "4", "--density", "120"]);
    let err = run_cli_expecting_error(cli, "density is out of range");
    assert_eq!(err.code(), "GRAPH_INVALID_DENSITY");
}

#[test]
fn simulate_reports_each_iteration_and_means() -> TestResult {
    let cli = parse(&[
        "simulate", "kruskal", "--vertices", "6", "--density", "100", "--repetitions", "3",
        "--seed", "8",
    ]);
    let summary = run_cli(cli)?;
    let ExecutionSummary::Simulate { reports, .. } = &summary else {
        panic!("expected simulation output");
    };
    assert_eq!(reports.len(), 3);

    let output = mask_timings(&render(&summary));
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "iteration 1 (15 edges):");
    assert_eq!(output.matches("total MST weight: ").count(), 6);
    assert!(output.contains("completed 3 of 3 iterations"));
    assert!(output.ends_with(
        "mean kruskal (matrix) time: <t> ms\nmean kruskal (list) time: <t> ms"
    ));
    Ok(())
}

#[test]
fn simulate_continues_past_failed_iterations() -> TestResult {
    let cli = parse(&[
        "simulate", "prim", "--vertices", "4", "--density", "0", "--repetitions", "2",
    ]);
    let output = render(&run_cli(cli)?);
    assert_eq!(output.matches("failed: graph is disconnected").count(), 2);
    assert!(output.contains("completed 0 of 2 iterations"));
    assert!(!output.contains("mean "));
    Ok(())
}

#[test]
fn simulate_rejects_zero_repetitions() {
    let cli = parse(&[
        "simulate", "prim", "--vertices", "4", "--density", "50", "--repetitions", "0",
    ]);
    let err = run_cli_expecting_error(cli, "zero repetitions must fail");
    assert!(matches!(
        err,
        CliError::Simulation(SimulationError::NoRepetitions)
    ));
}

#[test]
fn run_command_emits_tracing_fields() -> TestResult {
    let Command::Run(command) = parse(&[
        "run", "dijkstra", "--source", "1", "--vertices", "5", "--density", "100", "--seed", "2",
    ])
    .command
    else {
        panic!("expected the run command");
    };
    let (result, layer) = capture(|| run_command(command));
    result?;

    let execute = layer.span_named("cli.execute").ok_or("cli.execute span")?;
    assert_eq!(execute.field("family"), Some("dijkstra"));
    assert_eq!(execute.field("source"), Some("1"));
    let load = layer.span_named("cli.load_graph").ok_or("cli.load_graph span")?;
    assert_eq!(load.field("origin"), Some("generator"));
    assert!(layer.span_named("engine.run_family").is_some());
    assert_eq!(layer.events_with_message("run completed").len(), 1);
    Ok(())
}
