//! Text rendering of command results.

use std::{
    io::{self, Write},
    time::Duration,
};

use dualgraph_core::{
    AlgorithmFamily, Comparison, Headline, IterationReport, Outcome, Representation, RunReport,
    RunSummary, SpanningTree, WeightedGraph,
};

use super::commands::{ExecutionSummary, NamedGraph};

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use dualgraph_cli::cli::{ExecutionSummary, NamedGraph, render_summary};
/// # use dualgraph_core::WeightedGraph;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Show(NamedGraph {
///     name: "pair".into(),
///     graph: WeightedGraph::from_edges(2, [(0, 1, 3)])?,
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "graph pair: 2 vertices, 1 edges\nadjacency matrix:\n0 3\n3 0\nadjacency list:\n0: (1, 3)\n1: (0, 3)\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Show(named) => {
            render_header(named, &mut writer)?;
            render_graph(&named.graph, &mut writer)
        }
        ExecutionSummary::Run {
            graph,
            comparison,
            quiet,
        } => {
            render_header(graph, &mut writer)?;
            render_comparison(comparison, &graph.graph, *quiet, &mut writer)
        }
        ExecutionSummary::Simulate { family, reports } => {
            render_simulation(*family, reports, &mut writer)
        }
    }
}

fn render_header(named: &NamedGraph, writer: &mut impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "graph {}: {} vertices, {} edges",
        named.name,
        named.graph.vertex_count(),
        named.graph.edge_count()
    )
}

fn render_graph(graph: &WeightedGraph, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "adjacency matrix:")?;
    render_matrix(graph, writer)?;
    writeln!(writer, "adjacency list:")?;
    for (vertex, neighbours) in graph.adjacency().iter() {
        write!(writer, "{vertex}:")?;
        for neighbour in neighbours {
            write!(writer, " ({}, {})", neighbour.vertex, neighbour.weight)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn render_matrix(graph: &WeightedGraph, writer: &mut impl Write) -> io::Result<()> {
    for row in graph.matrix().rows() {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        writeln!(writer, "{}", cells.join(" "))?;
    }
    Ok(())
}

fn render_comparison(
    comparison: &Comparison,
    graph: &WeightedGraph,
    quiet: bool,
    writer: &mut impl Write,
) -> io::Result<()> {
    for report in comparison.reports() {
        if quiet {
            render_quiet(comparison.family(), &report.summary(), writer)?;
        } else {
            render_report(comparison.family(), report, graph, writer)?;
        }
    }
    Ok(())
}

fn render_report(
    family: AlgorithmFamily,
    report: &RunReport,
    graph: &WeightedGraph,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer, "{family} ({}):", report.representation())?;
    match report.outcome() {
        Outcome::SpanningTree(tree) => {
            writeln!(writer, "total MST weight: {}", tree.total_weight())?;
            render_tree(tree, report.representation(), graph.vertex_count(), writer)?;
        }
        Outcome::ShortestPaths(paths) => {
            writeln!(writer, "distances from vertex {}:", paths.source())?;
            for (vertex, distance) in paths.distances().iter().enumerate() {
                writeln!(writer, "to vertex {vertex}: {distance}")?;
            }
        }
        Outcome::NegativeCycle => writeln!(writer, "negative-weight cycle detected")?,
    }
    render_timing(family, report.representation(), report.elapsed(), writer)
}

/// The matrix variant prints the tree as a matrix, the list variant as edges.
fn render_tree(
    tree: &SpanningTree,
    representation: Representation,
    vertex_count: usize,
    writer: &mut impl Write,
) -> io::Result<()> {
    match representation {
        Representation::Matrix => {
            let tree_graph = tree.to_graph(vertex_count).map_err(io::Error::other)?;
            writeln!(writer, "MST matrix:")?;
            render_matrix(&tree_graph, writer)
        }
        Representation::List => {
            writeln!(writer, "MST edges:")?;
            for edge in tree.edges() {
                writeln!(writer, "{} - {}", edge.source(), edge.target())?;
            }
            Ok(())
        }
    }
}

fn render_quiet(
    family: AlgorithmFamily,
    summary: &RunSummary,
    writer: &mut impl Write,
) -> io::Result<()> {
    match summary.headline() {
        Headline::TotalWeight(weight) => writeln!(writer, "total MST weight: {weight}")?,
        Headline::Reachable {
            reachable,
            vertex_count,
        } => writeln!(writer, "reachable vertices: {reachable} of {vertex_count}")?,
        Headline::NegativeCycle => writeln!(writer, "negative-weight cycle detected")?,
    }
    render_timing(family, summary.representation(), summary.elapsed(), writer)
}

fn render_timing(
    family: AlgorithmFamily,
    representation: Representation,
    elapsed: Duration,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(
        writer,
        "{family} ({representation}) time: {:.3} ms",
        millis(elapsed)
    )
}

fn render_simulation(
    family: AlgorithmFamily,
    reports: &[IterationReport],
    writer: &mut impl Write,
) -> io::Result<()> {
    let mut totals = [Duration::ZERO; 2];
    let mut completed = 0_u32;
    for report in reports {
        writeln!(
            writer,
            "iteration {} ({} edges):",
            report.iteration() + 1,
            report.edge_count()
        )?;
        match report.result() {
            Ok(summaries) => {
                completed += 1;
                for (total, summary) in totals.iter_mut().zip(summaries) {
                    *total += summary.elapsed();
                    render_quiet(family, summary, writer)?;
                }
            }
            Err(err) => writeln!(writer, "failed: {err}")?,
        }
    }

    writeln!(writer, "completed {completed} of {} iterations", reports.len())?;
    if completed > 0 {
        for (representation, total) in Representation::ALL.into_iter().zip(totals) {
            writeln!(
                writer,
                "mean {family} ({representation}) time: {:.3} ms",
                millis(total / completed)
            )?;
        }
    }
    Ok(())
}

fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1_000.0
}
