//! Command implementations and argument parsing for the dualgraph CLI.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use dualgraph_core::{
    AlgorithmFamily, Comparison, EngineError, GeneratorParams, GraphError, IterationReport,
    RandomGraphGenerator, SimulationBuilder, SimulationError, Vertex, WeightedGraph, run_family,
};
use dualgraph_providers_edge_list::{EdgeListError, EdgeListSource};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_REPETITIONS: usize = 10;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "dualgraph",
    about = "Compare graph algorithms on matrix and list representations."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print a graph in both representations.
    Show(ShowCommand),
    /// Run one algorithm family on both representations of a graph.
    Run(RunCommand),
    /// Re-run one algorithm family over freshly generated random graphs.
    Simulate(SimulateCommand),
}

/// Algorithm family selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Family {
    /// Prim's minimum spanning tree.
    Prim,
    /// Kruskal's minimum spanning tree.
    Kruskal,
    /// Dijkstra's shortest paths.
    Dijkstra,
    /// Bellman-Ford's shortest paths.
    BellmanFord,
}

impl From<Family> for AlgorithmFamily {
    fn from(family: Family) -> Self {
        match family {
            Family::Prim => Self::Prim,
            Family::Kruskal => Self::Kruskal,
            Family::Dijkstra => Self::Dijkstra,
            Family::BellmanFord => Self::BellmanFord,
        }
    }
}

/// Where the graph comes from: an edge-list file or the random generator.
#[derive(Debug, Args, Clone, Default)]
pub struct GraphSource {
    /// Edge-list file in the `V E (u v w)*` format.
    #[arg(long, conflicts_with_all = ["vertices", "density", "seed"])]
    pub file: Option<PathBuf>,

    /// Override name for the graph (defaults to the file stem).
    #[arg(long, requires = "file")]
    pub name: Option<String>,

    /// Number of vertices of a generated graph.
    #[arg(long, requires = "density")]
    pub vertices: Option<usize>,

    /// Percentage of vertex pairs joined in a generated graph.
    #[arg(long, requires = "vertices")]
    pub density: Option<f64>,

    /// Seed for reproducible generation.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by the `show` command.
#[derive(Debug, Args, Clone)]
pub struct ShowCommand {
    /// Graph to print.
    #[command(flatten)]
    pub graph: GraphSource,
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Algorithm family to run.
    #[arg(value_enum)]
    pub family: Family,

    /// Source vertex for the shortest-path families.
    #[arg(long, default_value_t = 0)]
    pub source: Vertex,

    /// Only print the summary and timing lines.
    #[arg(long)]
    pub quiet: bool,

    /// Graph to run on.
    #[command(flatten)]
    pub graph: GraphSource,
}

/// Options accepted by the `simulate` command.
#[derive(Debug, Args, Clone)]
pub struct SimulateCommand {
    /// Algorithm family to run.
    #[arg(value_enum)]
    pub family: Family,

    /// Number of vertices per generated graph.
    #[arg(long)]
    pub vertices: usize,

    /// Percentage of vertex pairs joined per generated graph.
    #[arg(long)]
    pub density: f64,

    /// Number of graphs to generate and measure.
    #[arg(long, default_value_t = DEFAULT_REPETITIONS)]
    pub repetitions: usize,

    /// Source vertex for the shortest-path families.
    #[arg(long, default_value_t = 0)]
    pub source: Vertex,

    /// Seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither a file nor generator parameters were given.
    #[error("no graph given; pass --file or --vertices with --density")]
    MissingGraphSource,
    /// The edge-list file could not be loaded.
    #[error("failed to load `{path}`: {source}")]
    EdgeList {
        /// Path of the edge-list file.
        path: PathBuf,
        /// Underlying loader failure.
        #[source]
        source: EdgeListError,
    },
    /// Generator parameters were rejected or generation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// An algorithm rejected its input.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// The simulation configuration was rejected.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

impl CliError {
    /// Returns a stable code for logging.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingGraphSource => "CLI_MISSING_GRAPH_SOURCE",
            Self::EdgeList { source, .. } => source.code().as_str(),
            Self::Graph(error) => error.code().as_str(),
            Self::Engine(error) => error.code_str(),
            Self::Simulation(error) => error.code().as_str(),
        }
    }
}

/// A loaded or generated graph with its display name.
#[derive(Debug, Clone)]
pub struct NamedGraph {
    /// Name of the file stem, the override, or `random`.
    pub name: String,
    /// The graph itself.
    pub graph: WeightedGraph,
}

/// Outcome of a CLI command, ready for rendering.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Output of `show`.
    Show(NamedGraph),
    /// Output of `run`.
    Run {
        /// The graph that was measured.
        graph: NamedGraph,
        /// Both variants' reports.
        comparison: Comparison,
        /// Whether per-vertex and per-edge detail is suppressed.
        quiet: bool,
    },
    /// Output of `simulate`.
    Simulate {
        /// Family that was measured.
        family: AlgorithmFamily,
        /// One report per iteration, in order.
        reports: Vec<IterationReport>,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be obtained or an algorithm
/// rejects it.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use dualgraph_cli::cli::{Cli, Command, ExecutionSummary, GraphSource, ShowCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Show(ShowCommand {
///         graph: GraphSource {
///             vertices: Some(6),
///             density: Some(50.0),
///             seed: Some(1),
///             ..GraphSource::default()
///         },
///     }),
/// };
/// let ExecutionSummary::Show(shown) = run_cli(cli)? else {
///     unreachable!("show yields a graph");
/// };
/// assert_eq!(shown.graph.edge_count(), 7);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Show(show) => {
            span.record("command", "show");
            Ok(ExecutionSummary::Show(load_graph(show.graph)?))
        }
        Command::Run(run) => {
            span.record("command", "run");
            run_command(run)
        }
        Command::Simulate(simulate) => {
            span.record("command", "simulate");
            simulate_command(&simulate)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(family = field::Empty, source = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let family = AlgorithmFamily::from(command.family);
    let span = Span::current();
    span.record("family", family.as_str());
    span.record("source", command.source);

    let graph = load_graph(command.graph)?;
    let comparison = run_family(family, &graph.graph, command.source)?;
    info!(
        graph = graph.name.as_str(),
        vertices = graph.graph.vertex_count(),
        edges = graph.graph.edge_count(),
        "run completed"
    );
    Ok(ExecutionSummary::Run {
        graph,
        comparison,
        quiet: command.quiet,
    })
}

#[instrument(
    name = "cli.simulate",
    err,
    skip(command),
    fields(family = field::Empty, repetitions = command.repetitions),
)]
pub(super) fn simulate_command(command: &SimulateCommand) -> Result<ExecutionSummary, CliError> {
    let family = AlgorithmFamily::from(command.family);
    Span::current().record("family", family.as_str());

    let mut builder = SimulationBuilder::new(family, command.vertices, command.density)
        .with_repetitions(command.repetitions)
        .with_source(command.source);
    if let Some(seed) = command.seed {
        builder = builder.with_seed(seed);
    }
    let reports = builder.build()?.run();
    Ok(ExecutionSummary::Simulate { family, reports })
}

/// Loads the graph described by `source`.
#[instrument(name = "cli.load_graph", err, skip(source), fields(origin = field::Empty))]
pub(super) fn load_graph(source: GraphSource) -> Result<NamedGraph, CliError> {
    let span = Span::current();
    match source {
        GraphSource {
            file: Some(path),
            name,
            ..
        } => {
            span.record("origin", "file");
            let name = derive_graph_name(&path, name.as_deref());
            let loaded = EdgeListSource::try_from_path(name, &path)
                .map_err(|source| CliError::EdgeList { path, source })?;
            Ok(NamedGraph {
                name: loaded.name().to_owned(),
                graph: loaded.into_graph(),
            })
        }
        GraphSource {
            vertices: Some(vertices),
            density: Some(density),
            seed,
            ..
        } => {
            span.record("origin", "generator");
            let generator = RandomGraphGenerator::new(GeneratorParams::new(vertices, density)?);
            let graph = match seed {
                Some(seed) => generator.generate_seeded(seed)?,
                None => generator.generate_from_entropy()?,
            };
            Ok(NamedGraph {
                name: "random".to_owned(),
                graph,
            })
        }
        _ => Err(CliError::MissingGraphSource),
    }
}

pub(super) fn derive_graph_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}
