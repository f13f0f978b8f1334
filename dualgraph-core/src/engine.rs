//! Runs one algorithm family on both graph representations.
//!
//! [`run_family`] is the single dispatch point used by the CLI, the
//! simulation driver and the benchmarks. It executes the matrix variant
//! first, then the list variant, and returns both timed outcomes side by
//! side.

use std::{fmt, time::Duration};

use tracing::{debug, instrument};

use crate::{
    error::EngineError,
    graph::{Vertex, Weight, WeightedGraph},
    mst::{SpanningTree, kruskal_list, kruskal_matrix, prim_list, prim_matrix},
    shortest_path::{
        BellmanFordOutcome, ShortestPaths, bellman_ford_list, bellman_ford_matrix, dijkstra_list,
        dijkstra_matrix,
    },
    timing::Timed,
};

/// The four algorithms the engine can compare.
///
/// # Examples
/// ```
/// use dualgraph_core::AlgorithmFamily;
///
/// assert_eq!(AlgorithmFamily::BellmanFord.as_str(), "bellman-ford");
/// assert!(AlgorithmFamily::Kruskal.is_spanning_tree());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AlgorithmFamily {
    /// Prim's minimum spanning tree.
    Prim,
    /// Kruskal's minimum spanning tree.
    Kruskal,
    /// Dijkstra's single-source shortest paths.
    Dijkstra,
    /// Bellman-Ford's single-source shortest paths.
    BellmanFord,
}

impl AlgorithmFamily {
    /// Every family, in presentation order.
    pub const ALL: [Self; 4] = [Self::Prim, Self::Kruskal, Self::Dijkstra, Self::BellmanFord];

    /// Returns the stable label used in logs and metrics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
            Self::Dijkstra => "dijkstra",
            Self::BellmanFord => "bellman-ford",
        }
    }

    /// Returns `true` for the minimum spanning tree families.
    #[must_use]
    pub const fn is_spanning_tree(self) -> bool {
        matches!(self, Self::Prim | Self::Kruskal)
    }
}

impl fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Graph form an algorithm variant consumes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Representation {
    /// Dense adjacency matrix.
    Matrix,
    /// Adjacency list.
    List,
}

impl Representation {
    /// Both representations, in execution order.
    pub const ALL: [Self; 2] = [Self::Matrix, Self::List];

    /// Returns the stable label used in logs and metrics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::List => "list",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A minimum spanning tree.
    SpanningTree(SpanningTree),
    /// Final shortest-path distances.
    ShortestPaths(ShortestPaths),
    /// Bellman-Ford found a negative cycle reachable from the source.
    NegativeCycle,
}

impl From<BellmanFordOutcome> for Outcome {
    fn from(outcome: BellmanFordOutcome) -> Self {
        match outcome {
            BellmanFordOutcome::Distances(paths) => Self::ShortestPaths(paths),
            BellmanFordOutcome::NegativeCycle => Self::NegativeCycle,
        }
    }
}

/// The condensed result of a run, without per-vertex or per-edge detail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Headline {
    /// Total weight of the spanning tree.
    TotalWeight(Weight),
    /// Number of vertices reachable from the source, the source included.
    Reachable {
        /// Vertices with a finite distance.
        reachable: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A negative cycle was detected.
    NegativeCycle,
}

/// Summary of one timed variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RunSummary {
    representation: Representation,
    elapsed: Duration,
    headline: Headline,
}

impl RunSummary {
    /// Returns the representation the variant consumed.
    #[must_use]
    #[rustfmt::skip]
    pub fn representation(&self) -> Representation { self.representation }

    /// Returns the time spent in the algorithm body.
    #[must_use]
    #[rustfmt::skip]
    pub fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns the condensed result.
    #[must_use]
    #[rustfmt::skip]
    pub fn headline(&self) -> Headline { self.headline }
}

/// Full result of one timed variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    representation: Representation,
    elapsed: Duration,
    outcome: Outcome,
}

impl RunReport {
    /// Returns the representation the variant consumed.
    #[must_use]
    #[rustfmt::skip]
    pub fn representation(&self) -> Representation { self.representation }

    /// Returns the time spent in the algorithm body.
    #[must_use]
    #[rustfmt::skip]
    pub fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns the algorithm result.
    #[must_use]
    #[rustfmt::skip]
    pub fn outcome(&self) -> &Outcome { &self.outcome }

    /// Condenses the report into a [`RunSummary`].
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        let headline = match &self.outcome {
            Outcome::SpanningTree(tree) => Headline::TotalWeight(tree.total_weight()),
            Outcome::ShortestPaths(paths) => Headline::Reachable {
                reachable: paths.reachable_count(),
                vertex_count: paths.distances().len(),
            },
            Outcome::NegativeCycle => Headline::NegativeCycle,
        };
        RunSummary {
            representation: self.representation,
            elapsed: self.elapsed,
            headline,
        }
    }
}

/// The matrix and list runs of one family over the same graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    family: AlgorithmFamily,
    matrix: RunReport,
    list: RunReport,
}

impl Comparison {
    /// Returns the family that was run.
    #[must_use]
    #[rustfmt::skip]
    pub fn family(&self) -> AlgorithmFamily { self.family }

    /// Returns the matrix variant's report.
    #[must_use]
    #[rustfmt::skip]
    pub fn matrix(&self) -> &RunReport { &self.matrix }

    /// Returns the list variant's report.
    #[must_use]
    #[rustfmt::skip]
    pub fn list(&self) -> &RunReport { &self.list }

    /// Returns both reports in execution order.
    #[must_use]
    pub fn reports(&self) -> [&RunReport; 2] {
        [&self.matrix, &self.list]
    }

    /// Returns both summaries in execution order.
    #[must_use]
    pub fn summaries(&self) -> [RunSummary; 2] {
        [self.matrix.summary(), self.list.summary()]
    }
}

/// Runs `family` on the matrix and then the list form of `graph`.
///
/// `source` is only read by the shortest-path families.
///
/// # Errors
/// Returns [`EngineError::Mst`] or [`EngineError::Path`] when the first
/// variant rejects its input. Both variants validate identically, so the list
/// variant is never reached in that case.
///
/// # Examples
/// ```
/// use dualgraph_core::{AlgorithmFamily, Headline, WeightedGraph, run_family};
///
/// let graph = WeightedGraph::from_edges(3, [(0, 1, 4), (1, 2, 2), (0, 2, 5)])?;
/// let comparison = run_family(AlgorithmFamily::Prim, &graph, 0)?;
/// for summary in comparison.summaries() {
///     assert_eq!(summary.headline(), Headline::TotalWeight(6));
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "engine.run_family",
    err,
    skip(family, graph),
    fields(
        family = family.as_str(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
    ),
)]
pub fn run_family(
    family: AlgorithmFamily,
    graph: &WeightedGraph,
    source: Vertex,
) -> Result<Comparison, EngineError> {
    let matrix = run_variant(family, Representation::Matrix, graph, source)?;
    let list = run_variant(family, Representation::List, graph, source)?;
    Ok(Comparison {
        family,
        matrix,
        list,
    })
}

fn run_variant(
    family: AlgorithmFamily,
    representation: Representation,
    graph: &WeightedGraph,
    source: Vertex,
) -> Result<RunReport, EngineError> {
    use AlgorithmFamily::{BellmanFord, Dijkstra, Kruskal, Prim};
    use Representation::{List, Matrix};

    let run: Timed<Outcome> = match (family, representation) {
        (Prim, Matrix) => prim_matrix(graph.matrix())?.map(Outcome::SpanningTree),
        (Prim, List) => prim_list(graph.adjacency())?.map(Outcome::SpanningTree),
        (Kruskal, Matrix) => kruskal_matrix(graph.matrix())?.map(Outcome::SpanningTree),
        (Kruskal, List) => kruskal_list(graph.adjacency())?.map(Outcome::SpanningTree),
        (Dijkstra, Matrix) => dijkstra_matrix(graph.matrix(), source)?.map(Outcome::ShortestPaths),
        (Dijkstra, List) => dijkstra_list(graph.adjacency(), source)?.map(Outcome::ShortestPaths),
        (BellmanFord, Matrix) => bellman_ford_matrix(graph.matrix(), source)?.map(Outcome::from),
        (BellmanFord, List) => bellman_ford_list(graph.adjacency(), source)?.map(Outcome::from),
    };
    let (outcome, elapsed) = run.into_parts();
    record_elapsed(family, representation, elapsed);

    Ok(RunReport {
        representation,
        elapsed,
        outcome,
    })
}

fn record_elapsed(family: AlgorithmFamily, representation: Representation, elapsed: Duration) {
    debug!(
        algorithm = family.as_str(),
        representation = representation.as_str(),
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        "algorithm variant finished"
    );
    #[cfg(feature = "metrics")]
    metrics::histogram!(
        "algorithm_elapsed_seconds",
        "algorithm" => family.as_str(),
        "representation" => representation.as_str(),
    )
    .record(elapsed.as_secs_f64());
}
