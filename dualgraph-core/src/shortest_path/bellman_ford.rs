//! Bellman-Ford's algorithm on both graph representations.
//!
//! Each undirected edge is relaxed in both directions. Consequently any
//! negative edge reachable from the source closes a negative two-arc cycle.

use crate::{
    graph::{AdjacencyList, AdjacencyMatrix, Vertex, Weight},
    timing::timed,
};

use super::{
    BellmanFordOutcome, BellmanFordResult, Distance, ShortestPaths, check_source,
    initial_distances, relaxed,
};

/// Runs `V - 1` relaxation passes over `arcs`, then one detection pass.
fn relax_passes<A, I>(vertex_count: usize, source: Vertex, arcs: A) -> BellmanFordOutcome
where
    A: Fn() -> I,
    I: Iterator<Item = (Vertex, Vertex, Weight)>,
{
    let mut distances: Vec<Distance> = initial_distances(vertex_count, source);

    for _ in 1..vertex_count {
        for (from, to, weight) in arcs() {
            if let Some(better) = relaxed(&distances, from, to, weight) {
                distances[to] = better;
            }
        }
    }

    if arcs().any(|(from, to, weight)| relaxed(&distances, from, to, weight).is_some()) {
        return BellmanFordOutcome::NegativeCycle;
    }
    BellmanFordOutcome::Distances(ShortestPaths { source, distances })
}

/// Computes distances from `source` by scanning every matrix cell per pass.
///
/// # Errors
/// Returns [`super::PathError::EmptyGraph`] or
/// [`super::PathError::InvalidSource`].
///
/// # Examples
/// ```
/// use dualgraph_core::{BellmanFordOutcome, WeightedGraph, bellman_ford_matrix};
///
/// let graph = WeightedGraph::from_edges(3, [(0, 1, 1), (1, 2, -3), (2, 0, 1)])?;
/// let run = bellman_ford_matrix(graph.matrix(), 0)?;
/// assert_eq!(run.value(), &BellmanFordOutcome::NegativeCycle);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn bellman_ford_matrix(matrix: &AdjacencyMatrix, source: Vertex) -> BellmanFordResult {
    let vertex_count = matrix.vertex_count();
    check_source(vertex_count, source)?;

    Ok(timed(|| {
        relax_passes(vertex_count, source, move || {
            (0..vertex_count).flat_map(move |from| {
                matrix
                    .row(from)
                    .iter()
                    .enumerate()
                    .filter(|(_, weight)| **weight != 0)
                    .map(move |(to, &weight)| (from, to, weight))
            })
        })
    }))
}

/// Computes distances from `source` by walking every neighbour list per pass.
///
/// # Errors
/// Returns [`super::PathError::EmptyGraph`] or
/// [`super::PathError::InvalidSource`].
pub fn bellman_ford_list(list: &AdjacencyList, source: Vertex) -> BellmanFordResult {
    let vertex_count = list.vertex_count();
    check_source(vertex_count, source)?;

    Ok(timed(|| {
        relax_passes(vertex_count, source, move || {
            list.iter().flat_map(|(from, neighbours)| {
                neighbours
                    .iter()
                    .map(move |neighbour| (from, neighbour.vertex, neighbour.weight))
            })
        })
    }))
}
