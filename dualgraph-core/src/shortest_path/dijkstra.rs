//! Dijkstra's algorithm on both graph representations.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    graph::{AdjacencyList, AdjacencyMatrix, Vertex, WeightedEdge},
    timing::timed,
};

use super::{
    DijkstraResult, Distance, PathError, ShortestPaths, check_source, initial_distances, relaxed,
};

fn reject_negative(mut edges: impl Iterator<Item = WeightedEdge>) -> Result<(), PathError> {
    match edges.find(|edge| edge.weight() < 0) {
        Some(edge) => Err(PathError::NegativeWeight {
            left: edge.source(),
            right: edge.target(),
            weight: edge.weight(),
        }),
        None => Ok(()),
    }
}

/// Computes distances from `source` with the `O(V^2)` matrix scan.
///
/// Extraction compares with `<=`, so among equally distant unvisited
/// vertices the one scanned last is settled first. Distances are unaffected.
///
/// # Errors
/// Returns [`PathError::EmptyGraph`], [`PathError::InvalidSource`] or
/// [`PathError::NegativeWeight`] before any work is timed.
///
/// # Examples
/// ```
/// use dualgraph_core::{Distance, WeightedGraph, dijkstra_matrix};
///
/// let graph = WeightedGraph::from_edges(3, [(0, 1, 4), (1, 2, 2), (0, 2, 7)])?;
/// let run = dijkstra_matrix(graph.matrix(), 0)?;
/// assert_eq!(run.value().distance(2), Some(Distance::Finite(6)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn dijkstra_matrix(matrix: &AdjacencyMatrix, source: Vertex) -> DijkstraResult {
    let vertex_count = matrix.vertex_count();
    check_source(vertex_count, source)?;
    reject_negative(matrix.edges())?;

    Ok(timed(|| {
        let mut distances = initial_distances(vertex_count, source);
        let mut settled = vec![false; vertex_count];

        for _ in 1..vertex_count {
            let mut next = None;
            let mut nearest = Distance::Unreachable;
            for (vertex, distance) in distances.iter().enumerate() {
                if !settled[vertex] && *distance <= nearest {
                    nearest = *distance;
                    next = Some(vertex);
                }
            }
            // Only unreachable vertices remain once the minimum is unreachable.
            let Some(vertex) = next.filter(|_| nearest.is_reachable()) else {
                break;
            };
            settled[vertex] = true;

            for (neighbour, &weight) in matrix.row(vertex).iter().enumerate() {
                if weight == 0 || settled[neighbour] {
                    continue;
                }
                if let Some(better) = relaxed(&distances, vertex, neighbour, weight) {
                    distances[neighbour] = better;
                }
            }
        }

        ShortestPaths { source, distances }
    }))
}

/// Computes distances from `source` with a binary heap over the list.
///
/// Stale heap entries are skipped on pop rather than decreased in place.
///
/// # Errors
/// Returns [`PathError::EmptyGraph`], [`PathError::InvalidSource`] or
/// [`PathError::NegativeWeight`] before any work is timed.
pub fn dijkstra_list(list: &AdjacencyList, source: Vertex) -> DijkstraResult {
    let vertex_count = list.vertex_count();
    check_source(vertex_count, source)?;
    reject_negative(list.iter().flat_map(|(vertex, neighbours)| {
        neighbours
            .iter()
            .map(move |neighbour| WeightedEdge::new(vertex, neighbour.vertex, neighbour.weight))
    }))?;

    Ok(timed(|| {
        let mut distances = initial_distances(vertex_count, source);
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((Distance::Finite(0), source)));

        while let Some(Reverse((distance, vertex))) = heap.pop() {
            if distance > distances[vertex] {
                continue;
            }
            for neighbour in list.neighbours(vertex) {
                if let Some(better) = relaxed(&distances, vertex, neighbour.vertex, neighbour.weight)
                {
                    distances[neighbour.vertex] = better;
                    heap.push(Reverse((better, neighbour.vertex)));
                }
            }
        }

        ShortestPaths { source, distances }
    }))
}
