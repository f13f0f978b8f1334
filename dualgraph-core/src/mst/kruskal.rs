//! Kruskal's algorithm on both graph representations.

use crate::{
    graph::{AdjacencyList, AdjacencyMatrix, WeightedEdge},
    timing::timed,
};

use super::{
    DisjointSet, MstError, MstResult, SpanningTree, require_spanning, require_vertices,
};

/// Computes an MST from the upper triangle of the matrix.
///
/// # Errors
/// Returns [`MstError::EmptyGraph`] for a graph without vertices and
/// [`MstError::Disconnected`] when the edges do not span every vertex.
pub fn kruskal_matrix(matrix: &AdjacencyMatrix) -> MstResult {
    let vertex_count = matrix.vertex_count();
    require_vertices(vertex_count)?;

    timed(|| greedy_forest(vertex_count, matrix.edges().collect())).transpose()
}

/// Computes an MST from the adjacency list, keeping each symmetric pair once.
///
/// # Errors
/// Returns [`MstError::EmptyGraph`] for a graph without vertices and
/// [`MstError::Disconnected`] when the edges do not span every vertex.
pub fn kruskal_list(list: &AdjacencyList) -> MstResult {
    let vertex_count = list.vertex_count();
    require_vertices(vertex_count)?;

    timed(|| {
        let edges = list
            .iter()
            .flat_map(|(vertex, neighbours)| {
                neighbours
                    .iter()
                    .filter(move |neighbour| vertex < neighbour.vertex)
                    .map(move |neighbour| {
                        WeightedEdge::new(vertex, neighbour.vertex, neighbour.weight)
                    })
            })
            .collect();
        greedy_forest(vertex_count, edges)
    })
    .transpose()
}

fn greedy_forest(
    vertex_count: usize,
    mut edges: Vec<WeightedEdge>,
) -> Result<SpanningTree, MstError> {
    // Stable: equal weights keep collection order.
    edges.sort_by_key(WeightedEdge::weight);

    let target = vertex_count.saturating_sub(1);
    let mut sets = DisjointSet::new(vertex_count);
    let mut accepted = Vec::with_capacity(target);
    for edge in edges {
        if accepted.len() == target {
            break;
        }
        if sets.union(edge.source(), edge.target()) {
            accepted.push(edge);
        }
    }
    require_spanning(vertex_count, accepted)
}
