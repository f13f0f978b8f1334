//! Prim's algorithm on both graph representations.
//!
//! Both variants grow the tree from vertex `0`. The matrix variant is the
//! classic `O(V^2)` selection scan; the list variant drives a lazy-deletion
//! binary heap in `O(E log V)`.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    graph::{AdjacencyList, AdjacencyMatrix, Vertex, Weight, WeightedEdge},
    timing::timed,
};

use super::{MstResult, require_spanning, require_vertices};

const ROOT: Vertex = 0;

/// Working state shared by both Prim variants.
struct Frontier {
    key: Vec<Option<Weight>>,
    parent: Vec<Option<Vertex>>,
    in_tree: Vec<bool>,
}

impl Frontier {
    fn rooted(vertex_count: usize) -> Self {
        let mut key = vec![None; vertex_count];
        key[ROOT] = Some(0);
        Self {
            key,
            parent: vec![None; vertex_count],
            in_tree: vec![false; vertex_count],
        }
    }

    /// Lowers the key of `vertex` when `weight` improves on it. Returns `true`
    /// when the key changed.
    fn offer(&mut self, from: Vertex, vertex: Vertex, weight: Weight) -> bool {
        if self.in_tree[vertex] || self.key[vertex].is_some_and(|key| key <= weight) {
            return false;
        }
        self.key[vertex] = Some(weight);
        self.parent[vertex] = Some(from);
        true
    }

    /// Picks the unvisited vertex with the smallest key, preferring the lowest
    /// index among equal keys.
    fn lightest(&self) -> Option<Vertex> {
        let mut best: Option<(Weight, Vertex)> = None;
        for (vertex, (key, done)) in self.key.iter().zip(&self.in_tree).enumerate() {
            let Some(key) = *key else { continue };
            if !*done && best.is_none_or(|(best_key, _)| key < best_key) {
                best = Some((key, vertex));
            }
        }
        best.map(|(_, vertex)| vertex)
    }

    fn into_edges(self) -> Vec<WeightedEdge> {
        self.parent
            .iter()
            .zip(&self.key)
            .enumerate()
            .filter_map(|(vertex, (parent, key))| match (parent, key) {
                (Some(parent), Some(weight)) => Some(WeightedEdge::new(*parent, vertex, *weight)),
                _ => None,
            })
            .collect()
    }
}

/// Computes an MST with the `O(V^2)` matrix scan.
///
/// # Errors
/// Returns [`super::MstError::EmptyGraph`] for a graph without vertices and
/// [`super::MstError::Disconnected`] when vertex `0` cannot reach every vertex.
///
/// # Examples
/// ```
/// use dualgraph_core::{WeightedGraph, prim_matrix};
///
/// let graph = WeightedGraph::from_edges(3, [(0, 1, 4), (1, 2, 2), (0, 2, 5)])?;
/// let tree = prim_matrix(graph.matrix())?;
/// assert_eq!(tree.value().total_weight(), 6);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn prim_matrix(matrix: &AdjacencyMatrix) -> MstResult {
    let vertex_count = matrix.vertex_count();
    require_vertices(vertex_count)?;

    timed(|| {
        let mut frontier = Frontier::rooted(vertex_count);
        for _ in 1..vertex_count {
            let Some(vertex) = frontier.lightest() else {
                break;
            };
            frontier.in_tree[vertex] = true;
            for (neighbour, &weight) in matrix.row(vertex).iter().enumerate() {
                if weight != 0 {
                    frontier.offer(vertex, neighbour, weight);
                }
            }
        }
        require_spanning(vertex_count, frontier.into_edges())
    })
    .transpose()
}

/// Computes an MST with a binary heap over the adjacency list.
///
/// # Errors
/// Returns [`super::MstError::EmptyGraph`] for a graph without vertices and
/// [`super::MstError::Disconnected`] when vertex `0` cannot reach every vertex.
pub fn prim_list(list: &AdjacencyList) -> MstResult {
    let vertex_count = list.vertex_count();
    require_vertices(vertex_count)?;

    timed(|| {
        let mut frontier = Frontier::rooted(vertex_count);
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0, ROOT)));

        while let Some(Reverse((_, vertex))) = heap.pop() {
            if frontier.in_tree[vertex] {
                continue;
            }
            frontier.in_tree[vertex] = true;
            for neighbour in list.neighbours(vertex) {
                if frontier.offer(vertex, neighbour.vertex, neighbour.weight) {
                    heap.push(Reverse((neighbour.weight, neighbour.vertex)));
                }
            }
        }
        require_spanning(vertex_count, frontier.into_edges())
    })
    .transpose()
}
