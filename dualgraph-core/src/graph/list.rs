//! Per-vertex neighbour sequences.

use crate::error::GraphError;

use super::{Vertex, Weight};

/// A `(neighbour, weight)` entry in an adjacency list.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Neighbour {
    /// The adjacent vertex.
    pub vertex: Vertex,
    /// Weight of the connecting edge.
    pub weight: Weight,
}

/// Adjacency list keeping neighbours in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyList {
    neighbours: Vec<Vec<Neighbour>>,
}

impl AdjacencyList {
    pub(super) fn new(vertex_count: usize) -> Self {
        Self {
            neighbours: vec![Vec::new(); vertex_count],
        }
    }

    pub(super) fn try_new(vertex_count: usize) -> Result<Self, GraphError> {
        let mut neighbours = Vec::new();
        neighbours
            .try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::TooManyVertices { vertex_count })?;
        neighbours.resize_with(vertex_count, Vec::new);
        Ok(Self { neighbours })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbours.len()
    }

    /// Returns the neighbours of `vertex`, or an empty slice when the index is
    /// out of range.
    #[must_use]
    pub fn neighbours(&self, vertex: Vertex) -> &[Neighbour] {
        self.neighbours.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Iterates over `(vertex, neighbours)` in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, &[Neighbour])> + '_ {
        self.neighbours
            .iter()
            .enumerate()
            .map(|(vertex, entries)| (vertex, entries.as_slice()))
    }

    pub(super) fn upsert(&mut self, left: Vertex, right: Vertex, weight: Weight) {
        Self::upsert_one(&mut self.neighbours[left], right, weight);
        Self::upsert_one(&mut self.neighbours[right], left, weight);
    }

    fn upsert_one(entries: &mut Vec<Neighbour>, vertex: Vertex, weight: Weight) {
        match entries.iter_mut().find(|entry| entry.vertex == vertex) {
            Some(entry) => entry.weight = weight,
            None => entries.push(Neighbour { vertex, weight }),
        }
    }
}
