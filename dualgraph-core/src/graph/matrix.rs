//! Dense symmetric weight table.

use crate::error::GraphError;

use super::{Vertex, Weight, WeightedEdge};

/// Number of matrix cells for `vertex_count` vertices, or `None` when the
/// table would exceed the largest possible allocation.
pub(crate) fn cell_count(vertex_count: usize) -> Option<usize> {
    vertex_count.checked_mul(vertex_count).filter(|&cells| {
        cells
            .checked_mul(size_of::<Weight>())
            .is_some_and(|bytes| bytes <= isize::MAX.unsigned_abs())
    })
}

/// `V × V` symmetric weight table where `0` means "no edge".
///
/// Rows are stored contiguously in a single allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    vertex_count: usize,
    cells: Vec<Weight>,
}

impl AdjacencyMatrix {
    pub(super) fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            cells: vec![0; vertex_count.saturating_mul(vertex_count)],
        }
    }

    pub(super) fn try_new(vertex_count: usize) -> Result<Self, GraphError> {
        let too_many = || GraphError::TooManyVertices { vertex_count };
        let len = cell_count(vertex_count).ok_or_else(too_many)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_many())?;
        cells.resize(len, 0);
        Ok(Self {
            vertex_count,
            cells,
        })
    }

    /// Returns the number of vertices (rows).
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the weight of `{left, right}`, or `None` when the pair is not
    /// joined or either index is out of range.
    #[must_use]
    pub fn weight(&self, left: Vertex, right: Vertex) -> Option<Weight> {
        if left >= self.vertex_count || right >= self.vertex_count {
            return None;
        }
        let weight = self.cells[left * self.vertex_count + right];
        (weight != 0).then_some(weight)
    }

    /// Returns the raw row for `vertex`, with `0` in absent positions.
    ///
    /// # Panics
    /// Panics when `vertex >= vertex_count`.
    #[must_use]
    pub fn row(&self, vertex: Vertex) -> &[Weight] {
        let start = vertex * self.vertex_count;
        &self.cells[start..start + self.vertex_count]
    }

    /// Iterates over all rows in vertex order.
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> + '_ {
        // `chunks_exact(0)` panics, so an empty matrix yields no rows.
        self.cells.chunks_exact(self.vertex_count.max(1))
    }

    pub(super) fn contains(&self, left: Vertex, right: Vertex) -> bool {
        self.weight(left, right).is_some()
    }

    pub(super) fn set(&mut self, left: Vertex, right: Vertex, weight: Weight) {
        let n = self.vertex_count;
        self.cells[left * n + right] = weight;
        self.cells[right * n + left] = weight;
    }

    /// Iterates over the upper triangle, yielding each stored edge once.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        (0..self.vertex_count).flat_map(move |source| {
            let row = self.row(source);
            (source + 1..self.vertex_count).filter_map(move |target| {
                let weight = row[target];
                (weight != 0).then(|| WeightedEdge::new(source, target, weight))
            })
        })
    }
}
