//! Dual-representation undirected weighted graph.
//!
//! [`WeightedGraph`] owns an [`AdjacencyMatrix`] and an [`AdjacencyList`] that
//! always describe the same logical graph. Both are only ever mutated through
//! [`WeightedGraph::add_edge`], which validates the edge before touching
//! either representation so the two forms cannot diverge.

mod list;
mod matrix;

pub use self::{
    list::{AdjacencyList, Neighbour},
    matrix::AdjacencyMatrix,
};
pub(crate) use self::matrix::cell_count;

use crate::{Result, error::GraphError};

/// Dense vertex index in `[0, vertex_count)`.
pub type Vertex = usize;

/// Integer edge weight. `0` is reserved for "no edge" in the matrix form.
pub type Weight = i64;

/// An undirected edge in canonical form (`source < target`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WeightedEdge {
    source: Vertex,
    target: Vertex,
    weight: Weight,
}

impl WeightedEdge {
    /// Creates an edge, swapping the endpoints into canonical order.
    ///
    /// # Examples
    /// ```
    /// use dualgraph_core::WeightedEdge;
    ///
    /// let edge = WeightedEdge::new(3, 1, 7);
    /// assert_eq!((edge.source(), edge.target(), edge.weight()), (1, 3, 7));
    /// ```
    #[must_use]
    pub fn new(left: Vertex, right: Vertex, weight: Weight) -> Self {
        let (source, target) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> Vertex { self.source }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> Vertex { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Weight { self.weight }
}

/// Undirected weighted graph stored as both an adjacency matrix and an
/// adjacency list.
///
/// # Examples
/// ```
/// use dualgraph_core::WeightedGraph;
///
/// let mut graph = WeightedGraph::new(3);
/// graph.add_edge(0, 1, 4)?;
/// graph.add_edge(1, 2, 2)?;
/// assert_eq!(graph.matrix().weight(1, 0), Some(4));
/// assert_eq!(graph.adjacency().neighbours(1).len(), 2);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), dualgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedGraph {
    matrix: AdjacencyMatrix,
    list: AdjacencyList,
    edge_count: usize,
}

impl WeightedGraph {
    /// Allocates an edgeless graph on `vertex_count` vertices.
    ///
    /// # Panics
    /// Panics when the `V x V` matrix cannot be allocated. Use
    /// [`Self::try_new`] for sizes that come from untrusted input.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            matrix: AdjacencyMatrix::new(vertex_count),
            list: AdjacencyList::new(vertex_count),
            edge_count: 0,
        }
    }

    /// Allocates an edgeless graph, reporting an oversized vertex count as an
    /// error instead of aborting.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyVertices`] when `V * V` overflows or the
    /// allocator refuses either representation.
    ///
    /// # Examples
    /// ```
    /// use dualgraph_core::{GraphError, WeightedGraph};
    ///
    /// assert_eq!(WeightedGraph::try_new(4)?.vertex_count(), 4);
    /// assert!(matches!(
    ///     WeightedGraph::try_new(usize::MAX),
    ///     Err(GraphError::TooManyVertices { .. })
    /// ));
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        Ok(Self {
            matrix: AdjacencyMatrix::try_new(vertex_count)?,
            list: AdjacencyList::try_new(vertex_count)?,
            edge_count: 0,
        })
    }

    /// Builds a graph from `(u, v, w)` triples.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyVertices`] from [`Self::try_new`], or the
    /// first [`GraphError`] raised by [`Self::add_edge`].
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (Vertex, Vertex, Weight)>,
    ) -> Result<Self> {
        let mut graph = Self::try_new(vertex_count)?;
        for (left, right, weight) in edges {
            graph.add_edge(left, right, weight)?;
        }
        Ok(graph)
    }

    /// Inserts the undirected edge `{left, right}` into both representations.
    ///
    /// Adding a pair that already exists overwrites its weight in both forms.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when an endpoint is out of range,
    /// [`GraphError::SelfLoop`] when `left == right`, and
    /// [`GraphError::ZeroWeight`] when `weight == 0`.
    pub fn add_edge(&mut self, left: Vertex, right: Vertex, weight: Weight) -> Result<()> {
        let vertex_count = self.vertex_count();
        for vertex in [left, right] {
            if vertex >= vertex_count {
                return Err(GraphError::InvalidVertex {
                    vertex,
                    vertex_count,
                });
            }
        }
        if left == right {
            return Err(GraphError::SelfLoop { vertex: left });
        }
        if weight == 0 {
            return Err(GraphError::ZeroWeight { left, right });
        }

        let existed = self.matrix.contains(left, right);
        self.matrix.set(left, right, weight);
        self.list.upsert(left, right, weight);
        if !existed {
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.matrix.vertex_count()
    }

    /// Returns the number of distinct undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` when an edge joins `left` and `right`.
    #[must_use]
    pub fn has_edge(&self, left: Vertex, right: Vertex) -> bool {
        self.matrix.weight(left, right).is_some()
    }

    /// Returns the read-only matrix form.
    #[must_use]
    #[rustfmt::skip]
    pub fn matrix(&self) -> &AdjacencyMatrix { &self.matrix }

    /// Returns the read-only list form.
    #[must_use]
    #[rustfmt::skip]
    pub fn adjacency(&self) -> &AdjacencyList { &self.list }

    /// Iterates over every edge once, in row-major `source < target` order.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.matrix.edges()
    }

    /// Returns `true` when some edge carries a negative weight.
    #[must_use]
    pub fn has_negative_weight(&self) -> bool {
        self.edges().any(|edge| edge.weight() < 0)
    }
}
