//! Minimum spanning tree (MST) construction.
//!
//! Prim's and Kruskal's algorithms are each implemented once per graph
//! representation. All four variants return the same total weight on a
//! connected graph; the selected edge set may differ under weight ties.
//! Every variant reports the wall-clock time of its body via [`Timed`].

mod kruskal;
mod prim;
mod union_find;

pub use self::{
    kruskal::{kruskal_list, kruskal_matrix},
    prim::{prim_list, prim_matrix},
    union_find::DisjointSet,
};

use crate::{
    Result as GraphResult, Timed, WeightedGraph,
    graph::{Weight, WeightedEdge},
};

/// Errors returned while computing a minimum spanning tree.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MstError {
    /// The caller requested an MST for a graph with no vertices.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// The graph is not connected, so no spanning tree exists.
    #[error("graph is disconnected: selected {tree_edges} tree edges for {vertex_count} vertices")]
    Disconnected {
        /// Number of edges the algorithm managed to select.
        tree_edges: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// The selected edges span the graph but their weights sum outside the
    /// range of [`Weight`].
    #[error("total weight of the {tree_edges} tree edges overflows a 64-bit weight")]
    WeightOverflow {
        /// Number of edges in the spanning tree.
        tree_edges: usize,
    },
}

crate::define_error_codes! {
    /// Machine-readable error codes for [`MstError`].
    enum MstErrorCode for MstError {
        /// The caller requested an MST for an empty graph.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// The graph is not connected.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED",
        /// The tree weight does not fit the weight type.
        WeightOverflow => WeightOverflow { .. } => "MST_WEIGHT_OVERFLOW",
    }
}

/// Output of a spanning-tree run: the selected edges and their total weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    edges: Vec<WeightedEdge>,
    total_weight: Weight,
}

impl SpanningTree {
    fn from_edges(edges: Vec<WeightedEdge>) -> Result<Self, MstError> {
        let total_weight = edges
            .iter()
            .try_fold(0, |total: Weight, edge| total.checked_add(edge.weight()))
            .ok_or(MstError::WeightOverflow {
                tree_edges: edges.len(),
            })?;
        Ok(Self {
            edges,
            total_weight,
        })
    }

    /// Returns the tree edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[WeightedEdge] { &self.edges }

    /// Returns the sum of the tree edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the number of tree edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Materialises the tree as a graph on `vertex_count` vertices, which
    /// exposes it in both matrix and list form.
    ///
    /// # Errors
    /// Returns a [`crate::GraphError`] when an edge does not fit the vertex
    /// range.
    pub fn to_graph(&self, vertex_count: usize) -> GraphResult<WeightedGraph> {
        WeightedGraph::from_edges(
            vertex_count,
            self.edges
                .iter()
                .map(|edge| (edge.source(), edge.target(), edge.weight())),
        )
    }
}

/// Result type shared by the four MST variants.
pub type MstResult = Result<Timed<SpanningTree>, MstError>;

fn require_vertices(vertex_count: usize) -> Result<(), MstError> {
    if vertex_count == 0 {
        return Err(MstError::EmptyGraph);
    }
    Ok(())
}

fn require_spanning(
    vertex_count: usize,
    edges: Vec<WeightedEdge>,
) -> Result<SpanningTree, MstError> {
    if edges.len() != vertex_count.saturating_sub(1) {
        return Err(MstError::Disconnected {
            tree_edges: edges.len(),
            vertex_count,
        });
    }
    SpanningTree::from_edges(edges)
}
