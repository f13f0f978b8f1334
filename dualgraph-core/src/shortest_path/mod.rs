//! Single-source shortest paths (SSSP).
//!
//! Dijkstra's and Bellman-Ford's algorithms are implemented once per graph
//! representation. Distances use the [`Distance`] sum type, so unreachable
//! vertices never take part in arithmetic and no sentinel can overflow.

mod bellman_ford;
mod dijkstra;

use std::fmt;

pub use self::{
    bellman_ford::{bellman_ford_list, bellman_ford_matrix},
    dijkstra::{dijkstra_list, dijkstra_matrix},
};

use crate::{
    Timed,
    graph::{Vertex, Weight},
};

/// Distance from the source to a vertex.
///
/// `Finite` values order before `Unreachable`, so the derived ordering treats
/// an unreached vertex as infinitely far away.
///
/// # Examples
/// ```
/// use dualgraph_core::Distance;
///
/// assert!(Distance::Finite(i64::MAX) < Distance::Unreachable);
/// assert_eq!(Distance::Finite(3).extend(4), Some(7));
/// assert_eq!(Distance::Unreachable.extend(4), None);
/// assert_eq!(Distance::Unreachable.to_string(), "inf");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Distance {
    /// Length of the shortest known path.
    Finite(Weight),
    /// No path from the source has been found.
    Unreachable,
}

impl Distance {
    /// Returns the finite length, if any.
    #[must_use]
    pub const fn finite(self) -> Option<Weight> {
        match self {
            Self::Finite(length) => Some(length),
            Self::Unreachable => None,
        }
    }

    /// Returns `true` for a finite distance.
    #[must_use]
    pub const fn is_reachable(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Length of the path extended by an edge of `weight`, or `None` when
    /// `self` is unreachable or the sum overflows.
    #[must_use]
    pub const fn extend(self, weight: Weight) -> Option<Weight> {
        match self {
            Self::Finite(length) => length.checked_add(weight),
            Self::Unreachable => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(length) => write!(f, "{length}"),
            Self::Unreachable => f.write_str("inf"),
        }
    }
}

/// Distance vector computed from one source vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths {
    source: Vertex,
    distances: Vec<Distance>,
}

impl ShortestPaths {
    /// Returns the source vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> Vertex { self.source }

    /// Returns the distance of every vertex, indexed by vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn distances(&self) -> &[Distance] { &self.distances }

    /// Returns the distance of `vertex`, or `None` when it is out of range.
    #[must_use]
    pub fn distance(&self, vertex: Vertex) -> Option<Distance> {
        self.distances.get(vertex).copied()
    }

    /// Returns how many vertices are reachable from the source, itself included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances
            .iter()
            .filter(|distance| distance.is_reachable())
            .count()
    }
}

/// Outcome of a Bellman-Ford run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BellmanFordOutcome {
    /// No negative cycle is reachable; the distances are final.
    Distances(ShortestPaths),
    /// An edge still relaxed after `V - 1` passes. Distances are withheld.
    NegativeCycle,
}

impl BellmanFordOutcome {
    /// Returns the distances when no negative cycle was found.
    #[must_use]
    pub fn paths(&self) -> Option<&ShortestPaths> {
        match self {
            Self::Distances(paths) => Some(paths),
            Self::NegativeCycle => None,
        }
    }
}

/// Errors returned when a shortest-path algorithm rejects its input.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathError {
    /// The graph has no vertices.
    #[error("cannot compute shortest paths in an empty graph")]
    EmptyGraph,
    /// The source vertex is outside the graph.
    #[error("source vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidSource {
        /// The requested source vertex.
        vertex: Vertex,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// Dijkstra's algorithm requires non-negative weights.
    #[error("edge ({left}, {right}) has negative weight {weight}")]
    NegativeWeight {
        /// Smaller endpoint of the offending edge.
        left: Vertex,
        /// Larger endpoint of the offending edge.
        right: Vertex,
        /// The negative weight.
        weight: Weight,
    },
}

crate::define_error_codes! {
    /// Machine-readable error codes for [`PathError`].
    enum PathErrorCode for PathError {
        /// The graph has no vertices.
        EmptyGraph => EmptyGraph => "PATH_EMPTY_GRAPH",
        /// The source vertex is outside the graph.
        InvalidSource => InvalidSource { .. } => "PATH_INVALID_SOURCE",
        /// An edge has a negative weight.
        NegativeWeight => NegativeWeight { .. } => "PATH_NEGATIVE_WEIGHT",
    }
}

/// Result type of the Dijkstra variants.
pub type DijkstraResult = Result<Timed<ShortestPaths>, PathError>;

/// Result type of the Bellman-Ford variants.
pub type BellmanFordResult = Result<Timed<BellmanFordOutcome>, PathError>;

fn check_source(vertex_count: usize, source: Vertex) -> Result<(), PathError> {
    if vertex_count == 0 {
        return Err(PathError::EmptyGraph);
    }
    if source >= vertex_count {
        return Err(PathError::InvalidSource {
            vertex: source,
            vertex_count,
        });
    }
    Ok(())
}

fn initial_distances(vertex_count: usize, source: Vertex) -> Vec<Distance> {
    let mut distances = vec![Distance::Unreachable; vertex_count];
    distances[source] = Distance::Finite(0);
    distances
}

/// Returns the improved distance of `target` via `from`, if the arc relaxes.
fn relaxed(
    distances: &[Distance],
    from: Vertex,
    target: Vertex,
    weight: Weight,
) -> Option<Distance> {
    let candidate = Distance::Finite(distances[from].extend(weight)?);
    (candidate < distances[target]).then_some(candidate)
}

#[cfg(test)]
mod tests;
