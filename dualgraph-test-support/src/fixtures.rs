//! Canonical graphs shared by unit, integration and CLI tests.

use crate::EdgeTriple;

/// A graph as its vertex count and edge triples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphFixture {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Undirected edges as `(left, right, weight)`.
    pub edges: Vec<EdgeTriple>,
}

impl GraphFixture {
    fn new(vertex_count: usize, edges: &[EdgeTriple]) -> Self {
        Self {
            vertex_count,
            edges: edges.to_vec(),
        }
    }

    /// Renders the fixture in the `V E (u v w)*` edge-list format, one edge
    /// per line.
    ///
    /// # Examples
    /// ```
    /// use dualgraph_test_support::fixtures::triangle;
    ///
    /// assert_eq!(triangle().to_edge_list(), "3 3\n0 1 4\n1 2 2\n0 2 5\n");
    /// ```
    #[must_use]
    pub fn to_edge_list(&self) -> String {
        let mut out = format!("{} {}\n", self.vertex_count, self.edges.len());
        for (left, right, weight) in &self.edges {
            out.push_str(&format!("{left} {right} {weight}\n"));
        }
        out
    }
}

/// Three vertices, three edges; MST weight 6.
#[must_use]
pub fn triangle() -> GraphFixture {
    GraphFixture::new(3, &[(0, 1, 4), (1, 2, 2), (0, 2, 5)])
}

/// Three vertices whose edge weights sum to a negative cycle.
#[must_use]
pub fn negative_triangle() -> GraphFixture {
    GraphFixture::new(3, &[(0, 1, 1), (1, 2, -3), (2, 0, 1)])
}

/// The nine-vertex textbook graph with a unique MST of weight 37.
#[must_use]
pub fn classic_nine() -> GraphFixture {
    GraphFixture::new(
        9,
        &[
            (0, 1, 4),
            (0, 7, 8),
            (1, 2, 8),
            (1, 7, 11),
            (2, 3, 7),
            (2, 8, 2),
            (2, 5, 4),
            (3, 4, 9),
            (3, 5, 14),
            (4, 5, 10),
            (5, 6, 2),
            (6, 7, 1),
            (6, 8, 6),
            (7, 8, 7),
        ],
    )
}

/// A four-vertex path plus one isolated vertex (`4`).
#[must_use]
pub fn path_with_isolated_vertex() -> GraphFixture {
    GraphFixture::new(5, &[(0, 1, 3), (1, 2, 1), (2, 3, 6)])
}

/// Two components: `{0, 1}` and `{2, 3}`.
#[must_use]
pub fn two_components() -> GraphFixture {
    GraphFixture::new(4, &[(0, 1, 1), (2, 3, 2)])
}
