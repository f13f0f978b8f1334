//! Random undirected graph generation.
//!
//! Graphs are sampled G(n, m) style: the target edge count is derived from a
//! density percentage and unordered pairs are drawn uniformly until that many
//! distinct edges exist.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    Result,
    error::GraphError,
    graph::{Weight, WeightedGraph, cell_count},
};

const DEFAULT_WEIGHT_RANGE: (Weight, Weight) = (1, 1000);

/// Validated generation parameters.
///
/// # Examples
/// ```
/// use dualgraph_core::GeneratorParams;
///
/// let params = GeneratorParams::new(10, 50.0)?;
/// assert_eq!(params.target_edge_count(), 22);
/// assert_eq!(params.weight_range(), (1, 1000));
/// # Ok::<(), dualgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorParams {
    vertex_count: usize,
    density: f64,
    weight_low: Weight,
    weight_high: Weight,
}

impl GeneratorParams {
    /// Creates parameters for graphs on `vertex_count` vertices where
    /// `density` percent of all vertex pairs are joined.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count` is zero,
    /// [`GraphError::TooManyVertices`] when the `V x V` matrix is larger than
    /// any allocation, and [`GraphError::InvalidDensity`] when `density` is
    /// not a finite value in `[0, 100]`.
    pub fn new(vertex_count: usize, density: f64) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        if cell_count(vertex_count).is_none() {
            return Err(GraphError::TooManyVertices { vertex_count });
        }
        if !density.is_finite() || !(0.0..=100.0).contains(&density) {
            return Err(GraphError::InvalidDensity { density });
        }
        let (weight_low, weight_high) = DEFAULT_WEIGHT_RANGE;
        Ok(Self {
            vertex_count,
            density,
            weight_low,
            weight_high,
        })
    }

    /// Overrides the inclusive range edge weights are drawn from.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidWeightRange`] unless `1 <= low <= high`.
    pub fn with_weight_range(mut self, low: Weight, high: Weight) -> Result<Self> {
        if low < 1 || low > high {
            return Err(GraphError::InvalidWeightRange { low, high });
        }
        self.weight_low = low;
        self.weight_high = high;
        Ok(self)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the density percentage.
    #[must_use]
    #[rustfmt::skip]
    pub fn density(&self) -> f64 { self.density }

    /// Returns the inclusive weight range.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight_range(&self) -> (Weight, Weight) { (self.weight_low, self.weight_high) }

    /// Number of unordered vertex pairs, `V(V-1)/2`.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        // `new` guarantees `V * V` fits, so `V * (V - 1)` does too.
        self.vertex_count * (self.vertex_count - 1) / 2
    }

    /// Returns `floor(density / 100 * V(V-1)/2)`, capped at the pair count.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        reason = "density is validated to [0, 100] so the product is a non-negative pair count"
    )]
    pub fn target_edge_count(&self) -> usize {
        let pairs = self.pair_count();
        let wanted = (self.density / 100.0 * pairs as f64).floor() as usize;
        wanted.min(pairs)
    }
}

/// Builds random graphs from [`GeneratorParams`].
///
/// The random source is supplied per call, so one generator can serve both
/// reproducible and entropy-seeded runs.
#[derive(Clone, Debug)]
pub struct RandomGraphGenerator {
    params: GeneratorParams,
}

impl RandomGraphGenerator {
    /// Creates a generator for `params`.
    #[must_use]
    pub fn new(params: GeneratorParams) -> Self {
        Self { params }
    }

    /// Returns the generation parameters.
    #[must_use]
    #[rustfmt::skip]
    pub fn params(&self) -> &GeneratorParams { &self.params }

    /// Generates a graph with exactly [`GeneratorParams::target_edge_count`]
    /// edges, drawing pairs and weights from `rng`.
    ///
    /// # Errors
    /// Propagates [`GraphError`] from edge insertion. Sampled edges are always
    /// valid, so this only fails if the graph invariants are broken.
    ///
    /// # Examples
    /// ```
    /// use dualgraph_core::{GeneratorParams, RandomGraphGenerator};
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let generator = RandomGraphGenerator::new(GeneratorParams::new(10, 50.0)?);
    /// let graph = generator.generate(&mut SmallRng::seed_from_u64(7))?;
    /// assert_eq!(graph.edge_count(), 22);
    /// # Ok::<(), dualgraph_core::GraphError>(())
    /// ```
    #[instrument(
        name = "generator.generate",
        skip(self, rng),
        fields(
            vertices = self.params.vertex_count,
            density = self.params.density,
        ),
    )]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<WeightedGraph> {
        let vertex_count = self.params.vertex_count;
        let target = self.params.target_edge_count();
        let (low, high) = self.params.weight_range();
        let mut graph = WeightedGraph::try_new(vertex_count)?;
        let mut draws = 0_usize;

        while graph.edge_count() < target {
            draws += 1;
            let left = rng.gen_range(0..vertex_count);
            let right = rng.gen_range(0..vertex_count);
            if left == right || graph.has_edge(left, right) {
                continue;
            }
            graph.add_edge(left, right, rng.gen_range(low..=high))?;
        }

        debug!(edges = target, draws, "generated random graph");
        Ok(graph)
    }

    /// Generates a graph from a [`SmallRng`] seeded with `seed`.
    ///
    /// # Errors
    /// See [`RandomGraphGenerator::generate`].
    pub fn generate_seeded(&self, seed: u64) -> Result<WeightedGraph> {
        self.generate(&mut SmallRng::seed_from_u64(seed))
    }

    /// Generates a graph from an entropy-seeded [`SmallRng`].
    ///
    /// # Errors
    /// See [`RandomGraphGenerator::generate`].
    pub fn generate_from_entropy(&self) -> Result<WeightedGraph> {
        self.generate(&mut SmallRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn generator(vertex_count: usize, density: f64) -> RandomGraphGenerator {
        RandomGraphGenerator::new(
            GeneratorParams::new(vertex_count, density).expect("parameters are valid"),
        )
    }

    #[rstest]
    #[case::half_of_ten(10, 50.0, 22)]
    #[case::sparse(10, 10.0, 4)]
    #[case::zero(10, 0.0, 0)]
    #[case::complete(6, 100.0, 15)]
    #[case::single_vertex(1, 100.0, 0)]
    fn target_edge_count_floors_density(
        #[case] vertex_count: usize,
        #[case] density: f64,
        #[case] expected: usize,
    ) {
        let params = GeneratorParams::new(vertex_count, density).expect("parameters are valid");
        assert_eq!(params.target_edge_count(), expected);
    }

    #[rstest]
    #[case::negative(-1.0)]
    #[case::above_hundred(100.5)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn rejects_invalid_density(#[case] density: f64) {
        let err = GeneratorParams::new(5, density).expect_err("density out of range");
        assert!(matches!(err, GraphError::InvalidDensity { .. }));
        assert_eq!(err.code().as_str(), "GRAPH_INVALID_DENSITY");
    }

    #[rstest]
    #[case::square_overflows(usize::MAX)]
    #[case::matrix_exceeds_address_space(1_usize << 30)]
    fn rejects_unallocatable_vertex_counts(#[case] vertex_count: usize) {
        let err = GeneratorParams::new(vertex_count, 0.0).expect_err("matrix cannot exist");
        assert_eq!(err, GraphError::TooManyVertices { vertex_count });
        assert_eq!(err.code().as_str(), "GRAPH_TOO_MANY_VERTICES");
    }

    #[test]
    fn pair_count_is_exact_near_the_limit() {
        let vertex_count = 1_usize << 20;
        let params = GeneratorParams::new(vertex_count, 100.0).expect("matrix size fits");
        assert_eq!(params.pair_count(), vertex_count * (vertex_count - 1) / 2);
        assert_eq!(params.target_edge_count(), params.pair_count());
    }

    #[test]
    fn rejects_zero_vertices() {
        assert_eq!(
            GeneratorParams::new(0, 50.0).expect_err("no vertices"),
            GraphError::EmptyGraph
        );
    }

    #[rstest]
    #[case::zero_low(0, 5)]
    #[case::inverted(9, 3)]
    fn rejects_invalid_weight_range(#[case] low: Weight, #[case] high: Weight) {
        let err = GeneratorParams::new(5, 50.0)
            .and_then(|params| params.with_weight_range(low, high))
            .expect_err("range is invalid");
        assert_eq!(err, GraphError::InvalidWeightRange { low, high });
    }

    #[test]
    fn generates_requested_edges_without_loops_or_duplicates() {
        let graph = generator(10, 50.0).generate_seeded(11).expect("generation succeeds");
        assert_eq!(graph.edge_count(), 22);
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges.len(), 22);
        assert!(edges.iter().all(|edge| edge.source() < edge.target()));
        for (vertex, neighbours) in graph.adjacency().iter() {
            let mut targets: Vec<_> = neighbours.iter().map(|n| n.vertex).collect();
            assert!(!targets.contains(&vertex));
            let len = targets.len();
            targets.sort_unstable();
            targets.dedup();
            assert_eq!(targets.len(), len);
        }
    }

    #[test]
    fn full_density_yields_complete_graph() {
        let graph = generator(7, 100.0).generate_seeded(3).expect("generation succeeds");
        assert_eq!(graph.edge_count(), 21);
        assert!((0..7).all(|vertex| graph.adjacency().neighbours(vertex).len() == 6));
    }

    #[test]
    fn same_seed_reproduces_graph() {
        let generator = generator(12, 40.0);
        let first = generator.generate_seeded(99).expect("generation succeeds");
        let second = generator.generate_seeded(99).expect("generation succeeds");
        assert_eq!(first.edges().collect::<Vec<_>>(), second.edges().collect::<Vec<_>>());
    }

    #[test]
    fn weights_stay_in_range() {
        let params = GeneratorParams::new(9, 80.0)
            .and_then(|params| params.with_weight_range(5, 8))
            .expect("parameters are valid");
        let graph = RandomGraphGenerator::new(params)
            .generate_seeded(1)
            .expect("generation succeeds");
        assert!(graph.edges().all(|edge| (5..=8).contains(&edge.weight())));
    }
}
