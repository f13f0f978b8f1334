#![allow(dead_code, reason = "each integration test binary uses a subset")]

use dualgraph_core::WeightedGraph;
use dualgraph_test_support::{EdgeTriple, fixtures::GraphFixture, profile::proptest_cases};
use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;

#[must_use]
pub fn build(fixture: &GraphFixture) -> WeightedGraph {
    WeightedGraph::from_edges(fixture.vertex_count, fixture.edges.iter().copied())
        .expect("fixture edges are valid")
}

#[must_use]
pub fn config(default_cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases: proptest_cases(default_cases),
        ..ProptestConfig::default()
    }
}

/// How edge weights are drawn for generated fixtures.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub enum WeightShape {
    /// Wide positive range, ties are rare.
    #[weight(3)]
    Spread,
    /// Only a handful of distinct values, ties are common.
    #[weight(2)]
    Ties,
    /// Every edge has the same weight.
    #[weight(1)]
    Uniform,
}

impl WeightShape {
    fn draw(self, rng: &mut SmallRng) -> i64 {
        match self {
            Self::Spread => rng.gen_range(1..=1_000),
            Self::Ties => rng.gen_range(1..=3),
            Self::Uniform => 7,
        }
    }
}

/// Builds a connected fixture: a random spanning tree plus `extra` random
/// chords. Duplicate chords overwrite earlier weights.
#[must_use]
pub fn connected_fixture(
    vertex_count: usize,
    extra: usize,
    shape: WeightShape,
    seed: u64,
) -> GraphFixture {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges: Vec<EdgeTriple> = (1..vertex_count)
        .map(|vertex| (rng.gen_range(0..vertex), vertex, shape.draw(&mut rng)))
        .collect();
    if vertex_count > 1 {
        for _ in 0..extra {
            let left = rng.gen_range(0..vertex_count);
            let right = rng.gen_range(0..vertex_count);
            if left != right {
                edges.push((left, right, shape.draw(&mut rng)));
            }
        }
    }
    GraphFixture {
        vertex_count,
        edges,
    }
}

pub fn connected_fixture_strategy(max_vertices: usize) -> impl Strategy<Value = GraphFixture> {
    (1..=max_vertices, 0_usize..24, any::<WeightShape>(), any::<u64>()).prop_map(
        |(vertex_count, extra, shape, seed)| connected_fixture(vertex_count, extra, shape, seed),
    )
}
