//! Seeded benchmark graphs.
//!
//! Every benchmark draws its graphs from one [`SmallRng`] stream so a run is
//! reproducible and each size still gets a distinct graph.

use dualgraph_core::{GeneratorParams, RandomGraphGenerator, WeightedGraph};
use rand::{SeedableRng, rngs::SmallRng};

use crate::{error::BenchSetupError, params::GraphBenchParams};

/// Seed shared by all benchmark graph streams.
pub const SEED: u64 = 42;

/// Vertex counts swept by every benchmark.
pub const VERTEX_COUNTS: &[usize] = &[50, 200, 500];

/// Densities swept by every benchmark, as percentages.
pub const DENSITIES: &[f64] = &[10.0, 50.0];

/// Generates one graph per entry of [`VERTEX_COUNTS`] x [`DENSITIES`].
///
/// Sparse graphs are completed with a spanning path so the MST benchmarks
/// never measure a disconnected input.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when a parameter pair is rejected.
pub fn connected_graphs() -> Result<Vec<(GraphBenchParams, WeightedGraph)>, BenchSetupError> {
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut graphs = Vec::with_capacity(VERTEX_COUNTS.len() * DENSITIES.len());
    for &vertex_count in VERTEX_COUNTS {
        for &density in DENSITIES {
            let generator = RandomGraphGenerator::new(GeneratorParams::new(vertex_count, density)?);
            let graph = ensure_connected(generator.generate(&mut rng)?)?;
            graphs.push((
                GraphBenchParams {
                    vertex_count,
                    density,
                },
                graph,
            ));
        }
    }
    Ok(graphs)
}

/// Joins every consecutive pair `(v - 1, v)` that is not already joined,
/// weighting the new edges with the heaviest generated weight.
fn ensure_connected(mut graph: WeightedGraph) -> Result<WeightedGraph, BenchSetupError> {
    let heaviest = graph.edges().map(|edge| edge.weight()).max().unwrap_or(1);
    for vertex in 1..graph.vertex_count() {
        if !graph.has_edge(vertex - 1, vertex) {
            graph.add_edge(vertex - 1, vertex, heaviest)?;
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use dualgraph_core::kruskal_list;

    use super::*;

    #[test]
    fn benchmark_graphs_are_connected() -> Result<(), BenchSetupError> {
        let graphs = connected_graphs()?;
        assert_eq!(graphs.len(), VERTEX_COUNTS.len() * DENSITIES.len());
        for (params, graph) in &graphs {
            let tree = kruskal_list(graph.adjacency())?;
            assert_eq!(tree.value().edges().len(), params.vertex_count - 1);
        }
        Ok(())
    }
}
