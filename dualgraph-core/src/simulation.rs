//! Repeated runs of one algorithm family over freshly generated graphs.

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{info, instrument, warn};

use crate::{
    engine::{AlgorithmFamily, RunSummary, run_family},
    error::{EngineError, SimulationError},
    generator::{GeneratorParams, RandomGraphGenerator},
    graph::{Vertex, Weight},
};

/// Configures and validates a [`Simulation`].
///
/// # Examples
/// ```
/// use dualgraph_core::{AlgorithmFamily, SimulationBuilder};
///
/// let simulation = SimulationBuilder::new(AlgorithmFamily::Dijkstra, 20, 30.0)
///     .with_repetitions(3)
///     .with_seed(7)
///     .build()?;
/// let reports = simulation.run();
/// assert_eq!(reports.len(), 3);
/// assert!(reports.iter().all(|report| report.summaries().is_some()));
/// # Ok::<(), dualgraph_core::SimulationError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SimulationBuilder {
    family: AlgorithmFamily,
    vertex_count: usize,
    density: f64,
    repetitions: usize,
    source: Vertex,
    seed: Option<u64>,
    weight_range: Option<(Weight, Weight)>,
}

impl SimulationBuilder {
    /// Starts a builder for `family` on graphs with `vertex_count` vertices
    /// and `density` percent of all pairs joined. Defaults to one repetition
    /// from source `0` with an entropy-seeded generator.
    #[must_use]
    pub fn new(family: AlgorithmFamily, vertex_count: usize, density: f64) -> Self {
        Self {
            family,
            vertex_count,
            density,
            repetitions: 1,
            source: 0,
            seed: None,
            weight_range: None,
        }
    }

    /// Sets how many graphs are generated and measured.
    #[must_use]
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Sets the shortest-path source vertex.
    #[must_use]
    pub fn with_source(mut self, source: Vertex) -> Self {
        self.source = source;
        self
    }

    /// Seeds the generator so the whole run is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the inclusive range generated weights are drawn from.
    #[must_use]
    pub fn with_weight_range(mut self, low: Weight, high: Weight) -> Self {
        self.weight_range = Some((low, high));
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`SimulationError::NoRepetitions`] for zero repetitions,
    /// [`SimulationError::Graph`] for rejected generator parameters and
    /// [`SimulationError::InvalidSource`] when a shortest-path source lies
    /// outside the generated graphs.
    pub fn build(self) -> Result<Simulation, SimulationError> {
        if self.repetitions == 0 {
            return Err(SimulationError::NoRepetitions);
        }
        let mut params = GeneratorParams::new(self.vertex_count, self.density)?;
        if let Some((low, high)) = self.weight_range {
            params = params.with_weight_range(low, high)?;
        }
        if !self.family.is_spanning_tree() && self.source >= self.vertex_count {
            return Err(SimulationError::InvalidSource {
                vertex: self.source,
                vertex_count: self.vertex_count,
            });
        }

        Ok(Simulation {
            family: self.family,
            generator: RandomGraphGenerator::new(params),
            repetitions: self.repetitions,
            source: self.source,
            seed: self.seed,
        })
    }
}

/// A validated simulation ready to run.
#[derive(Clone, Debug)]
pub struct Simulation {
    family: AlgorithmFamily,
    generator: RandomGraphGenerator,
    repetitions: usize,
    source: Vertex,
    seed: Option<u64>,
}

impl Simulation {
    /// Returns the algorithm family under test.
    #[must_use]
    #[rustfmt::skip]
    pub fn family(&self) -> AlgorithmFamily { self.family }

    /// Returns the generator parameters.
    #[must_use]
    #[rustfmt::skip]
    pub fn params(&self) -> &GeneratorParams { self.generator.params() }

    /// Returns the number of iterations.
    #[must_use]
    #[rustfmt::skip]
    pub fn repetitions(&self) -> usize { self.repetitions }

    /// Returns the shortest-path source vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> Vertex { self.source }

    /// Returns the generator seed, if the run is reproducible.
    #[must_use]
    #[rustfmt::skip]
    pub fn seed(&self) -> Option<u64> { self.seed }

    /// Runs every iteration, handing each report to `observer` as soon as it
    /// is ready.
    ///
    /// A failed iteration is reported and the loop carries on with the next
    /// graph.
    #[instrument(
        name = "simulation.run",
        skip(self, observer),
        fields(
            family = self.family.as_str(),
            repetitions = self.repetitions,
            seeded = self.seed.is_some(),
        ),
    )]
    pub fn run_with<F>(&self, mut observer: F)
    where
        F: FnMut(&IterationReport),
    {
        let mut rng = self
            .seed
            .map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
        let mut failures = 0_usize;

        for iteration in 0..self.repetitions {
            let report = match self.generator.generate(&mut rng) {
                Ok(graph) => IterationReport {
                    iteration,
                    edge_count: graph.edge_count(),
                    result: run_family(self.family, &graph, self.source)
                        .map(|comparison| comparison.summaries()),
                },
                Err(err) => IterationReport {
                    iteration,
                    edge_count: 0,
                    result: Err(EngineError::from(err)),
                },
            };
            if let Err(err) = &report.result {
                failures += 1;
                warn!(iteration, code = err.code_str(), error = %err, "iteration failed");
            }
            observer(&report);
        }

        info!(failures, "simulation finished");
    }

    /// Runs every iteration and collects the reports.
    #[must_use]
    pub fn run(&self) -> Vec<IterationReport> {
        let mut reports = Vec::with_capacity(self.repetitions);
        self.run_with(|report| reports.push(report.clone()));
        reports
    }
}

/// What one simulation iteration produced.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationReport {
    iteration: usize,
    edge_count: usize,
    result: Result<[RunSummary; 2], EngineError>,
}

impl IterationReport {
    /// Returns the zero-based iteration index.
    #[must_use]
    #[rustfmt::skip]
    pub fn iteration(&self) -> usize { self.iteration }

    /// Returns the number of edges in this iteration's graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the matrix and list summaries, or the error that stopped them.
    #[must_use]
    #[rustfmt::skip]
    pub fn result(&self) -> &Result<[RunSummary; 2], EngineError> { &self.result }

    /// Returns the matrix and list summaries when the iteration succeeded.
    #[must_use]
    pub fn summaries(&self) -> Option<&[RunSummary; 2]> {
        self.result.as_ref().ok()
    }

    /// Returns the iteration's error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&EngineError> {
        self.result.as_ref().err()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{GraphError, Headline, MstError, Representation};

    #[test]
    fn rejects_zero_repetitions() {
        let err = SimulationBuilder::new(AlgorithmFamily::Prim, 5, 50.0)
            .with_repetitions(0)
            .build()
            .expect_err("zero repetitions");
        assert_eq!(err, SimulationError::NoRepetitions);
        assert_eq!(err.code().as_str(), "SIMULATION_NO_REPETITIONS");
    }

    #[rstest]
    #[case::empty(0, 50.0, GraphError::EmptyGraph)]
    #[case::density(5, 150.0, GraphError::InvalidDensity { density: 150.0 })]
    fn rejects_invalid_generator_params(
        #[case] vertex_count: usize,
        #[case] density: f64,
        #[case] expected: GraphError,
    ) {
        let err = SimulationBuilder::new(AlgorithmFamily::Kruskal, vertex_count, density)
            .build()
            .expect_err("invalid params");
        assert_eq!(err, SimulationError::Graph(expected));
    }

    #[test]
    fn rejects_out_of_range_source_for_shortest_paths() {
        let err = SimulationBuilder::new(AlgorithmFamily::BellmanFord, 4, 50.0)
            .with_source(4)
            .build()
            .expect_err("source out of range");
        assert_eq!(
            err,
            SimulationError::InvalidSource {
                vertex: 4,
                vertex_count: 4
            }
        );
    }

    #[test]
    fn spanning_tree_families_ignore_source() {
        let simulation = SimulationBuilder::new(AlgorithmFamily::Prim, 4, 100.0)
            .with_source(99)
            .build()
            .expect("source is unused");
        assert_eq!(simulation.source(), 99);
    }

    #[test]
    fn observer_sees_every_iteration_in_order() {
        let simulation = SimulationBuilder::new(AlgorithmFamily::Kruskal, 8, 100.0)
            .with_repetitions(4)
            .with_seed(5)
            .build()
            .expect("valid configuration");
        let mut seen = Vec::new();
        simulation.run_with(|report| seen.push((report.iteration(), report.edge_count())));
        assert_eq!(seen, [(0, 28), (1, 28), (2, 28), (3, 28)]);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let build = || {
            SimulationBuilder::new(AlgorithmFamily::Prim, 15, 60.0)
                .with_repetitions(3)
                .with_seed(42)
                .build()
                .expect("valid configuration")
        };
        let headlines = |reports: Vec<IterationReport>| -> Vec<_> {
            reports
                .iter()
                .map(|report| report.summaries().map(|[matrix, list]| (matrix.headline(), list.headline())))
                .collect()
        };
        assert_eq!(headlines(build().run()), headlines(build().run()));
    }

    #[test]
    fn disconnected_iterations_are_recorded_and_skipped() {
        // Density zero leaves every vertex isolated.
        let simulation = SimulationBuilder::new(AlgorithmFamily::Prim, 3, 0.0)
            .with_repetitions(2)
            .with_seed(1)
            .build()
            .expect("valid configuration");
        let reports = simulation.run();
        assert_eq!(reports.len(), 2);
        for report in &reports {
            assert_eq!(
                report.error(),
                Some(&EngineError::Mst(MstError::Disconnected {
                    tree_edges: 0,
                    vertex_count: 3
                }))
            );
        }
    }

    #[test]
    fn summaries_cover_both_representations() {
        let simulation = SimulationBuilder::new(AlgorithmFamily::Dijkstra, 6, 100.0)
            .with_seed(3)
            .build()
            .expect("valid configuration");
        let reports = simulation.run();
        let [matrix, list] = reports[0].summaries().expect("complete graph succeeds");
        assert_eq!(matrix.representation(), Representation::Matrix);
        assert_eq!(list.representation(), Representation::List);
        let expected = Headline::Reachable {
            reachable: 6,
            vertex_count: 6,
        };
        assert_eq!(matrix.headline(), expected);
        assert_eq!(list.headline(), expected);
    }
}
