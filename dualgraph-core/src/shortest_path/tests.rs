//! Unit tests for the Dijkstra and Bellman-Ford variants.

use rstest::rstest;

use crate::WeightedGraph;

use super::{
    BellmanFordOutcome, Distance, PathError, ShortestPaths, bellman_ford_list,
    bellman_ford_matrix, dijkstra_list, dijkstra_matrix,
};

use Distance::{Finite, Unreachable};

type Variant = fn(&WeightedGraph, usize) -> Result<ShortestPaths, PathError>;

fn dijkstra_on_matrix(graph: &WeightedGraph, source: usize) -> Result<ShortestPaths, PathError> {
    dijkstra_matrix(graph.matrix(), source).map(|run| run.into_parts().0)
}

fn dijkstra_on_list(graph: &WeightedGraph, source: usize) -> Result<ShortestPaths, PathError> {
    dijkstra_list(graph.adjacency(), source).map(|run| run.into_parts().0)
}

fn bellman_ford_on_matrix(
    graph: &WeightedGraph,
    source: usize,
) -> Result<ShortestPaths, PathError> {
    bellman_ford_matrix(graph.matrix(), source).map(|run| expect_paths(run.into_parts().0))
}

fn bellman_ford_on_list(graph: &WeightedGraph, source: usize) -> Result<ShortestPaths, PathError> {
    bellman_ford_list(graph.adjacency(), source).map(|run| expect_paths(run.into_parts().0))
}

fn expect_paths(outcome: BellmanFordOutcome) -> ShortestPaths {
    match outcome {
        BellmanFordOutcome::Distances(paths) => paths,
        BellmanFordOutcome::NegativeCycle => panic!("unexpected negative cycle"),
    }
}

fn graph(vertex_count: usize, edges: &[(usize, usize, i64)]) -> WeightedGraph {
    WeightedGraph::from_edges(vertex_count, edges.iter().copied()).expect("fixture edges are valid")
}

fn diamond_with_isolated_vertex() -> WeightedGraph {
    graph(
        6,
        &[(0, 1, 7), (0, 2, 9), (0, 4, 14), (1, 2, 10), (1, 3, 15), (2, 3, 11), (2, 4, 2), (3, 4, 9)],
    )
}

#[rstest]
#[case::dijkstra_matrix(dijkstra_on_matrix as Variant)]
#[case::dijkstra_list(dijkstra_on_list as Variant)]
#[case::bellman_ford_matrix(bellman_ford_on_matrix as Variant)]
#[case::bellman_ford_list(bellman_ford_on_list as Variant)]
fn computes_expected_distances(#[case] variant: Variant) {
    let paths = variant(&diamond_with_isolated_vertex(), 0).expect("valid source");
    assert_eq!(paths.source(), 0);
    assert_eq!(
        paths.distances(),
        &[Finite(0), Finite(7), Finite(9), Finite(20), Finite(11), Unreachable]
    );
    assert_eq!(paths.reachable_count(), 5);
}

#[rstest]
#[case::dijkstra_matrix(dijkstra_on_matrix as Variant)]
#[case::dijkstra_list(dijkstra_on_list as Variant)]
#[case::bellman_ford_matrix(bellman_ford_on_matrix as Variant)]
#[case::bellman_ford_list(bellman_ford_on_list as Variant)]
fn isolated_source_reaches_only_itself(#[case] variant: Variant) {
    let paths = variant(&diamond_with_isolated_vertex(), 5).expect("valid source");
    assert_eq!(paths.distance(5), Some(Finite(0)));
    assert_eq!(paths.reachable_count(), 1);
    assert!(paths.distances()[..5].iter().all(|d| *d == Unreachable));
}

#[rstest]
#[case::dijkstra_matrix(dijkstra_on_matrix as Variant)]
#[case::dijkstra_list(dijkstra_on_list as Variant)]
#[case::bellman_ford_matrix(bellman_ford_on_matrix as Variant)]
#[case::bellman_ford_list(bellman_ford_on_list as Variant)]
fn rejects_out_of_range_source(#[case] variant: Variant) {
    let err = variant(&graph(2, &[(0, 1, 1)]), 2).expect_err("source out of range");
    assert_eq!(
        err,
        PathError::InvalidSource {
            vertex: 2,
            vertex_count: 2
        }
    );
}

#[rstest]
#[case::dijkstra_matrix(dijkstra_on_matrix as Variant)]
#[case::dijkstra_list(dijkstra_on_list as Variant)]
#[case::bellman_ford_matrix(bellman_ford_on_matrix as Variant)]
#[case::bellman_ford_list(bellman_ford_on_list as Variant)]
fn rejects_empty_graph(#[case] variant: Variant) {
    let err = variant(&WeightedGraph::new(0), 0).expect_err("no vertices");
    assert_eq!(err, PathError::EmptyGraph);
    assert_eq!(err.code().as_str(), "PATH_EMPTY_GRAPH");
}

#[rstest]
#[case::dijkstra_matrix(dijkstra_on_matrix as Variant)]
#[case::dijkstra_list(dijkstra_on_list as Variant)]
fn dijkstra_rejects_negative_weights(#[case] variant: Variant) {
    let err = variant(&graph(3, &[(0, 1, 2), (2, 1, -1)]), 0).expect_err("negative edge");
    assert_eq!(
        err,
        PathError::NegativeWeight {
            left: 1,
            right: 2,
            weight: -1
        }
    );
}

#[test]
fn bellman_ford_flags_negative_triangle() {
    let graph = graph(3, &[(0, 1, 1), (1, 2, -3), (2, 0, 1)]);
    let matrix = bellman_ford_matrix(graph.matrix(), 0).expect("valid source");
    let list = bellman_ford_list(graph.adjacency(), 0).expect("valid source");
    assert_eq!(matrix.value(), &BellmanFordOutcome::NegativeCycle);
    assert_eq!(list.value(), &BellmanFordOutcome::NegativeCycle);
    assert!(matrix.value().paths().is_none());
}

#[test]
fn bellman_ford_ignores_unreachable_negative_edge() {
    // The negative edge lives in a component the source cannot reach.
    let graph = graph(4, &[(0, 1, 5), (2, 3, -2)]);
    let run = bellman_ford_list(graph.adjacency(), 0).expect("valid source");
    let paths = run.value().paths().expect("no reachable negative cycle");
    assert_eq!(paths.distances(), &[Finite(0), Finite(5), Unreachable, Unreachable]);
}

#[test]
fn large_weights_do_not_overflow() {
    let graph = graph(4, &[(0, 1, i64::MAX - 1), (1, 2, 1), (2, 3, 1)]);
    for variant in [
        dijkstra_on_matrix as Variant,
        dijkstra_on_list,
        bellman_ford_on_matrix,
        bellman_ford_on_list,
    ] {
        let paths = variant(&graph, 0).expect("valid source");
        assert_eq!(
            paths.distances(),
            &[Finite(0), Finite(i64::MAX - 1), Finite(i64::MAX), Unreachable]
        );
    }
}

#[test]
fn matrix_tie_break_does_not_change_distances() {
    // Vertices 1 and 2 are equally far from the source.
    let graph = graph(4, &[(0, 1, 3), (0, 2, 3), (1, 3, 1), (2, 3, 1)]);
    let matrix = dijkstra_on_matrix(&graph, 0).expect("valid source");
    let list = dijkstra_on_list(&graph, 0).expect("valid source");
    assert_eq!(matrix, list);
    assert_eq!(matrix.distance(3), Some(Finite(4)));
}
