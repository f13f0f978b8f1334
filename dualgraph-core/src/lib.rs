//! Dualgraph core library.
//!
//! Holds an undirected weighted graph as both an adjacency matrix and an
//! adjacency list, and runs Prim, Kruskal, Dijkstra and Bellman-Ford on each
//! representation with wall-clock timing.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod error;
mod generator;
mod graph;
mod mst;
mod shortest_path;
mod simulation;
mod timing;

pub use crate::{
    engine::{
        AlgorithmFamily, Comparison, Headline, Outcome, Representation, RunReport, RunSummary,
        run_family,
    },
    error::{
        EngineError, GraphError, GraphErrorCode, Result, SimulationError, SimulationErrorCode,
    },
    generator::{GeneratorParams, RandomGraphGenerator},
    graph::{AdjacencyList, AdjacencyMatrix, Neighbour, Vertex, Weight, WeightedEdge, WeightedGraph},
    mst::{
        DisjointSet, MstError, MstErrorCode, MstResult, SpanningTree, kruskal_list, kruskal_matrix,
        prim_list, prim_matrix,
    },
    shortest_path::{
        BellmanFordOutcome, BellmanFordResult, DijkstraResult, Distance, PathError, PathErrorCode,
        ShortestPaths, bellman_ford_list, bellman_ford_matrix, dijkstra_list, dijkstra_matrix,
    },
    simulation::{IterationReport, Simulation, SimulationBuilder},
    timing::{Timed, timed},
};
