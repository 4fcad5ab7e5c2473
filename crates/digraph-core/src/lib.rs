#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod algo;
pub mod file;
pub mod graph;
pub mod newtypes;

pub use algo::{
    Center, CenterError, PathResult, QueryError, ShortestPathTree, Tour, TspConfig, TspError,
    center, center_of, eccentricities, graph_center, is_strongly_connected, reachable_from,
    shortest_path, single_source, tsp, tsp_with, unreachable_pair, walk_cost,
};
pub use file::{EdgeRecord, GraphFile, LoadError, NodeRecord, build_graph, parse_graph, to_json};
pub use graph::{DiGraph, GraphError, GraphView, NodeWeight};
pub use newtypes::{NodeId, Position, PositionError, Weight};

/// Returns the current version of the digraph-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
