/// Graph algorithms over a read-only [`GraphView`](crate::GraphView).
///
/// - [`shortest_path`] : single-source Dijkstra and two-node path queries.
/// - [`connectivity`] : BFS reachability and strong-connectivity checks.
/// - [`center`] : eccentricity sweep and graph center.
/// - [`tsp`] : greedy nearest-unvisited tour construction.
///
/// Every function borrows the view immutably and allocates its own working
/// state (heaps, distance maps, visited sets); nothing is retained between
/// calls.
pub mod center;
pub mod connectivity;
pub mod shortest_path;
pub mod tsp;

pub use center::{Center, CenterError, center, center_of, eccentricities, graph_center};
pub use connectivity::{is_strongly_connected, reachable_from, unreachable_pair};
pub use shortest_path::{PathResult, QueryError, ShortestPathTree, shortest_path, single_source};
pub use tsp::{Tour, TspConfig, TspError, tsp, tsp_with, walk_cost};
