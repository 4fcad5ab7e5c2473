/// Heuristic travelling-salesman walk over a directed graph.
///
/// The tour is built greedily: from the current node, run Dijkstra, pick the
/// closest city that has not been visited yet, and append the whole expanded
/// shortest path to it. Every consecutive pair in the result is therefore a
/// real directed edge, even when two cities are not adjacent. Nodes may
/// repeat. Any city passed through on the way is marked visited.
///
/// The result is valid whenever reachability permits but is not guaranteed
/// to be the cheapest walk. [`TspConfig::try_all_starts`] reruns the greedy
/// walk from every city and keeps the cheapest.
use std::collections::BTreeSet;

use serde::Serialize;

use crate::algo::shortest_path::dijkstra;
use crate::graph::GraphView;
use crate::newtypes::{NodeId, Weight};


/// Options for [`tsp_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TspConfig {
    /// Node the walk starts from. Must be one of the cities.
    ///
    /// Defaults to the smallest city id.
    pub start: Option<NodeId>,
    /// Nodes the walk must visit. Defaults to every node in the graph.
    ///
    /// Segments between cities may pass through nodes outside this set.
    pub cities: Option<Vec<NodeId>>,
    /// Run the greedy walk from every city and keep the cheapest tour.
    ///
    /// The configured (or default) start is tried first and wins ties.
    pub try_all_starts: bool,
}

/// A walk visiting every requested city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    /// Visited nodes in order; consecutive pairs are edges of the graph.
    pub nodes: Vec<NodeId>,
    /// Sum of the weights of the edges between consecutive nodes.
    pub cost: Weight,
}

impl Tour {
    /// The tour of an empty city set.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            cost: 0.0,
        }
    }

    /// Returns the number of nodes in the walk, repeats included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the walk visits nothing.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Reasons no tour could be produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TspError {
    /// A requested city or start node is not in the graph.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
    /// The requested start node is not one of the cities.
    #[error("start node {0} is not one of the cities to visit")]
    InvalidStart(NodeId),
    /// The walk got stuck: no unvisited city is reachable from `from`.
    #[error("no tour covers every city: none of the {} unvisited cities is reachable from {from}", .remaining.len())]
    Unreachable {
        /// Node the walk was stuck at.
        from: NodeId,
        /// Cities still unvisited, in ascending order.
        remaining: Vec<NodeId>,
    },
}

/// Builds a heuristic tour over every node, starting at the smallest id.
///
/// An empty graph yields an empty tour.
///
/// # Errors
///
/// [`TspError::Unreachable`] if at some step no unvisited node is reachable.
pub fn tsp<G>(view: &G) -> Result<Tour, TspError>
where
    G: GraphView + ?Sized,
{
    tsp_with(view, &TspConfig::default())
}

/// Builds a heuristic tour according to `config`.
///
/// An empty city set yields an empty tour.
///
/// # Errors
///
/// - [`TspError::NodeNotFound`] if a city or the start is not in the graph.
/// - [`TspError::InvalidStart`] if the start is not one of the cities.
/// - [`TspError::Unreachable`] if the walk gets stuck. With
///   `try_all_starts` this is only returned when every start fails, and it
///   describes the failure from the first start tried.
#[tracing::instrument(level = "debug", skip_all, fields(start = ?config.start, all_starts = config.try_all_starts))]
pub fn tsp_with<G>(view: &G, config: &TspConfig) -> Result<Tour, TspError>
where
    G: GraphView + ?Sized,
{
    let cities: BTreeSet<NodeId> = match &config.cities {
        Some(list) => {
            if let Some(&missing) = list.iter().find(|&&c| !view.has_node(c)) {
                return Err(TspError::NodeNotFound(missing));
            }
            list.iter().copied().collect()
        }
        None => view.nodes().into_iter().collect(),
    };

    let Some(&first) = cities.first() else {
        return Ok(Tour::empty());
    };

    let start = match config.start {
        Some(s) if !view.has_node(s) => return Err(TspError::NodeNotFound(s)),
        Some(s) if !cities.contains(&s) => return Err(TspError::InvalidStart(s)),
        Some(s) => s,
        None => first,
    };

    let primary = greedy_walk(view, &cities, start);
    if !config.try_all_starts {
        return primary;
    }

    let mut best: Option<Tour> = primary.as_ref().ok().cloned();
    for &candidate in cities.iter().filter(|&&c| c != start) {
        match greedy_walk(view, &cities, candidate) {
            Ok(tour) => {
                if best.as_ref().is_none_or(|b| tour.cost < b.cost) {
                    best = Some(tour);
                }
            }
            Err(err) => {
                tracing::trace!(start = %candidate, error = %err, "start rejected");
            }
        }
    }

    match best {
        Some(tour) => Ok(tour),
        None => primary,
    }
}

/// Returns the total weight of the walk `nodes`, or `None` if some
/// consecutive pair is not an edge of the graph.
///
/// Walks of zero or one node cost `0`.
pub fn walk_cost<G>(view: &G, nodes: &[NodeId]) -> Option<Weight>
where
    G: GraphView + ?Sized,
{
    nodes
        .windows(2)
        .try_fold(0.0, |acc, pair| Some(acc + view.edge_weight(pair[0], pair[1])?))
}

/// One greedy nearest-unvisited walk from `start` over `cities`.
fn greedy_walk<G>(view: &G, cities: &BTreeSet<NodeId>, start: NodeId) -> Result<Tour, TspError>
where
    G: GraphView + ?Sized,
{
    let mut unvisited = cities.clone();
    unvisited.remove(&start);

    let mut nodes = vec![start];
    let mut cost: Weight = 0.0;
    let mut current = start;

    while !unvisited.is_empty() {
        let tree = dijkstra(view, current, None);

        // Ascending iteration plus a strict comparison keeps the smallest id
        // among equally near cities.
        let mut nearest: Option<(NodeId, Weight)> = None;
        for &city in &unvisited {
            let distance = tree.distance(city);
            if distance.is_finite() && nearest.is_none_or(|(_, d)| distance < d) {
                nearest = Some((city, distance));
            }
        }

        let Some((next, distance)) = nearest else {
            tracing::debug!(from = %current, remaining = unvisited.len(), "tour stuck");
            return Err(TspError::Unreachable {
                from: current,
                remaining: unvisited.into_iter().collect(),
            });
        };

        for &hop in tree.path_to(next).iter().skip(1) {
            unvisited.remove(&hop);
            nodes.push(hop);
        }
        cost += distance;
        current = next;
    }

    tracing::debug!(start = %start, len = nodes.len(), cost, "tour built");
    Ok(Tour { nodes, cost })
}
