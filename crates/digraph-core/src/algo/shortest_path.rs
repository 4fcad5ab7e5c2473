/// Single-source shortest paths with Dijkstra's algorithm.
///
/// The priority queue is a [`BinaryHeap`] with lazy deletion: a node is pushed
/// again every time its tentative distance strictly improves, each entry
/// carries the distance it was pushed with, and entries that no longer match
/// the best known distance are skipped when popped. No decrease-key support
/// is needed.
///
/// # Determinism
///
/// Entries with equal distance pop in ascending [`NodeId`] order, neighbours
/// are relaxed in the order the [`GraphView`] reports them, and a predecessor
/// is only replaced on strict improvement. For a fixed graph every query
/// returns the same path.
///
/// # Weights
///
/// Weights must be non-negative. [`crate::DiGraph`] guarantees this; results
/// over a foreign view with negative weights are unspecified.
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use crate::graph::GraphView;
use crate::newtypes::{NodeId, Weight};


/// Errors that can occur during graph queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A node id supplied to a query does not exist in the graph.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
}

// ---------------------------------------------------------------------------
// PathResult
// ---------------------------------------------------------------------------

/// Outcome of a two-node shortest-path query.
///
/// An unreachable destination (or a missing endpoint) is reported as
/// `distance == f64::INFINITY` with an empty `path`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Total weight of `path`, or `+inf` when no path exists.
    pub distance: Weight,
    /// Nodes from source to destination inclusive; empty when unreachable.
    pub path: Vec<NodeId>,
}

impl PathResult {
    /// The `(+inf, [])` result.
    pub fn unreachable() -> Self {
        Self {
            distance: f64::INFINITY,
            path: Vec::new(),
        }
    }

    /// Returns `true` if a path was found.
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Heap entry
// ---------------------------------------------------------------------------

/// A queued `(distance, node)` pair.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    distance: Weight,
    node: NodeId,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; both keys are reversed so the smallest
        // distance pops first, then the smallest id.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

// ---------------------------------------------------------------------------
// ShortestPathTree
// ---------------------------------------------------------------------------

/// Distances and predecessor links from one source to every reachable node.
///
/// Produced by [`single_source`]. Nodes absent from the tree are unreachable
/// from the source.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeId,
    dist: HashMap<NodeId, Weight>,
    prev: HashMap<NodeId, NodeId>,
}

impl ShortestPathTree {
    /// Returns the node the tree was grown from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the shortest distance to `node`, or `+inf` if unreachable.
    pub fn distance(&self, node: NodeId) -> Weight {
        self.dist.get(&node).copied().unwrap_or(f64::INFINITY)
    }

    /// Returns `true` if `node` is reachable from the source.
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.dist.contains_key(&node)
    }

    /// Returns the number of reachable nodes, the source included.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    /// Returns `true` if the tree holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Returns every reachable node with its distance, in ascending id order.
    pub fn reachable(&self) -> Vec<(NodeId, Weight)> {
        let mut out: Vec<(NodeId, Weight)> = self.dist.iter().map(|(&n, &d)| (n, d)).collect();
        out.sort_unstable_by_key(|&(n, _)| n);
        out
    }

    /// Returns the path from the source to `target`, both inclusive.
    ///
    /// Walks the predecessor links backwards from `target` and reverses.
    /// Returns an empty vector if `target` is unreachable.
    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        if !self.dist.contains_key(&target) {
            return Vec::new();
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            match self.prev.get(&current) {
                Some(&prev) => {
                    path.push(prev);
                    current = prev;
                }
                None => return Vec::new(),
            }
            // A chain longer than the tree means the links loop, which only
            // a negative-weight view can produce.
            if path.len() > self.dist.len() {
                return Vec::new();
            }
        }
        path.reverse();
        path
    }

    /// Returns the [`PathResult`] for `target`.
    pub fn path_result(&self, target: NodeId) -> PathResult {
        let path = self.path_to(target);
        if path.is_empty() {
            return PathResult::unreachable();
        }
        PathResult {
            distance: self.distance(target),
            path,
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Returns the shortest path from `src` to `dst` and its total weight.
///
/// - `src == dst` (and present) yields `(0, [src])`.
/// - A missing endpoint or an unreachable `dst` yields `(+inf, [])`.
///
/// The search stops as soon as `dst` is finalized.
#[tracing::instrument(level = "debug", skip_all, fields(src = %src, dst = %dst))]
pub fn shortest_path<G>(view: &G, src: NodeId, dst: NodeId) -> PathResult
where
    G: GraphView + ?Sized,
{
    for id in [src, dst] {
        if !view.has_node(id) {
            tracing::debug!(node = %id, "endpoint not in graph");
            return PathResult::unreachable();
        }
    }

    if src == dst {
        return PathResult {
            distance: 0.0,
            path: vec![src],
        };
    }

    let result = dijkstra(view, src, Some(dst)).path_result(dst);
    tracing::debug!(
        distance = result.distance,
        hops = result.path.len().saturating_sub(1),
        "shortest path"
    );
    result
}

/// Runs Dijkstra from `src` to every reachable node.
///
/// # Errors
///
/// Returns [`QueryError::NodeNotFound`] if `src` does not exist.
pub fn single_source<G>(view: &G, src: NodeId) -> Result<ShortestPathTree, QueryError>
where
    G: GraphView + ?Sized,
{
    if !view.has_node(src) {
        return Err(QueryError::NodeNotFound(src));
    }
    Ok(dijkstra(view, src, None))
}

/// Dijkstra core shared by the public queries.
///
/// With `target` set the loop exits once that node is popped; the returned
/// tree is then exact for `target` and every node finalized before it, and
/// holds tentative distances for the rest.
pub(crate) fn dijkstra<G>(view: &G, source: NodeId, target: Option<NodeId>) -> ShortestPathTree
where
    G: GraphView + ?Sized,
{
    let mut dist: HashMap<NodeId, Weight> = HashMap::new();
    let mut prev: HashMap<NodeId, NodeId> = HashMap::new();
    let mut heap: BinaryHeap<HeapEntry> = BinaryHeap::new();
    let mut nbuf: Vec<(NodeId, Weight)> = Vec::new();

    dist.insert(source, 0.0);
    heap.push(HeapEntry {
        distance: 0.0,
        node: source,
    });

    while let Some(HeapEntry { distance, node }) = heap.pop() {
        if dist.get(&node).is_some_and(|&best| distance > best) {
            continue;
        }
        if target == Some(node) {
            break;
        }

        view.neighbors_into(node, &mut nbuf);
        for &(next, weight) in &nbuf {
            let candidate = distance + weight;
            if dist.get(&next).is_none_or(|&best| candidate < best) {
                dist.insert(next, candidate);
                prev.insert(next, node);
                heap.push(HeapEntry {
                    distance: candidate,
                    node: next,
                });
            }
        }
    }

    ShortestPathTree { source, dist, prev }
}
