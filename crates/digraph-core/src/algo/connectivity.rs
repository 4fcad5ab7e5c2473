/// Breadth-first reachability and strong-connectivity checks.
///
/// These are unweighted traversals: they answer "can `a` reach `b`" without
/// computing distances, which makes them a cheap pre-check for the
/// O(V · E log V) eccentricity sweep in [`crate::algo::center`].
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use crate::algo::shortest_path::QueryError;
use crate::graph::GraphView;
use crate::newtypes::{NodeId, Weight};

/// Returns the set of all nodes reachable from `start` via outgoing edges.
///
/// The start node itself is excluded from the result.
///
/// # Errors
///
/// Returns [`QueryError::NodeNotFound`] if `start` does not exist.
pub fn reachable_from<G>(view: &G, start: NodeId) -> Result<BTreeSet<NodeId>, QueryError>
where
    G: GraphView + ?Sized,
{
    if !view.has_node(start) {
        return Err(QueryError::NodeNotFound(start));
    }

    let mut nbuf: Vec<(NodeId, Weight)> = Vec::new();
    let mut visited = bfs(start, |node, out| {
        view.neighbors_into(node, &mut nbuf);
        out.extend(nbuf.iter().map(|&(next, _)| next));
    });
    visited.remove(&start);

    Ok(visited.into_iter().collect())
}

/// Returns `true` if every node can reach every other node.
///
/// The empty graph and a single node are strongly connected.
pub fn is_strongly_connected<G>(view: &G) -> bool
where
    G: GraphView + ?Sized,
{
    unreachable_pair(view).is_none()
}

/// Returns a `(from, to)` pair such that `to` is unreachable from `from`, or
/// `None` if the graph is strongly connected.
///
/// Runs one forward BFS and one backward BFS (over the reversed adjacency)
/// from the smallest node id `r`. If `r` cannot reach some node, the pair is
/// `(r, smallest unreachable)`. Otherwise the pair is `(smallest node that
/// cannot reach r, r)`. Either way the reported `from` is the smallest node
/// that fails to reach the whole graph.
pub fn unreachable_pair<G>(view: &G) -> Option<(NodeId, NodeId)>
where
    G: GraphView + ?Sized,
{
    let nodes = view.nodes();
    let &root = nodes.first()?;

    let mut nbuf: Vec<(NodeId, Weight)> = Vec::new();
    let forward = bfs(root, |node, out| {
        view.neighbors_into(node, &mut nbuf);
        out.extend(nbuf.iter().map(|&(next, _)| next));
    });
    if let Some(&missing) = nodes.iter().find(|n| !forward.contains(n)) {
        tracing::debug!(from = %root, to = %missing, "forward reachability incomplete");
        return Some((root, missing));
    }

    let mut reverse: HashMap<NodeId, Vec<NodeId>> = HashMap::with_capacity(nodes.len());
    for &node in &nodes {
        view.neighbors_into(node, &mut nbuf);
        for &(next, _) in &nbuf {
            reverse.entry(next).or_default().push(node);
        }
    }
    let backward = bfs(root, |node, out| {
        if let Some(sources) = reverse.get(&node) {
            out.extend(sources.iter().copied());
        }
    });
    if let Some(&stranded) = nodes.iter().find(|n| !backward.contains(n)) {
        tracing::debug!(from = %stranded, to = %root, "backward reachability incomplete");
        return Some((stranded, root));
    }

    None
}

/// Plain BFS from `start`; `expand` appends the successors of a node to the
/// provided buffer. Returns every visited node, `start` included.
fn bfs<F>(start: NodeId, mut expand: F) -> HashSet<NodeId>
where
    F: FnMut(NodeId, &mut Vec<NodeId>),
{
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut successors: Vec<NodeId> = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        successors.clear();
        expand(current, &mut successors);
        for &next in &successors {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    visited
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
