/// Graph center: the node whose farthest shortest-path distance is smallest.
///
/// The eccentricity of a node is the maximum shortest-path distance from it
/// to any other node. The center only exists when the graph is strongly
/// connected; otherwise some eccentricity is infinite and the query fails
/// with [`CenterError::Disconnected`] instead of returning an arbitrary id.
///
/// Cost is one full [`single_source`](crate::algo::single_source) run per
/// node, O(V · E log V) in total, with no reuse between sources. A BFS
/// strong-connectivity check runs first so disconnected graphs fail before
/// the sweep.
use std::collections::BTreeMap;

use serde::Serialize;

use crate::algo::connectivity::unreachable_pair;
use crate::algo::shortest_path::dijkstra;
use crate::graph::GraphView;
use crate::newtypes::{NodeId, Weight};


/// The center node together with its eccentricity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Center {
    /// Node minimizing the eccentricity (smallest id among ties).
    pub node: NodeId,
    /// Maximum shortest-path distance from `node` to any other node.
    pub eccentricity: Weight,
}

/// Reasons a graph has no center.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CenterError {
    /// The graph has no nodes.
    #[error("graph has no nodes")]
    EmptyGraph,
    /// Some node cannot reach another, so the graph is not strongly connected.
    #[error("graph is not strongly connected: {to} is unreachable from {from}")]
    Disconnected {
        /// A node that cannot reach the whole graph.
        from: NodeId,
        /// A node `from` cannot reach.
        to: NodeId,
    },
}

/// Returns the id of the graph center.
///
/// # Errors
///
/// - [`CenterError::EmptyGraph`] if the graph has no nodes.
/// - [`CenterError::Disconnected`] if the graph is not strongly connected.
pub fn center<G>(view: &G) -> Result<NodeId, CenterError>
where
    G: GraphView + ?Sized,
{
    graph_center(view).map(|c| c.node)
}

/// Returns the graph center and its eccentricity.
///
/// Ties on eccentricity go to the smallest [`NodeId`].
///
/// # Errors
///
/// Same as [`center`].
#[tracing::instrument(level = "debug", skip_all)]
pub fn graph_center<G>(view: &G) -> Result<Center, CenterError>
where
    G: GraphView + ?Sized,
{
    let eccentricities = eccentricities(view)?;
    let center = center_of(&eccentricities).ok_or(CenterError::EmptyGraph)?;
    tracing::debug!(node = %center.node, eccentricity = center.eccentricity, "graph center");
    Ok(center)
}

/// Picks the center from precomputed eccentricities: smallest eccentricity,
/// smallest id among ties. `None` for an empty map.
pub fn center_of(eccentricities: &BTreeMap<NodeId, Weight>) -> Option<Center> {
    let mut best: Option<Center> = None;
    // BTreeMap iterates ascending, so a strict comparison keeps the smallest
    // id on ties.
    for (&node, &eccentricity) in eccentricities {
        if best.is_none_or(|b| eccentricity < b.eccentricity) {
            best = Some(Center { node, eccentricity });
        }
    }
    best
}

/// Returns the eccentricity of every node, keyed by id.
///
/// A single-node graph has eccentricity `0` for its only node.
///
/// # Errors
///
/// Same as [`center`].
pub fn eccentricities<G>(view: &G) -> Result<BTreeMap<NodeId, Weight>, CenterError>
where
    G: GraphView + ?Sized,
{
    let nodes = view.nodes();
    if nodes.is_empty() {
        return Err(CenterError::EmptyGraph);
    }
    if let Some((from, to)) = unreachable_pair(view) {
        return Err(CenterError::Disconnected { from, to });
    }

    let mut result: BTreeMap<NodeId, Weight> = BTreeMap::new();
    for &node in &nodes {
        let tree = dijkstra(view, node, None);

        let mut eccentricity: Weight = 0.0;
        for &other in &nodes {
            if other == node {
                continue;
            }
            let distance = tree.distance(other);
            if !distance.is_finite() {
                return Err(CenterError::Disconnected {
                    from: node,
                    to: other,
                });
            }
            eccentricity = eccentricity.max(distance);
        }

        tracing::trace!(node = %node, eccentricity, "eccentricity");
        result.insert(node, eccentricity);
    }

    Ok(result)
}
