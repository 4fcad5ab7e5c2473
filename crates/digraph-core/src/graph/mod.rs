/// Mutable directed weighted graph store backed by `petgraph`.
///
/// [`DiGraph`] wraps a `StableDiGraph` whose node weights carry the public
/// [`NodeId`] and optional [`Position`], and whose edge weights are the edge
/// costs. A `HashMap<NodeId, NodeIndex>` gives O(1) lookup from public ids to
/// petgraph indices; indices stay valid across removals because
/// `StableDiGraph` tombstones rather than compacts.
///
/// The store enforces the graph's structural invariants at the mutation
/// boundary: unique node ids, at most one edge per ordered pair, and finite
/// non-negative weights. Algorithms consume the store only through the
/// read-only [`GraphView`] trait.
pub mod view;

pub use view::GraphView;

use std::collections::{HashMap, HashSet};

use petgraph::Direction;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;

use crate::newtypes::{NodeId, Position, Weight};

#[cfg(test)]
mod tests;

// ---------------------------------------------------------------------------
// Weight types
// ---------------------------------------------------------------------------

/// Weight stored inline on each petgraph node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeWeight {
    /// Public identifier of the node.
    pub id: NodeId,
    /// Optional layout coordinate.
    pub pos: Option<Position>,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors returned by graph mutation and construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A node with this id already exists.
    #[error("duplicate node id: {0}")]
    DuplicateNode(NodeId),
    /// The referenced node does not exist.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
    /// An edge between this ordered pair already exists.
    #[error("duplicate edge: {src} -> {dst}")]
    DuplicateEdge {
        /// Tail of the edge.
        src: NodeId,
        /// Head of the edge.
        dst: NodeId,
    },
    /// No edge exists between this ordered pair.
    #[error("edge not found: {src} -> {dst}")]
    EdgeNotFound {
        /// Tail of the edge.
        src: NodeId,
        /// Head of the edge.
        dst: NodeId,
    },
    /// The weight is negative, infinite or NaN.
    #[error("invalid weight {weight} on edge {src} -> {dst}: weights must be finite and non-negative")]
    InvalidWeight {
        /// Tail of the edge.
        src: NodeId,
        /// Head of the edge.
        dst: NodeId,
        /// The rejected weight.
        weight: Weight,
    },
}

// ---------------------------------------------------------------------------
// DiGraph
// ---------------------------------------------------------------------------

/// A directed weighted graph keyed by [`NodeId`].
///
/// Every successful mutation bumps [`DiGraph::modification_count`], which
/// callers can use to detect that a cached query result is stale.
#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    graph: StableDiGraph<NodeWeight, Weight>,
    id_to_index: HashMap<NodeId, NodeIndex>,
    modifications: u64,
}

impl DiGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `nodes` nodes and `edges` edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: StableDiGraph::with_capacity(nodes, edges),
            id_to_index: HashMap::with_capacity(nodes),
            modifications: 0,
        }
    }

    /// Returns the number of nodes currently in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges currently in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the number of successful mutations applied so far.
    pub fn modification_count(&self) -> u64 {
        self.modifications
    }

    /// Returns `true` if a node with this id exists.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.id_to_index.contains_key(&id)
    }

    /// Returns the position of `id`, or `None` if the node is missing or has
    /// no position.
    pub fn position(&self, id: NodeId) -> Option<Position> {
        let idx = self.id_to_index.get(&id)?;
        self.graph.node_weight(*idx).and_then(|w| w.pos)
    }

    /// Inserts a node.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateNode`] if the id is already present.
    pub fn add_node(&mut self, id: NodeId, pos: Option<Position>) -> Result<(), GraphError> {
        if self.id_to_index.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        let idx = self.graph.add_node(NodeWeight { id, pos });
        self.id_to_index.insert(id, idx);
        self.modifications += 1;
        Ok(())
    }

    /// Removes a node together with every edge entering or leaving it.
    ///
    /// The modification count grows by one for the node plus one per removed
    /// edge.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if the id is absent.
    pub fn remove_node(&mut self, id: NodeId) -> Result<(), GraphError> {
        let idx = self
            .id_to_index
            .remove(&id)
            .ok_or(GraphError::NodeNotFound(id))?;

        // Self-loops show up in both directions; the set counts them once.
        let incident: HashSet<EdgeIndex> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .chain(self.graph.edges_directed(idx, Direction::Incoming))
            .map(|e| e.id())
            .collect();

        self.graph.remove_node(idx);
        self.modifications += 1 + incident.len() as u64;
        Ok(())
    }

    /// Inserts the directed edge `src -> dst` with the given weight.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidWeight`] if `weight` is negative, infinite or NaN.
    /// - [`GraphError::NodeNotFound`] if either endpoint is absent.
    /// - [`GraphError::DuplicateEdge`] if the edge already exists.
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId, weight: Weight) -> Result<(), GraphError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { src, dst, weight });
        }
        let (src_idx, dst_idx) = self.endpoints(src, dst)?;
        if self.graph.find_edge(src_idx, dst_idx).is_some() {
            return Err(GraphError::DuplicateEdge { src, dst });
        }
        self.graph.add_edge(src_idx, dst_idx, weight);
        self.modifications += 1;
        Ok(())
    }

    /// Removes the directed edge `src -> dst` and returns its weight.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NodeNotFound`] if either endpoint is absent.
    /// - [`GraphError::EdgeNotFound`] if the nodes exist but are not joined.
    pub fn remove_edge(&mut self, src: NodeId, dst: NodeId) -> Result<Weight, GraphError> {
        let (src_idx, dst_idx) = self.endpoints(src, dst)?;
        let weight = self
            .graph
            .find_edge(src_idx, dst_idx)
            .and_then(|edge| self.graph.remove_edge(edge))
            .ok_or(GraphError::EdgeNotFound { src, dst })?;
        self.modifications += 1;
        Ok(weight)
    }

    /// Returns the weight of `src -> dst`, if the edge exists.
    pub fn edge_weight(&self, src: NodeId, dst: NodeId) -> Option<Weight> {
        let (src_idx, dst_idx) = self.endpoints(src, dst).ok()?;
        let edge = self.graph.find_edge(src_idx, dst_idx)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Returns the outgoing `(destination, weight)` pairs of `id`, ordered by
    /// destination id. Empty for an unknown node.
    pub fn out_edges(&self, id: NodeId) -> Vec<(NodeId, Weight)> {
        self.incident(id, Direction::Outgoing)
    }

    /// Returns the incoming `(source, weight)` pairs of `id`, ordered by
    /// source id. Empty for an unknown node.
    pub fn in_edges(&self, id: NodeId) -> Vec<(NodeId, Weight)> {
        self.incident(id, Direction::Incoming)
    }

    /// Returns every edge as `(src, dst, weight)`, ordered by `(src, dst)`.
    pub fn edges(&self) -> Vec<(NodeId, NodeId, Weight)> {
        let mut edges: Vec<(NodeId, NodeId, Weight)> = self
            .graph
            .edge_indices()
            .filter_map(|e| {
                let (src_idx, dst_idx) = self.graph.edge_endpoints(e)?;
                let src = self.graph.node_weight(src_idx)?.id;
                let dst = self.graph.node_weight(dst_idx)?.id;
                Some((src, dst, *self.graph.edge_weight(e)?))
            })
            .collect();
        edges.sort_by_key(|&(src, dst, _)| (src, dst));
        edges
    }

    /// Resolves both endpoints of an edge to petgraph indices.
    fn endpoints(&self, src: NodeId, dst: NodeId) -> Result<(NodeIndex, NodeIndex), GraphError> {
        let src_idx = self
            .id_to_index
            .get(&src)
            .copied()
            .ok_or(GraphError::NodeNotFound(src))?;
        let dst_idx = self
            .id_to_index
            .get(&dst)
            .copied()
            .ok_or(GraphError::NodeNotFound(dst))?;
        Ok((src_idx, dst_idx))
    }

    fn incident(&self, id: NodeId, direction: Direction) -> Vec<(NodeId, Weight)> {
        let mut buf = Vec::new();
        self.incident_into(id, direction, &mut buf);
        buf
    }

    /// Fills `buf` with the far endpoint and weight of every edge incident to
    /// `id` in `direction`, sorted by far endpoint id.
    fn incident_into(&self, id: NodeId, direction: Direction, buf: &mut Vec<(NodeId, Weight)>) {
        buf.clear();
        let Some(&idx) = self.id_to_index.get(&id) else {
            return;
        };
        for edge_ref in self.graph.edges_directed(idx, direction) {
            let far = match direction {
                Direction::Outgoing => edge_ref.target(),
                Direction::Incoming => edge_ref.source(),
            };
            if let Some(weight) = self.graph.node_weight(far) {
                buf.push((weight.id, *edge_ref.weight()));
            }
        }
        buf.sort_by_key(|&(far, _)| far);
    }
}

impl GraphView for DiGraph {
    fn nodes(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.id_to_index.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    fn neighbors_into(&self, node: NodeId, buf: &mut Vec<(NodeId, Weight)>) {
        self.incident_into(node, Direction::Outgoing, buf);
    }

    fn has_node(&self, node: NodeId) -> bool {
        self.contains_node(node)
    }

    fn node_count(&self) -> usize {
        self.id_to_index.len()
    }

    fn edge_weight(&self, src: NodeId, dst: NodeId) -> Option<Weight> {
        DiGraph::edge_weight(self, src, dst)
    }
}
