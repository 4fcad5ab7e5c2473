/// Read-only capability set consumed by the graph algorithms.
///
/// Every algorithm in [`crate::algo`] is generic over [`GraphView`] rather
/// than taking the mutable [`crate::DiGraph`] store. A caller holding a
/// `&impl GraphView` cannot mutate the graph for the duration of the borrow,
/// so a query always sees one consistent snapshot.
use crate::newtypes::{NodeId, Weight};

/// Narrow read-only interface over a directed weighted graph.
///
/// Implementors must return nodes in ascending id order and must report the
/// same neighbour order for the same node on every call; the algorithms'
/// deterministic tie-breaking depends on it.
pub trait GraphView {
    /// Returns every node id, in ascending order.
    fn nodes(&self) -> Vec<NodeId>;

    /// Fills `buf` with the outgoing `(destination, weight)` pairs of `node`.
    ///
    /// The buffer is cleared first so callers can reuse one allocation across
    /// a whole traversal. An unknown `node` leaves the buffer empty.
    fn neighbors_into(&self, node: NodeId, buf: &mut Vec<(NodeId, Weight)>);

    /// Returns `true` if `node` exists in the graph.
    fn has_node(&self, node: NodeId) -> bool;

    /// Returns the outgoing `(destination, weight)` pairs of `node`.
    fn neighbors(&self, node: NodeId) -> Vec<(NodeId, Weight)> {
        let mut buf = Vec::new();
        self.neighbors_into(node, &mut buf);
        buf
    }

    /// Returns the number of nodes.
    fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Returns the weight of the edge `src -> dst`, if present.
    fn edge_weight(&self, src: NodeId, dst: NodeId) -> Option<Weight> {
        self.neighbors(src)
            .into_iter()
            .find(|&(target, _)| target == dst)
            .map(|(_, weight)| weight)
    }
}
