#![allow(clippy::expect_used)]

use super::*;

fn n(id: u64) -> NodeId {
    NodeId::new(id)
}

/// Builds a graph with nodes `0..count` and no edges.
fn with_nodes(count: u64) -> DiGraph {
    let mut g = DiGraph::new();
    for id in 0..count {
        g.add_node(n(id), None).expect("fresh id");
    }
    g
}

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

#[test]
fn empty_graph_has_no_nodes() {
    let g = DiGraph::new();
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert!(g.nodes().is_empty());
    assert_eq!(g.modification_count(), 0);
}

#[test]
fn add_node_accepts_zero_id() {
    let mut g = DiGraph::new();
    g.add_node(n(0), None).expect("0 is a valid id");
    assert!(g.has_node(n(0)));
    assert_eq!(g.node_count(), 1);
}

#[test]
fn add_node_rejects_duplicate() {
    let mut g = with_nodes(1);
    let err = g.add_node(n(0), None).expect_err("duplicate");
    assert_eq!(err, GraphError::DuplicateNode(n(0)));
    assert_eq!(g.node_count(), 1);
}

#[test]
fn nodes_are_returned_in_ascending_order() {
    let mut g = DiGraph::new();
    for id in [9, 3, 0, 7] {
        g.add_node(n(id), None).expect("fresh id");
    }
    assert_eq!(g.nodes(), vec![n(0), n(3), n(7), n(9)]);
}

#[test]
fn position_is_kept_on_the_node() {
    let mut g = DiGraph::new();
    g.add_node(n(1), Some(Position::new(1.0, 2.0, 0.0)))
        .expect("fresh id");
    g.add_node(n(2), None).expect("fresh id");
    assert_eq!(g.position(n(1)), Some(Position::new(1.0, 2.0, 0.0)));
    assert_eq!(g.position(n(2)), None);
    assert_eq!(g.position(n(3)), None);
}

// ---------------------------------------------------------------------------
// Edges
// ---------------------------------------------------------------------------

#[test]
fn add_edge_is_directed() {
    let mut g = with_nodes(2);
    g.add_edge(n(0), n(1), 2.5).expect("valid edge");
    assert_eq!(g.edge_weight(n(0), n(1)), Some(2.5));
    assert_eq!(g.edge_weight(n(1), n(0)), None);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn add_edge_rejects_duplicate_pair() {
    let mut g = with_nodes(2);
    g.add_edge(n(0), n(1), 1.0).expect("valid edge");
    let err = g.add_edge(n(0), n(1), 3.0).expect_err("duplicate");
    assert_eq!(err, GraphError::DuplicateEdge { src: n(0), dst: n(1) });
    assert_eq!(g.edge_weight(n(0), n(1)), Some(1.0));
}

#[test]
fn add_edge_allows_reverse_pair() {
    let mut g = with_nodes(2);
    g.add_edge(n(0), n(1), 1.0).expect("forward");
    g.add_edge(n(1), n(0), 4.0).expect("reverse is a distinct edge");
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn add_edge_rejects_missing_endpoint() {
    let mut g = with_nodes(1);
    let err = g.add_edge(n(0), n(5), 1.0).expect_err("missing dst");
    assert_eq!(err, GraphError::NodeNotFound(n(5)));
    let err = g.add_edge(n(5), n(0), 1.0).expect_err("missing src");
    assert_eq!(err, GraphError::NodeNotFound(n(5)));
}

#[test]
fn add_edge_rejects_invalid_weights() {
    let mut g = with_nodes(2);
    for weight in [-1.0, f64::INFINITY, f64::NAN] {
        let err = g.add_edge(n(0), n(1), weight).expect_err("invalid weight");
        assert!(matches!(err, GraphError::InvalidWeight { .. }), "{err:?}");
    }
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn add_edge_accepts_zero_weight_and_self_loop() {
    let mut g = with_nodes(1);
    g.add_edge(n(0), n(0), 0.0).expect("self-loop");
    assert_eq!(g.edge_weight(n(0), n(0)), Some(0.0));
}

#[test]
fn remove_edge_returns_weight() {
    let mut g = with_nodes(2);
    g.add_edge(n(0), n(1), 7.0).expect("valid edge");
    assert_eq!(g.remove_edge(n(0), n(1)).expect("exists"), 7.0);
    assert_eq!(g.edge_count(), 0);
    let err = g.remove_edge(n(0), n(1)).expect_err("already removed");
    assert_eq!(err, GraphError::EdgeNotFound { src: n(0), dst: n(1) });
}

#[test]
fn remove_edge_missing_node_is_node_not_found() {
    let mut g = with_nodes(1);
    let err = g.remove_edge(n(0), n(9)).expect_err("missing node");
    assert_eq!(err, GraphError::NodeNotFound(n(9)));
}

#[test]
fn out_and_in_edges_are_sorted() {
    let mut g = with_nodes(4);
    g.add_edge(n(0), n(3), 3.0).expect("edge");
    g.add_edge(n(0), n(1), 1.0).expect("edge");
    g.add_edge(n(2), n(1), 2.0).expect("edge");
    g.add_edge(n(0), n(2), 2.0).expect("edge");

    assert_eq!(
        g.out_edges(n(0)),
        vec![(n(1), 1.0), (n(2), 2.0), (n(3), 3.0)]
    );
    assert_eq!(g.in_edges(n(1)), vec![(n(0), 1.0), (n(2), 2.0)]);
    assert!(g.out_edges(n(9)).is_empty());
}

#[test]
fn neighbors_match_out_edges() {
    let mut g = with_nodes(3);
    g.add_edge(n(0), n(2), 5.0).expect("edge");
    g.add_edge(n(0), n(1), 4.0).expect("edge");
    assert_eq!(g.neighbors(n(0)), g.out_edges(n(0)));
}

#[test]
fn neighbors_into_clears_buffer() {
    let mut g = with_nodes(2);
    g.add_edge(n(0), n(1), 1.0).expect("edge");
    let mut buf = vec![(n(42), 9.0)];
    g.neighbors_into(n(1), &mut buf);
    assert!(buf.is_empty());
    g.neighbors_into(n(0), &mut buf);
    assert_eq!(buf, vec![(n(1), 1.0)]);
}

#[test]
fn edges_lists_all_edges_sorted() {
    let mut g = with_nodes(3);
    g.add_edge(n(2), n(0), 1.0).expect("edge");
    g.add_edge(n(0), n(2), 2.0).expect("edge");
    g.add_edge(n(0), n(1), 3.0).expect("edge");
    assert_eq!(
        g.edges(),
        vec![(n(0), n(1), 3.0), (n(0), n(2), 2.0), (n(2), n(0), 1.0)]
    );
}

// ---------------------------------------------------------------------------
// Node removal
// ---------------------------------------------------------------------------

#[test]
fn remove_node_drops_incident_edges() {
    let mut g = with_nodes(3);
    g.add_edge(n(0), n(1), 1.0).expect("edge");
    g.add_edge(n(1), n(2), 1.0).expect("edge");
    g.add_edge(n(2), n(0), 1.0).expect("edge");

    g.remove_node(n(1)).expect("exists");

    assert!(!g.has_node(n(1)));
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edges(), vec![(n(2), n(0), 1.0)]);
    assert!(g.out_edges(n(0)).is_empty());
}

#[test]
fn remove_node_missing_is_error() {
    let mut g = with_nodes(1);
    assert_eq!(
        g.remove_node(n(3)).expect_err("missing"),
        GraphError::NodeNotFound(n(3))
    );
}

#[test]
fn removed_id_can_be_reused() {
    let mut g = with_nodes(2);
    g.add_edge(n(0), n(1), 1.0).expect("edge");
    g.remove_node(n(1)).expect("exists");
    g.add_node(n(1), None).expect("id is free again");
    assert!(g.out_edges(n(0)).is_empty());
    g.add_edge(n(0), n(1), 2.0).expect("edge to the new node");
    assert_eq!(g.edge_weight(n(0), n(1)), Some(2.0));
}

// ---------------------------------------------------------------------------
// Modification count
// ---------------------------------------------------------------------------

#[test]
fn modification_count_tracks_successful_mutations() {
    let mut g = with_nodes(3);
    assert_eq!(g.modification_count(), 3);

    g.add_edge(n(0), n(1), 1.0).expect("edge");
    g.add_edge(n(1), n(1), 1.0).expect("self-loop");
    g.add_edge(n(2), n(1), 1.0).expect("edge");
    assert_eq!(g.modification_count(), 6);

    // Failed mutations leave the counter alone.
    assert!(g.add_node(n(0), None).is_err());
    assert!(g.add_edge(n(0), n(1), 1.0).is_err());
    assert_eq!(g.modification_count(), 6);

    // Node 1 plus its three incident edges (the self-loop counted once).
    g.remove_node(n(1)).expect("exists");
    assert_eq!(g.modification_count(), 10);
}
