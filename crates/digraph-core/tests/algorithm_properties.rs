//! Property-based tests for the graph algorithms.
//!
//! Generates small random directed graphs (1-12 nodes, up to 40 edges with
//! integer weights so sums stay exact) and checks the distance, center and
//! tour guarantees against each other.
#![allow(clippy::expect_used)]

use std::collections::{BTreeMap, BTreeSet};

use digraph_core::{
    CenterError, DiGraph, GraphView, NodeId, eccentricities, graph_center,
    is_strongly_connected, parse_graph, shortest_path, single_source, to_json, tsp, walk_cost,
};
use proptest::prelude::*;

/// Strategy: a graph with ids `0..n` and deduplicated weighted edges.
///
/// Ids are spread out (`3 * i`) so nothing relies on ids being dense.
fn arb_graph() -> impl Strategy<Value = DiGraph> {
    (1usize..=12)
        .prop_flat_map(|n| {
            let edge = (0..n, 0..n, 0u32..20);
            (Just(n), prop::collection::vec(edge, 0..40))
        })
        .prop_map(|(n, raw_edges)| {
            let mut edges: BTreeMap<(usize, usize), u32> = BTreeMap::new();
            for (src, dst, w) in raw_edges {
                edges.entry((src, dst)).or_insert(w);
            }

            let id = |i: usize| NodeId::new(3 * i as u64);
            let mut g = DiGraph::with_capacity(n, edges.len());
            for i in 0..n {
                g.add_node(id(i), None).expect("fresh id");
            }
            for ((src, dst), w) in edges {
                g.add_edge(id(src), id(dst), f64::from(w))
                    .expect("deduplicated edge");
            }
            g
        })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every node reaches itself at distance 0 via the one-node path.
    #[test]
    fn self_distance_is_zero(g in arb_graph()) {
        for a in g.nodes() {
            let result = shortest_path(&g, a, a);
            prop_assert_eq!(result.distance, 0.0);
            prop_assert_eq!(result.path, vec![a]);
        }
    }

    /// Returned paths are real walks whose weight equals the distance.
    #[test]
    fn paths_are_consistent_with_distances(g in arb_graph()) {
        let nodes = g.nodes();
        for &a in &nodes {
            for &b in &nodes {
                let result = shortest_path(&g, a, b);
                if result.is_reachable() {
                    prop_assert_eq!(result.path.first().copied(), Some(a));
                    prop_assert_eq!(result.path.last().copied(), Some(b));
                    let cost = walk_cost(&g, &result.path);
                    prop_assert!(cost.is_some_and(|c| close(c, result.distance)));
                } else {
                    prop_assert!(result.path.is_empty());
                    prop_assert_eq!(result.distance, f64::INFINITY);
                }
            }
        }
    }

    /// d(a, c) <= d(a, b) + d(b, c) whenever the right-hand side is finite.
    #[test]
    fn triangle_inequality(g in arb_graph()) {
        let nodes = g.nodes();
        let trees: Vec<_> = nodes
            .iter()
            .map(|&a| single_source(&g, a).expect("node exists"))
            .collect();
        for (i, &a) in nodes.iter().enumerate() {
            for (j, &b) in nodes.iter().enumerate() {
                for &c in &nodes {
                    let via = trees[i].distance(b) + trees[j].distance(c);
                    if via.is_finite() {
                        prop_assert!(
                            trees[i].distance(c) <= via + 1e-9,
                            "d({}, {}) > d({}, {}) + d({}, {})", a, c, a, b, b, c
                        );
                    }
                }
            }
        }
    }

    /// The center exists exactly when the graph is strongly connected, and
    /// then it minimizes the eccentricity.
    #[test]
    fn center_matches_connectivity(g in arb_graph()) {
        match graph_center(&g) {
            Ok(center) => {
                prop_assert!(is_strongly_connected(&g));
                prop_assert!(g.contains_node(center.node));
                let ecc = eccentricities(&g).expect("connected");
                let min = ecc.values().copied().fold(f64::INFINITY, f64::min);
                prop_assert!(close(center.eccentricity, min));
                let first_min = ecc
                    .iter()
                    .find(|&(_, &e)| close(e, min))
                    .map(|(&id, _)| id);
                prop_assert_eq!(Some(center.node), first_min);
            }
            Err(CenterError::Disconnected { .. }) => {
                prop_assert!(!is_strongly_connected(&g));
            }
            Err(CenterError::EmptyGraph) => {
                prop_assert!(false, "generated graphs are never empty");
            }
        }
    }

    /// A successful tour covers every node along real edges; strongly
    /// connected graphs always get one.
    #[test]
    fn tour_is_valid_walk(g in arb_graph()) {
        match tsp(&g) {
            Ok(tour) => {
                let seen: BTreeSet<NodeId> = tour.nodes.iter().copied().collect();
                let all: BTreeSet<NodeId> = g.nodes().into_iter().collect();
                prop_assert_eq!(seen, all);
                prop_assert_eq!(tour.nodes.first().copied(), g.nodes().first().copied());
                let cost = walk_cost(&g, &tour.nodes);
                prop_assert!(cost.is_some_and(|c| close(c, tour.cost)));
            }
            Err(_) => {
                prop_assert!(!is_strongly_connected(&g));
            }
        }
    }

    /// Saving and reloading a graph preserves its nodes and edges.
    #[test]
    fn json_round_trip(g in arb_graph()) {
        let text = to_json(&g, false).expect("serializable");
        let back = parse_graph(&text).expect("own output parses");
        prop_assert_eq!(back.nodes(), g.nodes());
        prop_assert_eq!(back.edges(), g.edges());
    }
}
