//! Weighted directed graph generator.
//!
//! Produces [`GraphFile`] documents with ids `0..num_nodes`. With
//! `strongly_connected` set, a Hamiltonian ring `0 → 1 → … → n-1 → 0` is laid
//! down first so every query (center, tour) has an answer; random chords are
//! then added until each node has roughly `avg_out_degree` outgoing edges.

use std::collections::BTreeSet;

use digraph_core::{
    DiGraph, EdgeRecord, GraphError, GraphFile, NodeId, NodeRecord, Position, Weight, build_graph,
};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for the graph generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of nodes.
    pub num_nodes: usize,
    /// Target outgoing edges per node, ring edge included.
    pub avg_out_degree: usize,
    /// Smallest edge weight.
    pub min_weight: Weight,
    /// Largest edge weight.
    pub max_weight: Weight,
    /// Lay down a ring through every node first.
    pub strongly_connected: bool,
    /// Attach a random position to every node.
    pub with_positions: bool,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 50 nodes, ~150 edges
    Small,
    /// 500 nodes, ~2000 edges
    Medium,
    /// 2000 nodes, ~10000 edges
    Large,
    /// 10000 nodes, ~60000 edges
    XLarge,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (num_nodes, avg_out_degree) = match self {
            SizeTier::Small => (50, 3),
            SizeTier::Medium => (500, 4),
            SizeTier::Large => (2_000, 5),
            SizeTier::XLarge => (10_000, 6),
        };
        GeneratorConfig {
            seed,
            num_nodes,
            avg_out_degree,
            min_weight: 0.1,
            max_weight: 10.0,
            strongly_connected: true,
            with_positions: true,
        }
    }
}

/// Generates a graph document from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`. Weights are
/// rounded to two decimals so the JSON stays short.
pub fn generate_file(config: &GeneratorConfig) -> GraphFile {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let n = config.num_nodes;

    let nodes: Vec<NodeRecord> = (0..n)
        .map(|i| NodeRecord {
            pos: config.with_positions.then(|| random_position(&mut rng)),
            id: node_id(i),
        })
        .collect();

    let mut pairs: BTreeSet<(usize, usize)> = BTreeSet::new();
    if config.strongly_connected && n > 1 {
        for i in 0..n {
            pairs.insert((i, (i + 1) % n));
        }
    }

    // Chords never duplicate an existing pair and never loop on a node.
    if n > 1 {
        let target = n.saturating_mul(config.avg_out_degree);
        let max_edges = n * (n - 1);
        let mut attempts = 0usize;
        while pairs.len() < target.min(max_edges) && attempts < target.saturating_mul(4) {
            attempts += 1;
            let src = rng.gen_range(0..n);
            let dst = rng.gen_range(0..n);
            if src != dst {
                pairs.insert((src, dst));
            }
        }
    }

    let edges: Vec<EdgeRecord> = pairs
        .into_iter()
        .map(|(src, dst)| EdgeRecord {
            src: node_id(src),
            w: random_weight(&mut rng, config.min_weight, config.max_weight),
            dest: node_id(dst),
        })
        .collect();

    GraphFile { edges, nodes }
}

/// Generates a graph and builds it into a [`DiGraph`].
///
/// # Errors
///
/// Returns [`GraphError::InvalidWeight`] if the graph has any edge and the
/// configured weight range is negative or not finite.
pub fn generate_graph(config: &GeneratorConfig) -> Result<DiGraph, GraphError> {
    build_graph(&generate_file(config))
}

/// Generates a graph document and serializes it to JSON.
///
/// # Errors
///
/// Returns the `serde_json` error if serialization fails.
pub fn generate_json(config: &GeneratorConfig, pretty: bool) -> Result<String, serde_json::Error> {
    let file = generate_file(config);
    if pretty {
        serde_json::to_string_pretty(&file)
    } else {
        serde_json::to_string(&file)
    }
}

fn node_id(i: usize) -> NodeId {
    NodeId::new(i as u64)
}

/// Samples a weight in `[min, max]`, rounded to two decimals.
///
/// An invalid bound is returned unchanged instead of sampled, so the edge
/// carries it into [`build_graph`] and is rejected there.
fn random_weight(rng: &mut StdRng, min: Weight, max: Weight) -> Weight {
    if !min.is_finite() || min < 0.0 {
        return min;
    }
    if !max.is_finite() {
        return max;
    }
    let raw = if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    };
    (raw * 100.0).round() / 100.0
}

/// A coordinate in a one-degree box, two decimals per component.
fn random_position(rng: &mut StdRng) -> Position {
    let x: f64 = rng.gen_range(35.0..36.0);
    let y: f64 = rng.gen_range(32.0..33.0);
    Position::new((x * 100.0).round() / 100.0, (y * 100.0).round() / 100.0, 0.0)
}
