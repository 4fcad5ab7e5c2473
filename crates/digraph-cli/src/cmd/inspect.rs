//! Implementation of `digraph inspect <file>`.
//!
//! Prints summary statistics for a graph:
//! - node count, and how many nodes carry a position
//! - edge count, self-loops, and the weight range and total
//! - source nodes (no incoming edge) and sink nodes (no outgoing edge)
//! - whether the graph is strongly connected, i.e. whether `center` can
//!   succeed
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//! In human mode, aligned key/value lines are printed.
//!
//! Exit codes: 0 = success, 2 = parse failure.
use digraph_core::{DiGraph, GraphView, Weight, is_strongly_connected};

use crate::OutputFormat;
use crate::error::CliError;
use crate::io::write_stdout;

/// Statistics gathered from a loaded [`DiGraph`].
#[derive(Debug, PartialEq)]
pub struct InspectStats {
    /// Total number of nodes.
    pub node_count: usize,
    /// Nodes that carry a position.
    pub positioned_nodes: usize,
    /// Total number of edges.
    pub edge_count: usize,
    /// Edges whose source equals their destination.
    pub self_loops: usize,
    /// Smallest edge weight, `None` without edges.
    pub min_weight: Option<Weight>,
    /// Largest edge weight, `None` without edges.
    pub max_weight: Option<Weight>,
    /// Sum of all edge weights.
    pub total_weight: Weight,
    /// Nodes with no incoming edge.
    pub sources: usize,
    /// Nodes with no outgoing edge.
    pub sinks: usize,
    /// Every node reaches every other node.
    pub strongly_connected: bool,
}

impl InspectStats {
    /// Computes statistics from a loaded graph.
    pub fn from_graph(graph: &DiGraph) -> Self {
        let nodes = graph.nodes();
        let edges = graph.edges();

        let positioned_nodes = nodes
            .iter()
            .filter(|&&id| graph.position(id).is_some())
            .count();
        let sources = nodes
            .iter()
            .filter(|&&id| graph.in_edges(id).is_empty())
            .count();
        let sinks = nodes
            .iter()
            .filter(|&&id| graph.out_edges(id).is_empty())
            .count();

        let self_loops = edges.iter().filter(|(src, dst, _)| src == dst).count();
        let weights = edges.iter().map(|&(_, _, w)| w);
        let min_weight = weights.clone().reduce(Weight::min);
        let max_weight = weights.clone().reduce(Weight::max);
        let total_weight: Weight = weights.sum();

        Self {
            node_count: nodes.len(),
            positioned_nodes,
            edge_count: edges.len(),
            self_loops,
            min_weight,
            max_weight,
            total_weight,
            sources,
            sinks,
            strongly_connected: is_strongly_connected(graph),
        }
    }
}

/// Runs the `inspect` command.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if stdout cannot be written.
pub fn run(graph: &DiGraph, format: OutputFormat) -> Result<(), CliError> {
    let stats = InspectStats::from_graph(graph);

    write_stdout(|out| match format {
        OutputFormat::Human => print_human(out, &stats),
        OutputFormat::Json => print_json(out, &stats),
    })
}

/// Writes inspect statistics in human-readable aligned format.
fn print_human<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    writeln!(w, "nodes:              {}", stats.node_count)?;
    writeln!(w, "  positioned:       {}", stats.positioned_nodes)?;
    writeln!(w, "  sources:          {}", stats.sources)?;
    writeln!(w, "  sinks:            {}", stats.sinks)?;
    writeln!(w, "edges:              {}", stats.edge_count)?;
    writeln!(w, "  self_loops:       {}", stats.self_loops)?;
    if let (Some(min), Some(max)) = (stats.min_weight, stats.max_weight) {
        writeln!(w, "  weight_range:     {min} .. {max}")?;
    }
    writeln!(w, "  total_weight:     {}", stats.total_weight)?;
    writeln!(w, "strongly_connected: {}", stats.strongly_connected)
}

/// Writes inspect statistics as a single JSON object.
fn print_json<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    let mut obj = serde_json::Map::new();

    obj.insert(
        "node_count".to_owned(),
        serde_json::Value::Number(stats.node_count.into()),
    );
    obj.insert(
        "positioned_nodes".to_owned(),
        serde_json::Value::Number(stats.positioned_nodes.into()),
    );
    obj.insert(
        "sources".to_owned(),
        serde_json::Value::Number(stats.sources.into()),
    );
    obj.insert(
        "sinks".to_owned(),
        serde_json::Value::Number(stats.sinks.into()),
    );
    obj.insert(
        "edge_count".to_owned(),
        serde_json::Value::Number(stats.edge_count.into()),
    );
    obj.insert(
        "self_loops".to_owned(),
        serde_json::Value::Number(stats.self_loops.into()),
    );
    obj.insert("min_weight".to_owned(), serde_json::json!(stats.min_weight));
    obj.insert("max_weight".to_owned(), serde_json::json!(stats.max_weight));
    obj.insert(
        "total_weight".to_owned(),
        serde_json::json!(stats.total_weight),
    );
    obj.insert(
        "strongly_connected".to_owned(),
        serde_json::Value::Bool(stats.strongly_connected),
    );

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
