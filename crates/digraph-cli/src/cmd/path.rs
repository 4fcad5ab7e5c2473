//! Implementation of `digraph path <file> <from> <to>`.
//!
//! Runs Dijkstra from `from` and prints the cheapest directed path to `to`.
//!
//! Output (human mode): the distance on one line, then the node ids
//! separated by ` -> `.
//! Output (JSON mode): `{"distance": D, "path": [...]}`.
//!
//! Exit codes: 0 = path found, 1 = unknown node or no path,
//! 2 = parse/build failure.
use digraph_core::{DiGraph, NodeId, PathResult, shortest_path};

use crate::OutputFormat;
use crate::error::CliError;
use crate::io::write_stdout;

/// Runs the `path` command.
///
/// # Errors
///
/// - [`CliError::NodeNotFound`] if either endpoint is not in the graph.
/// - [`CliError::NoPath`] if `to` is unreachable from `from`.
pub fn run(
    graph: &DiGraph,
    from: NodeId,
    to: NodeId,
    format: OutputFormat,
) -> Result<(), CliError> {
    // The core reports a missing endpoint as unreachable; the CLI tells the
    // two apart so the message names the bad id.
    for node_id in [from, to] {
        if !graph.contains_node(node_id) {
            return Err(CliError::NodeNotFound { node_id });
        }
    }

    let result = shortest_path(graph, from, to);
    if !result.is_reachable() {
        return Err(CliError::NoPath { from, to });
    }

    write_stdout(|out| match format {
        OutputFormat::Human => print_human(out, &result),
        OutputFormat::Json => print_json(out, &result),
    })
}

/// Writes the distance and the arrow-separated path.
fn print_human<W: std::io::Write>(w: &mut W, result: &PathResult) -> std::io::Result<()> {
    writeln!(w, "distance: {}", result.distance)?;
    writeln!(w, "path:     {}", join_arrow(&result.path))
}

/// Writes `{"distance": D, "path": [...]}`.
fn print_json<W: std::io::Write>(w: &mut W, result: &PathResult) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(result).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

/// Joins node ids with ` -> `.
pub(crate) fn join_arrow(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
