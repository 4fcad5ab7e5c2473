//! Implementation of `digraph tsp <file>`.
//!
//! Builds a greedy nearest-unvisited walk over every node, or over the
//! `--city` subset. Segments between cities are expanded into real edges,
//! so nodes may repeat.
//!
//! Flags:
//! - `--start <node>`: first node of the walk (default: smallest city id).
//! - `--city <node>` (repeatable): cities to visit (default: every node).
//! - `--all-starts`: retry from every city and keep the cheapest walk.
//!
//! Exit codes: 0 = walk found, 1 = unknown node or no walk covers every
//! city, 2 = parse/build failure.
use digraph_core::{DiGraph, Tour, TspConfig, tsp_with};

use crate::OutputFormat;
use crate::cmd::path::join_arrow;
use crate::error::CliError;
use crate::io::write_stdout;

/// Runs the `tsp` command.
///
/// # Errors
///
/// - [`CliError::NodeNotFound`] if a city or the start is not in the graph.
/// - [`CliError::NoTour`] if the start is not a city or the walk gets stuck.
pub fn run(graph: &DiGraph, config: &TspConfig, format: OutputFormat) -> Result<(), CliError> {
    let tour = tsp_with(graph, config)?;
    tracing::info!(len = tour.len(), cost = tour.cost, "tour built");

    write_stdout(|out| match format {
        OutputFormat::Human => print_human(out, &tour),
        OutputFormat::Json => print_json(out, &tour),
    })
}

fn print_human<W: std::io::Write>(w: &mut W, tour: &Tour) -> std::io::Result<()> {
    writeln!(w, "cost: {}", tour.cost)?;
    writeln!(w, "tour: {}", join_arrow(&tour.nodes))
}

/// Writes `{"nodes": [...], "cost": C}`.
fn print_json<W: std::io::Write>(w: &mut W, tour: &Tour) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(tour).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
