//! Implementation of `digraph center <file>`.
//!
//! Prints the node minimizing the maximum shortest-path distance to every
//! other node. With `--all`, the eccentricity of every node is listed too.
//!
//! Exit codes: 0 = center found, 1 = empty or not strongly connected graph,
//! 2 = parse/build failure.
use std::collections::BTreeMap;

use digraph_core::{Center, DiGraph, NodeId, Weight, center_of, eccentricities};

use crate::OutputFormat;
use crate::error::CliError;
use crate::io::write_stdout;

/// Runs the `center` command.
///
/// # Errors
///
/// [`CliError::NoCenter`] if the graph is empty or not strongly connected.
pub fn run(graph: &DiGraph, all: bool, format: OutputFormat) -> Result<(), CliError> {
    let ecc = eccentricities(graph)?;
    let center = center_of(&ecc).ok_or_else(|| CliError::NoCenter {
        detail: "graph has no nodes".to_owned(),
    })?;
    tracing::info!(node = %center.node, eccentricity = center.eccentricity, "center found");

    let listing = all.then_some(&ecc);

    write_stdout(|out| match format {
        OutputFormat::Human => print_human(out, &center, listing),
        OutputFormat::Json => print_json(out, &center, listing),
    })
}

fn print_human<W: std::io::Write>(
    w: &mut W,
    center: &Center,
    listing: Option<&BTreeMap<NodeId, Weight>>,
) -> std::io::Result<()> {
    writeln!(w, "center:       {}", center.node)?;
    writeln!(w, "eccentricity: {}", center.eccentricity)?;
    if let Some(ecc) = listing {
        writeln!(w, "eccentricities:")?;
        for (node, e) in ecc {
            writeln!(w, "  {node}: {e}")?;
        }
    }
    Ok(())
}

fn print_json<W: std::io::Write>(
    w: &mut W,
    center: &Center,
    listing: Option<&BTreeMap<NodeId, Weight>>,
) -> std::io::Result<()> {
    let mut obj = serde_json::Map::new();
    obj.insert(
        "center".to_owned(),
        serde_json::Value::Number(center.node.get().into()),
    );
    obj.insert(
        "eccentricity".to_owned(),
        serde_json::json!(center.eccentricity),
    );
    if let Some(ecc) = listing {
        let by_node: serde_json::Map<String, serde_json::Value> = ecc
            .iter()
            .map(|(node, e)| (node.to_string(), serde_json::json!(e)))
            .collect();
        obj.insert(
            "eccentricities".to_owned(),
            serde_json::Value::Object(by_node),
        );
    }

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
