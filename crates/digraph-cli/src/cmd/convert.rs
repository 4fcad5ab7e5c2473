//! Implementation of `digraph convert <file>`.
//!
//! Loads a graph and saves it back in canonical form: nodes by ascending id,
//! edges by ascending `(src, dest)`, unknown keys dropped. The output can be
//! written to stdout or to a file with `-o`.
//!
//! Flags:
//! - `--compact`: emit minified JSON instead of 2-space pretty printing.
//! - `-o, --output <path>`: write to a file instead of stdout.
//!
//! Exit codes: 0 = success, 2 = parse failure or unwritable output.
use std::path::Path;

use digraph_core::{DiGraph, to_json};

use crate::error::CliError;
use crate::io::write_output;

/// Runs the `convert` command.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if serialization or writing fails.
pub fn run(graph: &DiGraph, compact: bool, output: Option<&Path>) -> Result<(), CliError> {
    let text = to_json(graph, !compact).map_err(|e| CliError::IoError {
        source: "graph".to_owned(),
        detail: e.to_string(),
    })?;
    write_output(output, &text)?;
    if let Some(path) = output {
        tracing::info!(path = %path.display(), bytes = text.len(), "graph written");
    }
    Ok(())
}
