mod cli;
mod cmd;
mod error;
mod io;
mod logging;

use std::time::Instant;

use clap::Parser;
use digraph_core::{DiGraph, TspConfig, parse_graph};

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.log_level.as_deref()) {
        eprintln!("warning: logging disabled: {e}");
    }

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Loads the input graph and dispatches to the subcommand.
fn run(cli: &Cli) -> Result<(), CliError> {
    let graph = load(cli.command.input(), cli.max_file_size)?;
    let format = cli.format;

    match &cli.command {
        Command::Path { from, to, .. } => cmd::path::run(&graph, *from, *to, format),
        Command::Center { all, .. } => cmd::center::run(&graph, *all, format),
        Command::Tsp {
            start,
            cities,
            all_starts,
            ..
        } => {
            let config = TspConfig {
                start: *start,
                cities: (!cities.is_empty()).then(|| cities.clone()),
                try_all_starts: *all_starts,
            };
            cmd::tsp::run(&graph, &config, format)
        }
        Command::Inspect { .. } => cmd::inspect::run(&graph, format),
        Command::Convert {
            compact, output, ..
        } => cmd::convert::run(&graph, *compact, output.as_deref()),
    }
}

/// Reads and parses the graph document named by `source`.
fn load(source: &PathOrStdin, max_file_size: u64) -> Result<DiGraph, CliError> {
    let started = Instant::now();
    let content = io::read_input(source, max_file_size)?;
    let graph = parse_graph(&content)?;
    tracing::info!(
        source = %source,
        bytes = content.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        elapsed = ?started.elapsed(),
        "graph loaded"
    );
    Ok(graph)
}
