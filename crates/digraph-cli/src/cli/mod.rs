//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use digraph_core::NodeId;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

impl std::fmt::Display for PathOrStdin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathOrStdin::Stdin => f.write_str("-"),
            PathOrStdin::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` prints plain aligned text; `Json` prints a single pretty-printed
/// JSON object per invocation.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default).
    Human,
    /// Structured JSON.
    Json,
}

/// All top-level subcommands exposed by the `digraph` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Find the cheapest directed path between two nodes.
    Path {
        /// Path to a graph JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Source node id.
        #[arg(value_name = "FROM")]
        from: NodeId,
        /// Target node id.
        #[arg(value_name = "TO")]
        to: NodeId,
    },

    /// Find the node whose farthest shortest-path distance is smallest.
    Center {
        /// Path to a graph JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Also list the eccentricity of every node.
        #[arg(long)]
        all: bool,
    },

    /// Build a walk visiting every node (or the given cities).
    Tsp {
        /// Path to a graph JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Node the walk starts from (default: smallest city id).
        #[arg(long, value_name = "NODE")]
        start: Option<NodeId>,
        /// Restrict the walk to these cities (repeatable; default: every node).
        #[arg(long = "city", value_name = "NODE")]
        cities: Vec<NodeId>,
        /// Try every city as the start and keep the cheapest walk.
        #[arg(long)]
        all_starts: bool,
    },

    /// Print summary statistics for a graph.
    Inspect {
        /// Path to a graph JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Re-serialize a graph file (nodes and edges sorted by id).
    Convert {
        /// Path to a graph JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Emit minified JSON instead of pretty-printed JSON.
        #[arg(long)]
        compact: bool,
        /// Write to this file instead of stdout.
        #[arg(long, short = 'o', value_name = "OUT")]
        output: Option<PathBuf>,
    },
}

impl Command {
    /// Returns the input file argument shared by every subcommand.
    pub fn input(&self) -> &PathOrStdin {
        match self {
            Command::Path { file, .. }
            | Command::Center { file, .. }
            | Command::Tsp { file, .. }
            | Command::Inspect { file }
            | Command::Convert { file, .. } => file,
        }
    }
}

/// Root CLI struct for the `digraph` binary.
///
/// All global flags are marked `global = true` so clap propagates them to
/// every subcommand.
#[derive(Parser)]
#[command(
    name = "digraph",
    version,
    about = "Directed weighted graph queries",
    long_about = "Shortest paths, graph center and heuristic tours over directed\n\
                  weighted graphs stored as JSON node/edge lists."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors to stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug detail to stderr: load timing, query outcomes
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Log filter, e.g. `debug` or `digraph_core=trace`.
    ///
    /// Overrides `--quiet` and `--verbose`. The `DIGRAPH_LOG` environment
    /// variable takes precedence over all three.
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `DIGRAPH_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "DIGRAPH_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,
}
