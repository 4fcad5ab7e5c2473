/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `digraph` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The input could not be read, parsed or
///   turned into a valid graph, so no query ran.
/// - Exit code **1**: logical failure. The graph loaded but the query has no
///   answer (no path, no center, no tour, unknown node).
use std::fmt;
use std::path::PathBuf;

use digraph_core::{CenterError, LoadError, NodeId, TspError};

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `digraph` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with each
/// variant. [`CliError::message`] returns the human-readable error string
/// that should be printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read or write a file.
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// The file or stream involved.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a well-formed graph document.
    ParseFailed {
        /// Parser message including line and column.
        detail: String,
    },

    /// The document is well-formed but describes an invalid graph
    /// (duplicate node, dangling edge, negative weight, ...).
    GraphBuildError {
        /// Description of the structural problem.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// A node id given on the command line is not in the graph.
    NodeNotFound {
        /// The missing id.
        node_id: NodeId,
    },

    /// The target is unreachable from the source.
    NoPath {
        /// Source node.
        from: NodeId,
        /// Target node.
        to: NodeId,
    },

    /// The graph has no center (empty or not strongly connected).
    NoCenter {
        /// Why the center does not exist.
        detail: String,
    },

    /// No walk covers every requested city.
    NoTour {
        /// Why the walk failed.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2`: input failure (file not found, parse error, invalid graph).
    /// - `1`: logical failure (no path, no center, no tour, unknown node).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::GraphBuildError { .. } => 2,

            Self::NodeNotFound { .. }
            | Self::NoPath { .. }
            | Self::NoCenter { .. }
            | Self::NoTour { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::ParseFailed { detail } => {
                format!("error: failed to parse graph: {detail}")
            }
            Self::GraphBuildError { detail } => {
                format!("error: invalid graph: {detail}")
            }
            Self::NodeNotFound { node_id } => {
                format!("error: node not found: {node_id}")
            }
            Self::NoPath { from, to } => {
                format!("error: no path from {from} to {to}")
            }
            Self::NoCenter { detail } => {
                format!("error: graph has no center: {detail}")
            }
            Self::NoTour { detail } => {
                format!("error: no tour: {detail}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Conversions from core errors
// ---------------------------------------------------------------------------

impl From<LoadError> for CliError {
    fn from(e: LoadError) -> Self {
        match e {
            LoadError::Json(e) => Self::ParseFailed {
                detail: format!("line {}, column {}: {e}", e.line(), e.column()),
            },
            LoadError::Graph(e) => Self::GraphBuildError {
                detail: e.to_string(),
            },
        }
    }
}

impl From<CenterError> for CliError {
    fn from(e: CenterError) -> Self {
        Self::NoCenter {
            detail: e.to_string(),
        }
    }
}

impl From<TspError> for CliError {
    fn from(e: TspError) -> Self {
        match e {
            TspError::NodeNotFound(node_id) => Self::NodeNotFound { node_id },
            TspError::InvalidStart(_) | TspError::Unreachable { .. } => Self::NoTour {
                detail: e.to_string(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
