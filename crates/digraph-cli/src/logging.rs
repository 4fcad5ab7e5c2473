/// Structured logging setup for the `digraph` binary.
///
/// Events from both the binary and `digraph-core` go to stderr through a
/// compact `tracing-subscriber` fmt layer, leaving stdout for command output.
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a filter directive that overrides the flags.
pub const LOG_ENV: &str = "DIGRAPH_LOG";

/// Returns the filter directive for the given CLI flags.
///
/// An explicit `log_level` wins; a bare level such as `trace` is scoped to
/// the two crates of this workspace, while a directive containing `=` is
/// used as-is. Otherwise `--verbose` selects `debug`, `--quiet` selects
/// `error`, and the default is `warn`.
pub fn directive(quiet: bool, verbose: bool, log_level: Option<&str>) -> String {
    let level = match (log_level, verbose, quiet) {
        (Some(level), _, _) if level.contains('=') => return level.to_owned(),
        (Some(level), _, _) => level,
        (None, true, _) => "debug",
        (None, false, true) => "error",
        (None, false, false) => "warn",
    };
    format!("digraph={level},digraph_core={level}")
}

/// Installs the global subscriber.
///
/// `DIGRAPH_LOG` takes precedence over the flags when it holds a valid
/// filter.
///
/// # Errors
///
/// Returns [`TryInitError`] if a global subscriber is already installed.
pub fn init(quiet: bool, verbose: bool, log_level: Option<&str>) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(directive(quiet, verbose, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()
}
