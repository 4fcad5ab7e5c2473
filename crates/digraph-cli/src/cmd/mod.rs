/// Command modules for the `digraph` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the loaded graph plus the parsed arguments and returns
/// `Ok(())` on success or a [`crate::error::CliError`] on failure.
pub mod center;
pub mod convert;
pub mod inspect;
pub mod path;
pub mod tsp;
