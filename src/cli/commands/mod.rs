//! Command implementations for the waypoint extractor CLI
//!
//! Each command is implemented in its own module:
//! - `extract`: table reading, waypoint assembly and JSON output
//! - `validate`: reprojection contract checks on a waypoint file

pub mod extract;
pub mod shared;
pub mod validate;

pub use shared::{ExtractSummary, RunSummary};

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner
///
/// Dispatches to the handler for the subcommand in `args`.
pub fn run(args: Args) -> Result<RunSummary> {
    match args.command {
        Some(Commands::Extract(extract_args)) => extract::run_extract(extract_args),
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args),
        None => Err(Error::configuration("No command given")),
    }
}
