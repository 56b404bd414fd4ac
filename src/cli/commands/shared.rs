//! Shared components for CLI commands
//!
//! This module contains the summary types and logging setup used by every
//! command implementation.

use crate::app::services::record_assembler::AssemblyStats;
use crate::app::services::table_reader::TableReadStats;
use crate::app::services::waypoint_writer::ContractReport;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Outcome of a command run, returned to `main`
#[derive(Debug, Clone)]
pub enum RunSummary {
    Extract(ExtractSummary),
    Validate(ContractReport),
}

/// Statistics for one extract run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractSummary {
    /// Table files read, in order
    pub inputs: Vec<PathBuf>,
    pub tables: TableReadStats,
    pub assembly: AssemblyStats,
    /// Number of waypoints written (or that would be written on a dry run)
    pub waypoints: usize,
    /// Destination file; `None` means stdout
    pub output: Option<PathBuf>,
    pub dry_run: bool,
    #[serde(rename = "processing_time_seconds", serialize_with = "as_seconds")]
    pub processing_time: Duration,
}

impl ExtractSummary {
    /// Whether the waypoint JSON went to stdout, so reports must not
    pub fn wrote_to_stdout(&self) -> bool {
        !self.dry_run && self.output.is_none()
    }
}

fn as_seconds<S>(duration: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Set up structured logging on stderr at `log_level`; `RUST_LOG` overrides
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let installed = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    // A subscriber may already be installed when commands run in-process
    if installed.is_err() {
        debug!("Global subscriber already set, keeping it");
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Serialise a report value as pretty JSON followed by a newline
pub fn write_json_report<T: Serialize>(value: &T, out: &mut dyn Write) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::json("Failed to serialise report", e))?;
    writeln!(out, "{}", json).map_err(|e| Error::io("Failed to write report", e))
}
