//! Extract command implementation
//!
//! Reads the input tables, assembles waypoints and writes the JSON list,
//! then reports what happened.

use super::shared::{ExtractSummary, RunSummary, setup_logging, write_json_report};
use crate::app::services::record_assembler::assemble_with_stats;
use crate::app::services::table_reader::{TableReader, resolve_input_paths};
use crate::app::services::waypoint_writer::WaypointWriter;
use crate::cli::args::{ExtractArgs, OutputFormat};
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Extract command runner
pub fn run_extract(args: ExtractArgs) -> Result<RunSummary> {
    args.validate()?;

    // The config file may set the log level, so it is read before logging starts
    let config = load_configuration(&args)?;
    setup_logging(&config.logging.level, args.quiet)?;

    info!("Starting waypoint extraction");
    debug!("Extract arguments: {:?}", args);
    debug!("Loaded configuration: {:?}", config);

    let summary = extract(&args.inputs, &config, args.dry_run)?;

    generate_report(&args, &summary)?;

    Ok(RunSummary::Extract(summary))
}

/// Run the pipeline for `inputs` under `config`
///
/// The whole input is assembled before anything is written, so a structural
/// error leaves no partial output behind.
pub fn extract(inputs: &[String], config: &Config, dry_run: bool) -> Result<ExtractSummary> {
    let start_time = Instant::now();

    let paths = resolve_input_paths(inputs)?;
    info!("Reading {} table files", paths.len());

    let table_result = TableReader::from_config(&config.input).read_rows(&paths)?;
    let assembly = assemble_with_stats(&table_result.rows)?;

    if assembly.stats.records_discarded > 0 {
        warn!(
            "{} waypoints had no usable coordinates and were dropped",
            assembly.stats.records_discarded
        );
    }

    let output = config.output.path.clone();
    if dry_run {
        info!(
            "Dry run: would write {} waypoints to {}",
            assembly.records.len(),
            describe_destination(output.as_deref())
        );
    } else {
        let writer = WaypointWriter::from_config(&config.output);
        match &output {
            Some(path) => writer.write_file(&assembly.records, path)?,
            None => writer.write_to(&assembly.records, std::io::stdout().lock())?,
        }
    }

    Ok(ExtractSummary {
        inputs: paths,
        tables: table_result.stats,
        waypoints: assembly.records.len(),
        assembly: assembly.stats,
        output,
        dry_run,
        processing_time: start_time.elapsed(),
    })
}

/// Load configuration using layered approach (file -> env -> args)
fn load_configuration(args: &ExtractArgs) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_deref()
            .filter(|path| path.exists()),
    };

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, args: &ExtractArgs) {
    if let Some(rows) = args.skip_header_rows {
        config.input.skip_header_rows = rows;
    }
    if let Some(output) = &args.output {
        config.output.path = Some(output.clone());
    }
    if args.compact {
        config.output.pretty = false;
    }
    if let Some(level) = args.log_level_override() {
        config.logging.level = level.to_string();
    }
}

fn describe_destination(output: Option<&std::path::Path>) -> String {
    output
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "stdout".to_string())
}

/// Print the run report, on stderr when stdout carries the waypoints
fn generate_report(args: &ExtractArgs, summary: &ExtractSummary) -> Result<()> {
    let mut out: Box<dyn Write> = if summary.wrote_to_stdout() {
        Box::new(std::io::stderr().lock())
    } else {
        Box::new(std::io::stdout().lock())
    };

    match args.output_format {
        OutputFormat::Json => write_json_report(summary, &mut out),
        OutputFormat::Human if args.quiet => Ok(()),
        OutputFormat::Human => write_human_report(summary, &mut out)
            .map_err(|e| Error::io("Failed to write report", e)),
    }
}

/// Write a human-readable extraction summary
pub fn write_human_report(summary: &ExtractSummary, out: &mut dyn Write) -> std::io::Result<()> {
    let title = if summary.dry_run {
        "Waypoint Extraction Dry Run"
    } else {
        "Waypoint Extraction Complete"
    };
    writeln!(out, "\n{}", title.bright_green().bold())?;

    writeln!(
        out,
        "  {} {} ({} tables, {} rows)",
        "Files read:".bright_cyan(),
        summary.tables.files_read.to_string().bright_white(),
        summary.tables.tables_read,
        summary.tables.rows
    )?;
    if summary.tables.empty_tables > 0 {
        writeln!(
            out,
            "  {} {}",
            "Empty tables:".bright_yellow(),
            summary.tables.empty_tables
        )?;
    }
    writeln!(
        out,
        "  {} {}",
        "Waypoints:".bright_cyan(),
        summary.waypoints.to_string().bright_white().bold()
    )?;
    if summary.assembly.records_discarded > 0 {
        writeln!(
            out,
            "  {} {}",
            "Dropped (no coordinates):".bright_red(),
            summary.assembly.records_discarded.to_string().bright_red().bold()
        )?;
    }
    if summary.assembly.orphan_rows > 0 {
        writeln!(
            out,
            "  {} {}",
            "Rows before first waypoint:".bright_yellow(),
            summary.assembly.orphan_rows
        )?;
    }

    let destination = describe_destination(summary.output.as_deref());
    let verb = if summary.dry_run { "Would write:" } else { "Written to:" };
    writeln!(out, "  {} {}", verb.bright_cyan(), destination.bright_white())?;
    writeln!(
        out,
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        summary.processing_time.as_millis().to_string().bright_white()
    )?;

    Ok(())
}
