//! Command-line argument definitions for the waypoint extractor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the waypoint extractor
///
/// Turns tables extracted from waypoint documents into a JSON list of
/// UTM waypoints ready for reprojection.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "waypoint-extractor",
    version,
    about = "Assemble UTM waypoint records from extracted document tables",
    long_about = "Reads tables extracted from waypoint documents (JSON table dumps, CSV or TSV), \
                  reassembles waypoints whose name, coordinates and description are split across \
                  rows and pages, and writes them as a JSON list of {name, zone, easting, northing, \
                  desc} objects for UTM reprojection."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the waypoint extractor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Assemble waypoints from extracted tables and write them as JSON
    Extract(ExtractArgs),
    /// Check a waypoint JSON file against the reprojection contract
    Validate(ValidateArgs),
}

/// Arguments for the extract command
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    /// Table files to read, in document order
    ///
    /// Accepts .json table dumps, .csv and .tsv files. Glob patterns such as
    /// 'tables/page_*.json' are expanded and sorted by name.
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    pub inputs: Vec<String>,

    /// Output file for the waypoint JSON
    ///
    /// Parent directories are created if missing. Writes to stdout when neither
    /// this flag, the config file nor WAYPOINT_OUTPUT sets a path.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for the waypoint JSON (default: stdout)"
    )]
    pub output: Option<PathBuf>,

    /// Rows to drop from the first table
    #[arg(
        long = "skip-header-rows",
        value_name = "N",
        help = "Number of header rows to drop from the first table (default: 1)"
    )]
    pub skip_header_rows: Option<usize>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/waypoint-extractor/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Write JSON on a single line
    #[arg(long = "compact", help = "Write compact JSON instead of indented")]
    pub compact: bool,

    /// Assemble and report without writing any output
    #[arg(
        long = "dry-run",
        help = "Show what would be extracted without writing the waypoint file"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the run summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Waypoint JSON file to check
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Output format for the validation report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the validation report"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for run summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl ExtractArgs {
    /// Validate the extract command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.inputs.iter().any(|input| input.trim().is_empty()) {
            return Err(Error::configuration("Input paths cannot be empty"));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(output) = &self.output {
            if output.is_dir() {
                return Err(Error::configuration(format!(
                    "Output path is a directory: {}",
                    output.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            verbosity_level(self.verbose)
        }
    }

    /// Log level forced by `-v` or `-q`; `None` leaves the configured level
    pub fn log_level_override(&self) -> Option<&'static str> {
        (self.quiet || self.verbose > 0).then(|| self.get_log_level())
    }
}

impl ValidateArgs {
    /// Validate the validate command arguments
    pub fn validate(&self) -> Result<()> {
        if !self.file.exists() {
            return Err(Error::file_not_found(self.file.display().to_string()));
        }
        Ok(())
    }

    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    fn extract_args(argv: &[&str]) -> ExtractArgs {
        match parse(argv).command {
            Some(Commands::Extract(args)) => args,
            other => panic!("Expected extract command, got {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand() {
        assert!(parse(&["waypoint-extractor"]).command.is_none());
    }

    #[test]
    fn test_extract_parsing() {
        let args = extract_args(&[
            "waypoint-extractor",
            "extract",
            "page_2.json",
            "page_3.json",
            "-o",
            "out.json",
            "--skip-header-rows",
            "0",
            "--compact",
            "--output-format",
            "json",
        ]);

        assert_eq!(args.inputs, vec!["page_2.json", "page_3.json"]);
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert_eq!(args.skip_header_rows, Some(0));
        assert!(args.compact);
        assert!(!args.dry_run);
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_extract_requires_input() {
        assert!(Args::try_parse_from(["waypoint-extractor", "extract"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(
            Args::try_parse_from(["waypoint-extractor", "extract", "a.json", "-q", "-v"]).is_err()
        );
    }

    #[test]
    fn test_log_level() {
        let mut args = extract_args(&["waypoint-extractor", "extract", "a.json"]);
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 5;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_log_level_override_only_with_flags() {
        let mut args = extract_args(&["waypoint-extractor", "extract", "a.json"]);
        assert_eq!(args.log_level_override(), None);

        args.verbose = 2;
        assert_eq!(args.log_level_override(), Some("debug"));

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.log_level_override(), Some("error"));
    }

    #[test]
    fn test_extract_validation() {
        let temp_dir = TempDir::new().unwrap();

        let mut args = extract_args(&["waypoint-extractor", "extract", "a.json"]);
        assert!(args.validate().is_ok());

        args.output = Some(temp_dir.path().to_path_buf());
        assert!(args.validate().is_err());

        args.output = None;
        args.config_file = Some(temp_dir.path().join("missing.toml"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_command() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("waypoints.json");

        let args = match parse(&[
            "waypoint-extractor",
            "validate",
            file.to_str().unwrap(),
            "-vv",
        ])
        .command
        {
            Some(Commands::Validate(args)) => args,
            other => panic!("Expected validate command, got {:?}", other),
        };

        assert_eq!(args.get_log_level(), "debug");
        assert!(matches!(args.validate(), Err(Error::FileNotFound { .. })));

        std::fs::write(&file, "[]").unwrap();
        assert!(args.validate().is_ok());
    }
}
