use anyhow::Context;
use clap::Parser;
use std::process;
use waypoint_extractor::cli::{
    args::Args,
    commands::{self, RunSummary},
};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match try_main(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Reports have already been printed by the command
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn try_main(args: Args) -> anyhow::Result<()> {
    let summary = commands::run(args).context("waypoint-extractor failed")?;

    if let RunSummary::Extract(summary) = &summary {
        if summary.waypoints == 0 {
            eprintln!("Warning: no waypoints were found in the input tables");
        }
    }

    Ok(())
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Waypoint Extractor - UTM waypoints from extracted document tables");
    println!("=================================================================");
    println!();
    println!("Reassemble waypoints whose name, coordinates and description are split");
    println!("across table rows and pages, and write them as a JSON list.");
    println!();
    println!("USAGE:");
    println!("    waypoint-extractor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    extract     Assemble waypoints from table files and write JSON (main command)");
    println!("    validate    Check a waypoint JSON file can be reprojected");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Extract waypoints from per-page table dumps:");
    println!("    waypoint-extractor extract 'tables/page_*.json' -o waypoints.json");
    println!();
    println!("    # Tables without a header row, compact output to stdout:");
    println!("    waypoint-extractor extract route.csv --skip-header-rows 0 --compact");
    println!();
    println!("    # Check a waypoint file before reprojection:");
    println!("    waypoint-extractor validate waypoints.json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    waypoint-extractor <COMMAND> --help");
}
