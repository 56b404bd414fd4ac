//! Validate command implementation
//!
//! Loads a waypoint JSON file and checks it against what UTM reprojection
//! needs. Violations are reported and turned into a non-zero exit.

use super::shared::{RunSummary, setup_logging, write_json_report};
use crate::app::services::waypoint_writer::{
    ContractReport, check_reprojection_contract, read_waypoints,
};
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::{Error, Result};
use colored::*;
use std::io::Write;
use tracing::{debug, info};

/// Validate command runner
pub fn run_validate(args: ValidateArgs) -> Result<RunSummary> {
    setup_logging(args.get_log_level(), false)?;

    debug!("Validate arguments: {:?}", args);
    args.validate()?;

    let waypoints = read_waypoints(&args.file)?;
    info!(
        "Checking {} waypoints from {}",
        waypoints.len(),
        args.file.display()
    );

    let report = check_reprojection_contract(&waypoints);

    let mut out = std::io::stdout().lock();
    match args.output_format {
        OutputFormat::Json => write_json_report(&report, &mut out)?,
        OutputFormat::Human => write_human_report(&report, &mut out)
            .map_err(|e| Error::io("Failed to write report", e))?,
    }

    if !report.is_valid() {
        return Err(Error::contract_violation(format!(
            "{} of {} waypoints in {} cannot be reprojected",
            count_failing_waypoints(&report),
            report.checked,
            args.file.display()
        )));
    }

    Ok(RunSummary::Validate(report))
}

fn count_failing_waypoints(report: &ContractReport) -> usize {
    let mut indices: Vec<usize> = report.violations.iter().map(|v| v.index).collect();
    indices.dedup();
    indices.len()
}

/// Write a human-readable validation report
pub fn write_human_report(report: &ContractReport, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "\n{}", "Waypoint Validation".bright_green().bold())?;
    writeln!(
        out,
        "  {} {}",
        "Waypoints checked:".bright_cyan(),
        report.checked.to_string().bright_white()
    )?;

    if report.is_valid() {
        writeln!(out, "  {}", "All waypoints can be reprojected".bright_green())?;
        return Ok(());
    }

    writeln!(
        out,
        "  {} {}",
        "Violations:".bright_red(),
        report.violations.len().to_string().bright_red().bold()
    )?;
    for violation in &report.violations {
        writeln!(out, "    {}", violation)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::waypoint_writer::RawWaypoint;

    fn raw(name: &str, zone: i64, easting: Option<i64>) -> RawWaypoint {
        RawWaypoint {
            name: name.to_string(),
            zone,
            easting,
            northing: Some(7654321),
            desc: String::new(),
        }
    }

    #[test]
    fn test_failing_waypoints_counted_once() {
        let report = check_reprojection_contract(&[
            raw("WP1", 37, None),
            raw("WP2", 35, Some(412680)),
            raw("WP3", 35, Some(-4)),
        ]);

        assert_eq!(report.violations.len(), 3);
        assert_eq!(count_failing_waypoints(&report), 2);
    }

    #[test]
    fn test_human_report_lists_violations() {
        colored::control::set_override(false);
        let report = check_reprojection_contract(&[raw("WP7", 34, Some(1))]);

        let mut buffer = Vec::new();
        write_human_report(&report, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Waypoints checked: 1"));
        assert!(text.contains("#0 'WP7': unsupported UTM zone 34"));
    }

    #[test]
    fn test_human_report_for_valid_file() {
        colored::control::set_override(false);
        let report = check_reprojection_contract(&[raw("WP1", 36, Some(502113))]);

        let mut buffer = Vec::new();
        write_human_report(&report, &mut buffer).unwrap();

        assert!(
            String::from_utf8(buffer)
                .unwrap()
                .contains("All waypoints can be reprojected")
        );
    }
}
