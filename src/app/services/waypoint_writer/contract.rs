//! Reprojection contract checks
//!
//! The UTM→WGS84 conversion downstream only knows zones 35 and 36 and needs
//! positive easting/northing values. A waypoint file is checked entry by entry
//! so that every problem is reported, not just the first.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::SUPPORTED_ZONES;

/// A waypoint entry as stored on disk, before any validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWaypoint {
    pub name: String,
    pub zone: i64,
    #[serde(default)]
    pub easting: Option<i64>,
    #[serde(default)]
    pub northing: Option<i64>,
    #[serde(default)]
    pub desc: String,
}

/// One problem found in a waypoint entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractViolation {
    /// Zero-based position of the entry in the file
    pub index: usize,
    pub name: String,
    pub reason: String,
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} '{}': {}", self.index, self.name, self.reason)
    }
}

/// Outcome of checking a waypoint list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContractReport {
    pub checked: usize,
    pub violations: Vec<ContractViolation>,
}

impl ContractReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check every entry for a supported zone and positive coordinates
pub fn check_reprojection_contract(waypoints: &[RawWaypoint]) -> ContractReport {
    let mut report = ContractReport {
        checked: waypoints.len(),
        ..Default::default()
    };

    for (index, waypoint) in waypoints.iter().enumerate() {
        let mut violation = |reason: String| {
            report.violations.push(ContractViolation {
                index,
                name: waypoint.name.clone(),
                reason,
            })
        };

        let zone_supported = u8::try_from(waypoint.zone)
            .map(|zone| SUPPORTED_ZONES.contains(&zone))
            .unwrap_or(false);
        if !zone_supported {
            violation(format!("unsupported UTM zone {}", waypoint.zone));
        }

        for (axis, value) in [("easting", waypoint.easting), ("northing", waypoint.northing)] {
            match value {
                None => violation(format!("{} is missing", axis)),
                Some(v) if v <= 0 => violation(format!("{} must be positive, got {}", axis, v)),
                Some(_) => {}
            }
        }
    }

    report
}
