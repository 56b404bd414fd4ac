//! Waypoint JSON output
//!
//! Waypoints are persisted as an ordered JSON array of
//! `{name, zone, easting, northing, desc}` objects, the shape the downstream
//! reprojection and GPX tooling reads.
//!
//! - [`writer`] - Serialising records to a file or any writer, and loading them back
//! - [`contract`] - Checks that a waypoint file is usable for UTM reprojection

pub mod contract;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use contract::{ContractReport, ContractViolation, RawWaypoint, check_reprojection_contract};
pub use writer::{WaypointWriter, read_waypoints};
