//! Waypoint record assembly from split table rows
//!
//! Waypoint tables rarely keep one waypoint on one row: the name and
//! coordinate-system columns open a record, the easting and northing may sit
//! on that row, the next one, or straddle the two, and the remaining rows carry
//! description text littered with leftover axis labels. This module turns that
//! row stream back into complete records.
//!
//! ## Architecture
//!
//! - [`assembler`] - The row-by-row state machine and the [`assemble`] entry point
//! - [`zone`] - UTM zone extraction from the coordinate-system column
//! - [`coordinates`] - Two-integer coordinate hunt over buffered row text
//! - [`artifacts`] - Axis-label cleanup for description text
//! - [`stats`] - Assembly statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use waypoint_extractor::{Row, assemble};
//!
//! let rows = vec![
//!     Row::new(["WP1", "WGS84 / 35W", "0412680", "x"]),
//!     Row::new(["", "y 0508", "Summit ridge"]),
//! ];
//!
//! let records = assemble(&rows).unwrap();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].easting, Some(412680));
//! assert_eq!(records[0].northing, Some(508));
//! assert_eq!(records[0].description, "Summit ridge");
//! ```

pub mod artifacts;
pub mod assembler;
pub mod coordinates;
pub mod stats;
pub mod zone;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use artifacts::strip_artifacts;
pub use assembler::{RecordAssembler, assemble, assemble_with_stats};
pub use coordinates::{CoordinateHunt, hunt_coordinates};
pub use stats::{AssemblyResult, AssemblyStats};
pub use zone::parse_zone;
