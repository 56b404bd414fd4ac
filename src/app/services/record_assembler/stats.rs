//! Assembly statistics and result structures
//!
//! This module provides types for tracking how many rows were consumed and how
//! many waypoints survived assembly, for reporting by the CLI.

use crate::app::models::WaypointRecord;

/// Assembly result with records and basic statistics
#[derive(Debug, Clone)]
pub struct AssemblyResult {
    /// Completed waypoint records, in the order their first row appeared
    pub records: Vec<WaypointRecord>,

    /// Basic assembly statistics
    pub stats: AssemblyStats,
}

/// Simple assembly statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssemblyStats {
    /// Total number of rows fed to the assembler
    pub rows_seen: usize,

    /// Non-blank continuation rows that arrived before any waypoint opened
    pub orphan_rows: usize,

    /// Number of rows that opened a new waypoint
    pub records_started: usize,

    /// Number of waypoints emitted with both coordinates
    pub records_emitted: usize,

    /// Number of waypoints dropped because coordinates were never found
    pub records_discarded: usize,
}

impl AssemblyStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of started waypoints that were emitted
    pub fn completion_rate(&self) -> f64 {
        if self.records_started == 0 {
            0.0
        } else {
            (self.records_emitted as f64 / self.records_started as f64) * 100.0
        }
    }

    /// Waypoints started but not yet emitted or discarded
    pub fn records_open(&self) -> usize {
        self.records_started - self.records_emitted - self.records_discarded
    }
}
