//! Row-by-row waypoint assembly
//!
//! A row whose first two cells are both filled opens a new waypoint; every
//! other row continues the open one. Until the first two integers have been
//! seen, continuation text is buffered and re-scanned for coordinates;
//! afterwards it goes straight into the description.

use tracing::{debug, info, warn};

use super::artifacts::strip_artifacts;
use super::coordinates::{CoordinateHunt, hunt_coordinates};
use super::stats::{AssemblyResult, AssemblyStats};
use super::zone::parse_zone;
use crate::Result;
use crate::app::models::{Row, WaypointRecord};

/// Where the assembler is in the current waypoint
#[derive(Debug, Clone, Default)]
enum AssemblerState {
    /// No waypoint has been opened yet
    #[default]
    NoRecord,
    /// Waypoint open, buffering text until two integers show up
    AwaitingCoordinates {
        record: WaypointRecord,
        pending: String,
    },
    /// Coordinates found, remaining rows feed the description
    AccumulatingDescription { record: WaypointRecord },
}

/// Incremental waypoint assembler
///
/// Feed rows with [`push_row`](Self::push_row); each call yields the waypoint
/// that the row closed, if any. Call [`finish`](Self::finish) at end of input
/// to flush the waypoint still open.
#[derive(Debug, Default)]
pub struct RecordAssembler {
    state: AssemblerState,
    stats: AssemblyStats,
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics gathered so far
    pub fn stats(&self) -> &AssemblyStats {
        &self.stats
    }

    /// Whether the open waypoint (if any) already has its coordinates
    pub fn position_found(&self) -> bool {
        matches!(self.state, AssemblerState::AccumulatingDescription { .. })
    }

    /// Buffered text still being searched for coordinates
    pub fn pending_text(&self) -> &str {
        match &self.state {
            AssemblerState::AwaitingCoordinates { pending, .. } => pending,
            _ => "",
        }
    }

    /// Process one row
    ///
    /// Returns the previous waypoint when `row` opens a new one and the
    /// previous waypoint is complete. Fails only when a new waypoint row has no
    /// usable zone.
    pub fn push_row(&mut self, row: &Row) -> Result<Option<WaypointRecord>> {
        self.stats.rows_seen += 1;
        let row_number = self.stats.rows_seen;

        if !starts_new_record(row) {
            self.continue_record(row_number, row);
            return Ok(None);
        }

        let zone = parse_zone(row_number, row.cell(1))?;
        let finished = self.finalize_current();

        let record = WaypointRecord::new(row.flattened_cell(0), zone);
        debug!(
            "Row {}: opened waypoint '{}' in zone {}",
            row_number, record.name, zone
        );
        self.stats.records_started += 1;

        self.state = hunt(record, row.joined_from(2));
        Ok(finished)
    }

    /// Close out the waypoint still open at end of input
    pub fn finish(&mut self) -> Option<WaypointRecord> {
        self.finalize_current()
    }

    fn continue_record(&mut self, row_number: usize, row: &Row) {
        let line = row.joined_from(0);

        self.state = match std::mem::take(&mut self.state) {
            AssemblerState::NoRecord => {
                if !line.is_empty() {
                    debug!("Row {}: skipped, no waypoint open yet", row_number);
                    self.stats.orphan_rows += 1;
                }
                AssemblerState::NoRecord
            }
            AssemblerState::AwaitingCoordinates { record, pending } if line.is_empty() => {
                AssemblerState::AwaitingCoordinates { record, pending }
            }
            AssemblerState::AwaitingCoordinates {
                record,
                mut pending,
            } => {
                if !pending.is_empty() {
                    pending.push(' ');
                }
                pending.push_str(&line);
                hunt(record, pending)
            }
            AssemblerState::AccumulatingDescription { mut record } => {
                record.push_description(&strip_artifacts(&line));
                AssemblerState::AccumulatingDescription { record }
            }
        };
    }

    fn finalize_current(&mut self) -> Option<WaypointRecord> {
        let record = match std::mem::take(&mut self.state) {
            AssemblerState::NoRecord => return None,
            AssemblerState::AwaitingCoordinates { record, .. } => record,
            AssemblerState::AccumulatingDescription { record } => record,
        };

        if record.has_position() {
            self.stats.records_emitted += 1;
            Some(record)
        } else {
            warn!("Dropping waypoint '{}': no easting/northing found", record.name);
            self.stats.records_discarded += 1;
            None
        }
    }
}

/// A row opens a waypoint iff its name and coordinate-system cells are both filled
fn starts_new_record(row: &Row) -> bool {
    row.is_populated(0) && row.is_populated(1)
}

/// Run the coordinate hunt over `pending` and pick the next state
fn hunt(mut record: WaypointRecord, pending: String) -> AssemblerState {
    match hunt_coordinates(&pending) {
        CoordinateHunt::Pending => AssemblerState::AwaitingCoordinates { record, pending },
        CoordinateHunt::Found {
            easting,
            northing,
            consumed,
        } => {
            record.easting = easting;
            record.northing = northing;
            record.push_description(&strip_artifacts(&pending[consumed..]));
            debug!(
                "Waypoint '{}': easting={:?} northing={:?}",
                record.name, easting, northing
            );
            AssemblerState::AccumulatingDescription { record }
        }
    }
}

/// Assemble a full row sequence into waypoint records
///
/// Either every record is returned or, on the first structural error, none.
pub fn assemble(rows: &[Row]) -> Result<Vec<WaypointRecord>> {
    assemble_with_stats(rows).map(|result| result.records)
}

/// Assemble a full row sequence, keeping the statistics
pub fn assemble_with_stats(rows: &[Row]) -> Result<AssemblyResult> {
    let mut assembler = RecordAssembler::new();
    let mut records = Vec::new();

    for row in rows {
        if let Some(record) = assembler.push_row(row)? {
            records.push(record);
        }
    }
    if let Some(record) = assembler.finish() {
        records.push(record);
    }

    let stats = assembler.stats().clone();
    info!(
        "Assembled {} waypoints from {} rows ({} discarded)",
        stats.records_emitted, stats.rows_seen, stats.records_discarded
    );

    Ok(AssemblyResult { records, stats })
}
