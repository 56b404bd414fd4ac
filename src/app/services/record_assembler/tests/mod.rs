//! Test utilities for record assembler testing
//!
//! Helpers for building row sequences shaped like the waypoint tables the
//! assembler sees in practice.

use crate::app::models::Row;


/// Build a row from string literals
pub fn row(cells: &[&str]) -> Row {
    Row::new(cells.iter().copied())
}

/// Rows for three waypoints laid out the way the source tables break them:
/// coordinates on the header row, coordinates split across rows, and a
/// waypoint whose description spans several rows.
pub fn create_split_table_rows() -> Vec<Row> {
    vec![
        row(&["WP1", "WGS84 / 35W", "0412680 x", "y 7654321", "Harbour entrance"]),
        row(&["", "", "", "", "keep red buoy to port"]),
        row(&["WP2", "WGS84 / 35W", "x 0415512", "", ""]),
        row(&["", "y\n7660010", "Anchorage", "", ""]),
        row(&["WP3", "WGS84 / 36W", "", "", ""]),
        row(&["", "x 0502113", "y 7701450", "", ""]),
        row(&["", "", "Fuel dock", "", ""]),
        row(&["", "", "open 08-20", "", ""]),
    ]
}

/// Rows where the second waypoint never gets two integers
pub fn create_rows_with_incomplete_record() -> Vec<Row> {
    vec![
        row(&["WP1", "WGS84 / 35W", "0412680", "7654321", "Start"]),
        row(&["WP2", "WGS84 / 35W", "Light 1", "", ""]),
        row(&["", "", "Depths in metres", "", ""]),
        row(&["WP3", "WGS84 / 35W", "0412999", "7654999", "Finish"]),
    ]
}
