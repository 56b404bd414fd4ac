//! Test utilities for table reader testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;


/// Table dump for page 2 of a waypoint document, header row included
pub fn create_page_two_dump() -> &'static str {
    r#"[
  ["Name", "Datum / Zone", "Easting", "Northing", "Notes"],
  ["WP1", "WGS84 / 35W", "0412680", "x", null],
  [null, "y 7654321", "Harbour entrance", null, null],
  ["WP2", "WGS84 / 35W", "x 0415512", null, null]
]"#
}

/// Table dump for page 3; continues WP2 from page 2
pub fn create_page_three_dump() -> &'static str {
    r#"[
  ["", "y\n7660010", "Anchorage", null, null],
  ["WP3", "WGS84 / 36W", "0502113", "7701450", "Fuel dock"]
]"#
}

/// Write `content` to `name` inside `dir`
pub fn write_table(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Temp dir holding both page dumps
pub fn create_table_dir() -> (TempDir, Vec<PathBuf>) {
    let dir = TempDir::new().unwrap();
    let page2 = write_table(dir.path(), "page_2.json", create_page_two_dump());
    let page3 = write_table(dir.path(), "page_3.json", create_page_three_dump());
    (dir, vec![page2, page3])
}
