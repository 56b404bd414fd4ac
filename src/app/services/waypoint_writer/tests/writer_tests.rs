//! Tests for waypoint JSON output

use super::super::writer::{WaypointWriter, read_waypoints};
use super::create_sample_records;
use crate::Error;
use crate::app::models::{UtmZone, WaypointRecord};
use tempfile::TempDir;

#[test]
fn test_field_order_and_pretty_layout() {
    let records = create_sample_records();

    let json = WaypointWriter::new(true).to_json_string(&records[..1]).unwrap();

    let expected = r#"[
  {
    "name": "WP1",
    "zone": 35,
    "easting": 412680,
    "northing": 7654321,
    "desc": "Harbour entrance"
  }
]
"#;
    assert_eq!(json, expected);
}

#[test]
fn test_compact_output() {
    let records = create_sample_records();

    let json = WaypointWriter::new(false).to_json_string(&records).unwrap();

    assert_eq!(json.lines().count(), 1);
    assert!(json.starts_with(r#"[{"name":"WP1","zone":35,"easting":412680"#));
    assert!(json.ends_with("]\n"));
}

#[test]
fn test_empty_record_list() {
    let json = WaypointWriter::default().to_json_string(&[]).unwrap();
    assert_eq!(json, "[]\n");
}

#[test]
fn test_write_to_buffer() {
    let mut buffer = Vec::new();
    WaypointWriter::new(false)
        .write_to(&create_sample_records(), &mut buffer)
        .unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert!(text.contains(r#""desc":"Fuel dock""#));
}

#[test]
fn test_write_file_creates_parent_dirs_and_reads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("out").join("waypoints.json");
    let records = create_sample_records();

    WaypointWriter::default().write_file(&records, &path).unwrap();
    let loaded = read_waypoints(&path).unwrap();

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].name, "WP1");
    assert_eq!(loaded[0].zone, 35);
    assert_eq!(loaded[0].easting, Some(412680));
    assert_eq!(loaded[1].northing, Some(7701450));
    assert_eq!(loaded[1].desc, "Fuel dock");
}

#[test]
fn test_empty_description_is_written() {
    let mut record = WaypointRecord::new("WP9", UtmZone::new(36).unwrap());
    record.easting = Some(1);
    record.northing = Some(2);

    let json = WaypointWriter::new(false).to_json_string(&[record]).unwrap();

    assert!(json.contains(r#""desc":"""#));
}

#[test]
fn test_read_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        read_waypoints(&dir.path().join("absent.json")),
        Err(Error::FileNotFound { .. })
    ));
}

#[test]
fn test_read_non_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("object.json");
    std::fs::write(&path, r#"{"name": "WP1"}"#).unwrap();

    assert!(matches!(read_waypoints(&path), Err(Error::Json { .. })));
}
