//! Test utilities for waypoint writer testing

use crate::app::models::{UtmZone, WaypointRecord};

mod writer_tests;

/// Two finished records, one per supported zone
pub fn create_sample_records() -> Vec<WaypointRecord> {
    let mut harbour = WaypointRecord::new("WP1", UtmZone::new(35).unwrap());
    harbour.easting = Some(412680);
    harbour.northing = Some(7654321);
    harbour.push_description("Harbour entrance");

    let mut dock = WaypointRecord::new("WP3", UtmZone::new(36).unwrap());
    dock.easting = Some(502113);
    dock.northing = Some(7701450);
    dock.push_description("Fuel dock");

    vec![harbour, dock]
}
