//! Data models for waypoint extraction
//!
//! This module contains the table row representation consumed by the record
//! assembler and the waypoint record it produces.

use crate::constants::SUPPORTED_ZONES;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Table Row
// =============================================================================

/// One table row as handed over by the table extractor
///
/// Absent cells are represented by empty strings. A cell may contain embedded
/// newlines when the source cell wrapped over several lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Row {
    /// Create a row from owned or borrowed cell text
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a row from extractor output where missing cells are `None`
    pub fn from_optional_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        Self {
            cells: cells.into_iter().map(Option::unwrap_or_default).collect(),
        }
    }

    /// Cell text at `index`, or `""` past the end of the row
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    /// Whether the cell at `index` holds anything besides whitespace
    pub fn is_populated(&self, index: usize) -> bool {
        !self.cell(index).trim().is_empty()
    }

    /// Cell text on a single line: line breaks and whitespace runs become one space
    pub fn flattened_cell(&self, index: usize) -> String {
        self.cell(index).split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Non-empty cells from `start` onwards, trimmed and joined with single spaces
    pub fn joined_from(&self, start: usize) -> String {
        self.cells
            .iter()
            .skip(start)
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// =============================================================================
// UTM Zone
// =============================================================================

/// UTM longitudinal zone, restricted to the zones the documents cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct UtmZone(u8);

impl UtmZone {
    /// Validate a zone number
    pub fn new(zone: u8) -> Option<Self> {
        SUPPORTED_ZONES.contains(&zone).then_some(Self(zone))
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for UtmZone {
    type Error = String;

    fn try_from(zone: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(zone).ok_or_else(|| format!("unsupported UTM zone {zone}"))
    }
}

impl From<UtmZone> for u8 {
    fn from(zone: UtmZone) -> Self {
        zone.0
    }
}

impl fmt::Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Waypoint Record
// =============================================================================

/// A waypoint assembled from one or more table rows
///
/// Serializes to `{name, zone, easting, northing, desc}`; downstream tooling
/// depends on exactly these keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaypointRecord {
    /// Waypoint name as written in the first column
    pub name: String,

    /// UTM zone parsed from the coordinate-system column
    pub zone: UtmZone,

    /// Easting in meters, unset until two integers have been found
    pub easting: Option<u64>,

    /// Northing in meters, unset until two integers have been found
    pub northing: Option<u64>,

    /// Free text collected after the coordinates, artifacts removed
    #[serde(rename = "desc")]
    pub description: String,
}

impl WaypointRecord {
    /// Start a record with no coordinates and an empty description
    pub fn new(name: impl Into<String>, zone: UtmZone) -> Self {
        Self {
            name: name.into(),
            zone,
            easting: None,
            northing: None,
            description: String::new(),
        }
    }

    /// Whether both coordinates are set and non-zero
    pub fn has_position(&self) -> bool {
        matches!(
            (self.easting, self.northing),
            (Some(e), Some(n)) if e != 0 && n != 0
        )
    }

    /// Easting/northing pair if the record is complete
    pub fn position(&self) -> Option<(u64, u64)> {
        if self.has_position() {
            self.easting.zip(self.northing)
        } else {
            None
        }
    }

    /// Append already-cleaned text to the description, space separated
    pub fn push_description(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(text);
    }
}

/// Validate a parsed zone number against the supported set
pub fn validate_zone(row: usize, zone: u8) -> Result<UtmZone> {
    UtmZone::new(zone).ok_or_else(|| Error::unsupported_zone(row, zone))
}
