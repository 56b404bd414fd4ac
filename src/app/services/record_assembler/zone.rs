//! UTM zone extraction for new waypoint rows

use regex::Regex;
use std::sync::LazyLock;

use crate::app::models::{UtmZone, validate_zone};
use crate::constants::ZONE_PATTERN;
use crate::{Error, Result};

static RE_ZONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ZONE_PATTERN).expect("valid zone regex"));

/// Parse the zone out of a coordinate-system cell such as `WGS84 / 35W`
///
/// `row` is the 1-based position of the row in the assembled sequence and is
/// only used for error reporting. A cell without a `NNW` token, or with a zone
/// other than 35/36, is a structural error.
pub fn parse_zone(row: usize, cell: &str) -> Result<UtmZone> {
    let captures = RE_ZONE
        .captures(cell)
        .ok_or_else(|| Error::unparseable_zone(row, cell))?;

    let zone = captures[1]
        .parse::<u8>()
        .map_err(|_| Error::unparseable_zone(row, cell))?;

    validate_zone(row, zone)
}
