//! Application constants for the waypoint extractor
//!
//! This module contains the patterns, default values and field names
//! used throughout the waypoint extractor.

// =============================================================================
// UTM Zones
// =============================================================================

/// UTM zones the waypoint documents (and the reprojection tooling) cover
pub const SUPPORTED_ZONES: &[u8] = &[35, 36];

/// Two-digit zone number directly followed by `W`, e.g. `WGS84 / 35W`
pub const ZONE_PATTERN: &str = r"([0-9]{2})W";

// =============================================================================
// Coordinate Hunting and Artifact Stripping
// =============================================================================

/// Maximal run of ASCII digits
pub const INTEGER_TOKEN_PATTERN: &str = r"[0-9]+";

/// Artifact-stripping passes, applied in order to description text.
pub mod artifact_patterns {
    /// `x 412680 y` style axis bracket left around a partially consumed cell
    pub const AXIS_BRACKET: &str = r"[xX]\s*[0-9]+\s*[yY]";

    /// Digit run trailed by a standalone axis letter, e.g. `0412680 x`
    pub const DIGITS_THEN_AXIS: &str = r"\b[0-9]+\s*[xXyY]\b";

    /// Axis letter glued to a digit run, e.g. `y0508`
    pub const AXIS_THEN_DIGITS: &str = r"\b[xXyY][0-9]+\b";

    /// Lone `x` or `y` token
    pub const LONE_AXIS: &str = r"\b[xXyY]\b";

    /// Any whitespace run (newlines included)
    pub const WHITESPACE_RUN: &str = r"\s+";
}

// =============================================================================
// Table Input
// =============================================================================

/// Rows dropped from the first table (the column header line)
pub const DEFAULT_SKIP_HEADER_ROWS: usize = 1;

/// Table file extensions understood by the table reader
pub const TABLE_EXTENSIONS: &[&str] = &["json", "csv", "tsv"];

// =============================================================================
// Output
// =============================================================================

/// Field names of the serialized waypoint objects, in output order
pub const OUTPUT_FIELDS: &[&str] = &["name", "zone", "easting", "northing", "desc"];

// =============================================================================
// Configuration
// =============================================================================

/// Directory under the user config dir holding the config file
pub const CONFIG_DIR_NAME: &str = "waypoint-extractor";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overrides
pub mod env_vars {
    pub const SKIP_HEADER_ROWS: &str = "WAYPOINT_SKIP_HEADER_ROWS";
    pub const OUTPUT_PATH: &str = "WAYPOINT_OUTPUT";
    pub const PRETTY: &str = "WAYPOINT_PRETTY";
}

/// Log filter target for this crate
pub const LOG_TARGET: &str = "waypoint_extractor";

/// Valid log level names
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
