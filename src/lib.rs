//! Waypoint Extractor Library
//!
//! A Rust library for turning extracted waypoint tables into structured
//! UTM waypoint records.
//!
//! This library provides tools for:
//! - Loading extracted tables (JSON table dumps, CSV, TSV) into one row sequence
//! - Assembling waypoint records whose fields are split across several rows
//! - Recovering easting/northing pairs that straddle row boundaries
//! - Stripping stray axis-label artifacts from description text
//! - Writing the records as JSON with a stable field layout

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod record_assembler;
        pub mod table_reader;
        pub mod waypoint_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Row, UtmZone, WaypointRecord};
pub use app::services::record_assembler::{RecordAssembler, assemble};
pub use config::Config;

/// Result type alias for the waypoint extractor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for waypoint extraction
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The coordinate-system cell of a new waypoint row has no `NNW` zone token
    #[error("Cannot parse UTM zone from '{cell}' on row {row}")]
    UnparseableZone { row: usize, cell: String },

    /// The zone token parsed but names a zone the downstream tooling does not handle
    #[error("Unsupported UTM zone {zone} on row {row} (expected 35 or 36)")]
    UnsupportedZone { row: usize, zone: u8 },

    /// Table file has an unexpected shape or extension
    #[error("Table format error in file '{file}': {message}")]
    TableFormat { file: String, message: String },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// JSON (de)serialization error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Input glob pattern could not be expanded
    #[error("Invalid input pattern '{pattern}': {message}")]
    InputPattern { pattern: String, message: String },

    /// Waypoint file violates the contract expected by reprojection tooling
    #[error("Waypoint contract violated: {message}")]
    ContractViolation { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an unparseable zone error
    pub fn unparseable_zone(row: usize, cell: impl Into<String>) -> Self {
        Self::UnparseableZone {
            row,
            cell: cell.into(),
        }
    }

    /// Create an unsupported zone error
    pub fn unsupported_zone(row: usize, zone: u8) -> Self {
        Self::UnsupportedZone { row, zone }
    }

    /// Create a table format error
    pub fn table_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TableFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an input pattern error
    pub fn input_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InputPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create a contract violation error
    pub fn contract_violation(message: impl Into<String>) -> Self {
        Self::ContractViolation {
            message: message.into(),
        }
    }

    /// Whether the error means the input document's format assumption is broken
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::UnparseableZone { .. } | Self::UnsupportedZone { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
