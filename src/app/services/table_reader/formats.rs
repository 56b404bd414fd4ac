//! Table file formats
//!
//! A JSON table dump is what table extractors typically emit: a table is an
//! array of rows, a row an array of cells, and a cell a string or `null`. A
//! dump may hold a single table or an array of tables. CSV and TSV files hold
//! one table each.

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::app::models::Row;
use crate::{Error, Result};

/// A table is its rows in document order
pub type Table = Vec<Row>;

/// Supported table file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Json,
    Csv,
    Tsv,
}

impl TableFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            Some("tsv") => Ok(Self::Tsv),
            _ => Err(Error::table_format(
                path.display().to_string(),
                format!(
                    "Unsupported table file extension (expected one of: {})",
                    crate::constants::TABLE_EXTENSIONS.join(", ")
                ),
            )),
        }
    }

    /// Decode file content into tables
    pub fn parse(self, file: &str, content: &str) -> Result<Vec<Table>> {
        match self {
            Self::Json => parse_json_tables(file, content),
            Self::Csv => parse_delimited(file, content, b','),
            Self::Tsv => parse_delimited(file, content, b'\t'),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TableDump {
    Tables(Vec<Vec<Vec<Value>>>),
    Table(Vec<Vec<Value>>),
}

/// Decode a JSON table dump (single table or list of tables)
pub fn parse_json_tables(file: &str, content: &str) -> Result<Vec<Table>> {
    let dump: TableDump = serde_json::from_str(content).map_err(|e| {
        Error::json(
            format!("'{}' is not a JSON table dump (rows of string/null cells)", file),
            e,
        )
    })?;

    let tables = match dump {
        TableDump::Tables(tables) => tables,
        TableDump::Table(table) => vec![table],
    };

    Ok(tables
        .into_iter()
        .map(|table| table.into_iter().map(json_row).collect())
        .collect())
}

fn json_row(cells: Vec<Value>) -> Row {
    Row::from_optional_cells(cells.into_iter().map(|cell| match cell {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }))
}

/// Decode a delimited text table; rows may have differing lengths
pub fn parse_delimited(file: &str, content: &str, delimiter: u8) -> Result<Vec<Table>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let mut table = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            Error::csv_parsing(file, format!("Failed to read row {}", index + 1), Some(e))
        })?;
        table.push(Row::new(record.iter()));
    }

    Ok(vec![table])
}
