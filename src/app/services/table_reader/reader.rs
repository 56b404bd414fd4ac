//! Table file reading and merging

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::formats::{Table, TableFormat};
use crate::app::models::Row;
use crate::config::InputConfig;
use crate::{Error, Result};

/// Rows read from all inputs, with statistics
#[derive(Debug, Clone)]
pub struct TableReadResult {
    /// All data rows, every table concatenated in input order
    pub rows: Vec<Row>,

    /// Basic reading statistics
    pub stats: TableReadStats,
}

/// Simple table reading statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TableReadStats {
    /// Number of files read
    pub files_read: usize,

    /// Number of tables found across all files
    pub tables_read: usize,

    /// Tables that contained no rows
    pub empty_tables: usize,

    /// Header rows dropped from the first non-empty table
    pub header_rows_skipped: usize,

    /// Data rows handed on to the assembler
    pub rows: usize,
}

/// Reads extracted tables and flattens them into one row sequence
#[derive(Debug, Clone)]
pub struct TableReader {
    skip_header_rows: usize,
}

impl Default for TableReader {
    fn default() -> Self {
        Self::from_config(&InputConfig::default())
    }
}

impl TableReader {
    /// Create a reader that drops `skip_header_rows` rows from the first table
    pub fn new(skip_header_rows: usize) -> Self {
        Self { skip_header_rows }
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self::new(config.skip_header_rows)
    }

    /// Read every table in one file
    pub fn read_tables(&self, path: &Path) -> Result<Vec<Table>> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let format = TableFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read table file {}", path.display()), e)
        })?;

        let tables = format.parse(&path.display().to_string(), &content)?;
        debug!(
            "Read {} table(s) from {} as {:?}",
            tables.len(),
            path.display(),
            format
        );
        Ok(tables)
    }

    /// Read all files in order and merge their tables into one row sequence
    pub fn read_rows(&self, paths: &[PathBuf]) -> Result<TableReadResult> {
        let mut tables = Vec::new();
        for path in paths {
            tables.extend(self.read_tables(path)?);
        }

        let mut result = self.merge_tables(tables);
        result.stats.files_read = paths.len();

        info!(
            "Loaded {} rows from {} table(s) in {} file(s)",
            result.stats.rows, result.stats.tables_read, result.stats.files_read
        );
        Ok(result)
    }

    /// Concatenate tables, dropping the header rows of the first non-empty one
    pub fn merge_tables(&self, tables: Vec<Table>) -> TableReadResult {
        let mut stats = TableReadStats {
            tables_read: tables.len(),
            ..Default::default()
        };
        let mut rows = Vec::new();
        let mut header_pending = true;

        for (index, table) in tables.into_iter().enumerate() {
            if table.is_empty() {
                warn!("Table {} is empty, skipping", index + 1);
                stats.empty_tables += 1;
                continue;
            }

            let skip = if header_pending {
                header_pending = false;
                self.skip_header_rows.min(table.len())
            } else {
                0
            };
            stats.header_rows_skipped += skip;
            rows.extend(table.into_iter().skip(skip));
        }

        stats.rows = rows.len();
        TableReadResult { rows, stats }
    }
}

/// Expand input arguments into table file paths
///
/// Arguments containing glob metacharacters are expanded and sorted; plain
/// paths are taken as given and must exist.
pub fn resolve_input_paths(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        if !input.contains(['*', '?', '[']) {
            let path = PathBuf::from(input);
            if !path.exists() {
                return Err(Error::file_not_found(input.clone()));
            }
            paths.push(path);
            continue;
        }

        let entries =
            glob::glob(input).map_err(|e| Error::input_pattern(input.clone(), e.to_string()))?;

        let mut matched = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Error::input_pattern(input.clone(), e.to_string()))?;
            if path.is_file() {
                matched.push(path);
            }
        }

        if matched.is_empty() {
            return Err(Error::input_pattern(input.clone(), "no files matched"));
        }

        matched.sort();
        debug!("Pattern '{}' matched {} file(s)", input, matched.len());
        paths.extend(matched);
    }

    Ok(paths)
}
