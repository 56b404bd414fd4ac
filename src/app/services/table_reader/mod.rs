//! Extracted table loading
//!
//! Waypoint documents are run through a table extractor before they reach
//! the assembler. This module reads the extractor's output from disk and
//! concatenates every table into a single row sequence, since a waypoint may
//! start on one page's table and finish on the next.
//!
//! - [`formats`] - JSON table dumps and delimited text decoding
//! - [`reader`] - Input resolution, header skipping and table merging

pub mod formats;
pub mod reader;

#[cfg(test)]
pub mod tests;

pub use formats::TableFormat;
pub use reader::{TableReadResult, TableReadStats, TableReader, resolve_input_paths};
