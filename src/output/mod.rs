//! Output module for rendering result tables
//!
//! This module handles:
//! - The [`Table`] shape every mode produces
//! - Plain line output, bordered console tables and CSV files

mod csv_file;
mod pretty;
mod table;

pub use csv_file::{result_file_name, save_csv, write_csv, DATETIME_FORMAT};
pub use pretty::{format_pretty, print_pretty};
pub use table::Table;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// How results are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Bordered console table
    Pretty,
    /// CSV file in the results directory
    File,
}

/// Formats each row on one line, cells separated by a space
pub fn format_plain(table: &Table) -> String {
    let mut out = String::new();
    for row in table.all_rows() {
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

/// Renders `table` in the requested format
///
/// Without a format the rows are printed as plain lines. For
/// [`OutputFormat::File`] the path of the written file is returned.
pub fn control_output(
    table: &Table,
    format: Option<OutputFormat>,
    mode: &str,
    results_dir: &Path,
) -> OutputResult<Option<PathBuf>> {
    match format {
        None => {
            print!("{}", format_plain(table));
            Ok(None)
        }
        Some(OutputFormat::Pretty) => {
            print_pretty(table);
            Ok(None)
        }
        Some(OutputFormat::File) => save_csv(table, results_dir, mode).map(Some),
    }
}
