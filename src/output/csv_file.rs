//! CSV file output

use crate::output::{OutputResult, Table};
use chrono::{DateTime, Local};
use std::io;
use std::path::{Path, PathBuf};

/// Timestamp format used in result file names
pub const DATETIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Result file name for `mode` at `now`, e.g. `pep_2024-05-01_12-00-00.csv`
pub fn result_file_name(mode: &str, now: DateTime<Local>) -> String {
    format!("{}_{}.csv", mode, now.format(DATETIME_FORMAT))
}

/// Writes every row, header first, as CSV
pub fn write_csv<W: io::Write>(table: &Table, writer: W) -> OutputResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for row in table.all_rows() {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Saves the table under `results_dir`, creating it if needed
///
/// # Returns
///
/// The path of the written file
pub fn save_csv(table: &Table, results_dir: &Path, mode: &str) -> OutputResult<PathBuf> {
    std::fs::create_dir_all(results_dir)?;
    let path = results_dir.join(result_file_name(mode, Local::now()));

    let file = std::fs::File::create(&path)?;
    write_csv(table, file)?;

    tracing::info!("Results saved to {}", path.display());
    Ok(path)
}
