//! TSV reader for opening tables
//!
//! Tables are tab-separated with a header row naming at least the `eco`,
//! `name` and `pgn` columns (in any order; other columns are ignored).
//! Fields are trimmed and rows with any empty field are skipped, so every
//! record handed to the core is complete.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use ecotree_core::{log_op_end, log_op_error, log_op_start, OpeningRecord};

use crate::errors::{from_csv, io_error, missing_column, missing_input, table_error, Result};

/// Required header columns
pub const COLUMNS: [&str; 3] = ["eco", "name", "pgn"];

/// Records read from one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadReport {
    /// Where the records came from
    pub source: String,
    /// Complete records, in file order
    pub records: Vec<OpeningRecord>,
    /// Rows dropped for having an empty or missing field
    pub skipped: usize,
}

/// Read one table from disk
///
/// # Errors
///
/// Returns `Io` if the file cannot be opened, `MissingField` if the header
/// lacks a required column and `InvalidInput` for malformed rows.
pub fn read_records(path: &Path) -> Result<ReadReport> {
    let file = File::open(path).map_err(|e| io_error("read_records", path, e))?;
    read_records_from(file, &path.display().to_string())
}

/// Read one table from any reader; `source` names it in errors and logs
///
/// # Errors
///
/// Returns `MissingField` if the header lacks a required column and
/// `InvalidInput` for rows that are not valid delimited text.
pub fn read_records_from<R: Read>(input: R, source: &str) -> Result<ReadReport> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| from_csv("read_records", source, e))?
        .clone();
    let mut positions = [0usize; 3];
    for (slot, column) in positions.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| missing_column(source, column))?;
    }
    let [eco_at, name_at, pgn_at] = positions;

    let mut records = Vec::new();
    let mut skipped = 0;
    for row in reader.records() {
        let row = row.map_err(|e| from_csv("read_records", source, e))?;
        let field = |at: usize| row.get(at).unwrap_or_default();
        match OpeningRecord::try_new(field(eco_at), field(name_at), field(pgn_at)) {
            Ok(record) => records.push(record),
            Err(err) => {
                skipped += 1;
                tracing::debug!(
                    source,
                    line = ?row.position().map(|p| p.line()),
                    reason = %err,
                    "skipping incomplete row"
                );
            }
        }
    }

    tracing::debug!(
        path = source,
        record_count = records.len(),
        skipped,
        "read opening table"
    );
    Ok(ReadReport {
        source: source.to_string(),
        records,
        skipped,
    })
}

/// Read and concatenate several tables in the given order
///
/// Every path is checked before any is read, so a missing volume fails the
/// run before partial work is done.
///
/// # Errors
///
/// Returns `NotFound` for the first missing path. A table that fails to read
/// gives an error of the same kind with the [`read_records`] error as its
/// source.
pub fn read_all(paths: &[PathBuf]) -> Result<Vec<OpeningRecord>> {
    let start = Instant::now();
    log_op_start!("read_all", input_count = paths.len());

    if let Some(missing) = paths.iter().find(|p| !p.exists()) {
        let err = missing_input(missing);
        log_op_error!(
            "read_all",
            err.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        return Err(err);
    }

    let mut records = Vec::new();
    let mut skipped = 0;
    for path in paths {
        let report = match read_records(path) {
            Ok(report) => report,
            Err(e) => {
                let err = table_error(path, e);
                log_op_error!(
                    "read_all",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                return Err(err);
            }
        };
        skipped += report.skipped;
        records.extend(report.records);
    }

    log_op_end!(
        "read_all",
        duration_ms = start.elapsed().as_millis() as u64,
        record_count = records.len(),
        skipped = skipped
    );
    Ok(records)
}
