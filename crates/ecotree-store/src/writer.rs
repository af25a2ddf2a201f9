//! Output writers
//!
//! The nested view is written as pretty JSON and the flat view as CSV with
//! a fixed header. Both are rendered to memory first so their digests can be
//! reported alongside the files.

use std::fs;
use std::path::Path;
use std::time::Instant;

use ecotree_core::digest::OutputDigests;
use ecotree_core::errors::ExError;
use ecotree_core::render::{flat_view, nested_view, to_json_pretty, FlatRow, NestedForest, FLAT_HEADER};
use ecotree_core::{log_op_end, log_op_start, OpeningForest};

use crate::config::OutputConfig;
use crate::errors::{from_csv, io_error, Result};

/// What a call to [`write_outputs`] produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenOutputs {
    pub family_count: usize,
    pub node_count: usize,
    pub digests: OutputDigests,
}

/// Render the nested view as JSON text
///
/// # Errors
///
/// Returns `Serialization` if encoding fails.
pub fn nested_json_string(view: &NestedForest) -> Result<String> {
    to_json_pretty(view).map_err(|e| ExError::from(e).with_op("write_nested_json"))
}

/// Render flat rows as CSV bytes, header first
///
/// The header is written even when there are no rows. Records end with
/// CRLF and fields are quoted only when they need to be.
///
/// # Errors
///
/// Returns `InvalidInput` if a row cannot be encoded.
pub fn flat_csv_bytes(rows: &[FlatRow]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer
        .write_record(FLAT_HEADER)
        .map_err(|e| from_csv("write_flat_csv", "header", e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| from_csv("write_flat_csv", &row.full_name, e))?;
    }
    writer
        .into_inner()
        .map_err(|e| from_csv("write_flat_csv", "buffer", e.into_error().into()))
}

/// Write the nested view to `path`
///
/// # Errors
///
/// Returns `Serialization` or `Io` on failure.
pub fn write_nested_json(path: &Path, view: &NestedForest) -> Result<()> {
    write_file("write_nested_json", path, nested_json_string(view)?.as_bytes())
}

/// Write flat rows to `path`
///
/// # Errors
///
/// Returns `InvalidInput` or `Io` on failure.
pub fn write_flat_csv(path: &Path, rows: &[FlatRow]) -> Result<()> {
    write_file("write_flat_csv", path, &flat_csv_bytes(rows)?)
}

/// Render both views of `forest` and write them to the configured paths
///
/// # Errors
///
/// Returns the first rendering or IO error; the JSON file may already be
/// written when the CSV write fails.
pub fn write_outputs(forest: &OpeningForest, output: &OutputConfig) -> Result<WrittenOutputs> {
    let start = Instant::now();
    log_op_start!("write_outputs");

    let json = nested_json_string(&nested_view(forest))?;
    let rows = flat_view(forest);
    let csv = flat_csv_bytes(&rows)?;

    write_file("write_nested_json", &output.json, json.as_bytes())?;
    write_file("write_flat_csv", &output.csv, &csv)?;

    let written = WrittenOutputs {
        family_count: forest.len(),
        node_count: rows.len(),
        digests: OutputDigests::compute(json.as_bytes(), &csv),
    };

    log_op_end!(
        "write_outputs",
        duration_ms = start.elapsed().as_millis() as u64,
        node_count = written.node_count
    );
    Ok(written)
}

fn write_file(operation: &str, path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(operation, parent, e))?;
    }
    fs::write(path, bytes).map_err(|e| io_error(operation, path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rows_still_write_header() {
        let bytes = flat_csv_bytes(&[]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "full_name,level,family,label,eco_codes,canonical_pgn\r\n"
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let row = FlatRow {
            full_name: "Sicilian Defense: Najdorf Variation, English Attack".to_string(),
            level: 2,
            family: "Sicilian Defense".to_string(),
            label: "English Attack".to_string(),
            eco_codes: "B90".to_string(),
            canonical_pgn: "1. e4 c5".to_string(),
        };

        let text = String::from_utf8(flat_csv_bytes(&[row]).unwrap()).unwrap();
        let data_line = text.lines().nth(1).unwrap();
        assert_eq!(
            data_line,
            "\"Sicilian Defense: Najdorf Variation, English Attack\",2,Sicilian Defense,English Attack,B90,1. e4 c5"
        );
    }
}
