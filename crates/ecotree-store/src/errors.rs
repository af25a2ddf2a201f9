//! Error handling for ecotree-store
//!
//! Wraps ecotree-core ExError with store-specific helpers

use std::path::Path;

use ecotree_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a missing input file error
pub fn missing_input(path: &Path) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op("read_all")
        .with_entity_id(path.display().to_string())
        .with_message("Missing input file")
}

/// Create an error for a header without a required column
pub fn missing_column(path: &str, column: &str) -> ExError {
    ExError::new(ExErrorKind::MissingField)
        .with_op("read_records")
        .with_entity_id(path.to_string())
        .with_message(format!("Header has no '{}' column", column))
}

/// Wrap a failure reading one table of a multi-table run
///
/// The outer error keeps the inner kind so callers can still match on it.
pub fn table_error(path: &Path, err: ExError) -> ExError {
    ExError::new(err.kind())
        .with_op("read_all")
        .with_entity_id(path.display().to_string())
        .with_message("Failed to read input table")
        .with_source(err)
}

/// Create a delimited-text error from csv::Error
pub fn from_csv(operation: &str, source: &str, err: csv::Error) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(operation.to_string())
        .with_entity_id(source.to_string())
        .with_message(err.to_string())
}

/// Create a configuration error
pub fn config_error(path: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidConfig)
        .with_op("load_config")
        .with_entity_id(path.to_string())
        .with_message(reason.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_entity_id(path.display().to_string())
        .with_message(err.to_string())
}
