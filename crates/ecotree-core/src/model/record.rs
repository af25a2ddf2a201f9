use serde::{Deserialize, Serialize};

use crate::errors::{EcoTreeError, Result};

/// One flat input row: an ECO code, a full opening name and a move sequence
///
/// All three fields are trimmed and non-empty. Rows that fail this never
/// become records; the reader drops them before the core sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningRecord {
    /// ECO classification code, e.g. `C50`
    pub eco: String,

    /// Full opening name, e.g. `Italian Game: Giuoco Piano`
    pub name: String,

    /// Move sequence in PGN movetext, e.g. `1. e4 e5 2. Nf3`
    pub pgn: String,
}

impl OpeningRecord {
    /// Build a record from raw fields, trimming each one
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` naming the first field that is empty after trimming.
    pub fn try_new(eco: &str, name: &str, pgn: &str) -> Result<Self> {
        let eco = non_empty("eco", eco)?;
        let name = non_empty("name", name)?;
        let pgn = non_empty("pgn", pgn)?;
        Ok(Self { eco, name, pgn })
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EcoTreeError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}
