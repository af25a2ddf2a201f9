//! Output digests.
//!
//! A run is reproducible when the same inputs in the same order give
//! byte-identical outputs. Printing a SHA256 of each output makes that easy
//! to check across runs and machines.

use sha2::{Digest, Sha256};

/// Digests of the two rendered outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDigests {
    /// SHA256 of the nested (JSON) output
    pub nested: String,
    /// SHA256 of the flattened (CSV) output
    pub flat: String,
}

impl OutputDigests {
    pub fn compute(nested: &[u8], flat: &[u8]) -> Self {
        Self {
            nested: digest_bytes(nested),
            flat: digest_bytes(flat),
        }
    }
}

/// Hex-encoded SHA256 of `bytes` (64 characters)
pub fn digest_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
