//! Canonical move-sequence resolution.
//!
//! Before the hierarchy is built, every distinct full opening name is mapped
//! to its shortest move sequence. The builder then reads this table instead
//! of comparing rows as it walks them, so the choice depends only on the rows
//! and their input order, never on traversal order.

use std::collections::HashMap;

use crate::model::OpeningRecord;
use crate::ops::moves::count_moves;

/// Best move sequence seen for one exact name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub pgn: String,
    pub length: usize,
    /// Position of the contributing row in the global input order
    pub index: usize,
}

impl Candidate {
    /// Whether `self` should win over `other`: shorter first, then earlier row
    pub fn beats(&self, other: &Candidate) -> bool {
        (self.length, self.index) < (other.length, other.index)
    }
}

/// Lookup from exact full name to its canonical candidate
#[derive(Debug, Clone, Default)]
pub struct CanonicalResolver {
    best: HashMap<String, Candidate>,
}

impl CanonicalResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every name in `records`; record `i` has input index `i`
    pub fn from_records(records: &[OpeningRecord]) -> Self {
        Self::from_partition(records, 0)
    }

    /// Resolve one contiguous slice of the input that starts at global
    /// index `offset`
    ///
    /// Partitions resolved separately can be combined with [`merge`] and
    /// give the same table as resolving the whole input at once.
    ///
    /// [`merge`]: CanonicalResolver::merge
    pub fn from_partition(records: &[OpeningRecord], offset: usize) -> Self {
        let mut resolver = Self::new();
        for (i, record) in records.iter().enumerate() {
            resolver.offer(
                &record.name,
                Candidate {
                    pgn: record.pgn.clone(),
                    length: count_moves(&record.pgn),
                    index: offset + i,
                },
            );
        }
        resolver
    }

    /// Offer a candidate for `name`; keeps whichever of the two wins
    pub fn offer(&mut self, name: &str, candidate: Candidate) {
        match self.best.get_mut(name) {
            Some(current) => {
                if candidate.beats(current) {
                    *current = candidate;
                }
            }
            None => {
                self.best.insert(name.to_string(), candidate);
            }
        }
    }

    /// Fold another resolver into this one
    ///
    /// Selection is by `(length, index)`, so merging is commutative and
    /// associative as long as indices are global.
    pub fn merge(&mut self, other: CanonicalResolver) {
        for (name, candidate) in other.best {
            self.offer(&name, candidate);
        }
    }

    /// Best candidate for an exact full name, if any row carried that name
    pub fn best_for(&self, name: &str) -> Option<&Candidate> {
        self.best.get(name)
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
