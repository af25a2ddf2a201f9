//! Hierarchy construction.
//!
//! Each record contributes its ECO code to every node on its name path and
//! offers a candidate move sequence at every level. The candidate for a
//! level is the resolver's best line for that exact prefix name when some
//! row carries that name, otherwise the record's own line.

use std::time::Instant;

use crate::canonical_resolver::CanonicalResolver;
use crate::model::{OpeningForest, OpeningNode, OpeningRecord};
use crate::ops::moves::count_moves;
use crate::ops::names::split_name;
use crate::{log_op_end, log_op_start};

/// Applies records to a forest using a precomputed resolver
#[derive(Debug, Clone, Copy)]
pub struct HierarchyBuilder<'r> {
    resolver: &'r CanonicalResolver,
}

impl<'r> HierarchyBuilder<'r> {
    pub fn new(resolver: &'r CanonicalResolver) -> Self {
        Self { resolver }
    }

    /// Merge one record into the forest
    ///
    /// Creates any missing nodes along the record's name path. Applying the
    /// same record again changes nothing.
    pub fn apply(&self, forest: &mut OpeningForest, record: &OpeningRecord) {
        let split = split_name(&record.name);
        let own_length = count_moves(&record.pgn);

        let family = forest.family_entry(&split.family);
        self.update(family, record, own_length);

        let mut current = family;
        for segment in &split.variations {
            let child = current.child_entry(segment);
            self.update(child, record, own_length);
            current = child;
        }
    }

    fn update(&self, node: &mut OpeningNode, record: &OpeningRecord, own_length: usize) {
        node.add_code(&record.eco);
        // A node's full name is the exact prefix string rows would carry.
        match self.resolver.best_for(node.full_name()) {
            Some(best) => {
                node.offer_canonical(&best.pgn, best.length);
            }
            None => {
                node.offer_canonical(&record.pgn, own_length);
            }
        }
    }
}

/// Build the opening forest from records in input order
///
/// Runs both passes: resolve the shortest line per exact name, then walk
/// every record through the builder.
pub fn build_hierarchy(records: &[OpeningRecord]) -> OpeningForest {
    let start = Instant::now();
    log_op_start!("build_hierarchy", record_count = records.len());

    let resolver = CanonicalResolver::from_records(records);
    tracing::debug!(distinct_names = resolver.len(), "resolved canonical lines");

    let builder = HierarchyBuilder::new(&resolver);
    let mut forest = OpeningForest::new();
    for record in records {
        builder.apply(&mut forest, record);
    }

    log_op_end!(
        "build_hierarchy",
        duration_ms = start.elapsed().as_millis() as u64,
        family_count = forest.len(),
        node_count = forest.node_count()
    );
    forest
}
