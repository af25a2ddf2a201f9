use std::collections::BTreeMap;

use super::node::OpeningNode;
use crate::ops::names::split_name;

/// The full opening hierarchy: one tree per family label
///
/// Families are keyed by label so iteration is lexicographic. The forest is
/// built once per run by the hierarchy builder and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpeningForest {
    families: BTreeMap<String, OpeningNode>,
}

impl OpeningForest {
    /// Create an empty forest
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the family root for `label`, creating it on first use
    pub fn family_entry(&mut self, label: &str) -> &mut OpeningNode {
        self.families
            .entry(label.to_string())
            .or_insert_with(|| OpeningNode::family(label))
    }

    /// Get a family root by label
    pub fn family(&self, label: &str) -> Option<&OpeningNode> {
        self.families.get(label)
    }

    /// Family roots in lexicographic label order
    pub fn families(&self) -> impl DoubleEndedIterator<Item = &OpeningNode> + '_ {
        self.families.values()
    }

    /// Find the node for an exact full opening name
    ///
    /// The name is split the same way input rows are, so
    /// `"Sicilian Defense: Najdorf Variation, English Attack"` walks
    /// family → `Najdorf Variation` → `English Attack`.
    pub fn find(&self, full_name: &str) -> Option<&OpeningNode> {
        let split = split_name(full_name);
        let mut current = self.families.get(&split.family)?;
        for segment in &split.variations {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Number of families
    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Number of nodes across all families
    pub fn node_count(&self) -> usize {
        self.families().map(OpeningNode::subtree_size).sum()
    }
}
