use std::collections::{BTreeMap, BTreeSet};

/// Representative move sequence chosen for a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonical {
    pub moves: String,
    pub length: usize,
}

/// OpeningNode - one distinct name prefix in the opening hierarchy
///
/// A family node (level 0) owns the text before the colon of an opening
/// name; each deeper node owns one comma-separated variation segment.
/// Children are exclusively owned and kept in label order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningNode {
    label: String,
    full_name: String,
    level: usize,
    codes: BTreeSet<String>,
    canonical: Option<Canonical>,
    children: BTreeMap<String, OpeningNode>,
}

impl OpeningNode {
    /// Create a family root; its full name is its label
    pub fn family(label: &str) -> Self {
        Self::with_name(label.to_string(), label.to_string(), 0)
    }

    fn with_name(label: String, full_name: String, level: usize) -> Self {
        Self {
            label,
            full_name,
            level,
            codes: BTreeSet::new(),
            canonical: None,
            children: BTreeMap::new(),
        }
    }

    /// Get the child for `label`, creating it on first use
    ///
    /// The child's full name extends this node's: `": "` after a family,
    /// `", "` after a variation. That is exactly how the name appears in
    /// the input rows, so it doubles as the resolver key.
    pub fn child_entry(&mut self, label: &str) -> &mut OpeningNode {
        let separator = if self.level == 0 { ": " } else { ", " };
        let level = self.level + 1;
        let parent_name = &self.full_name;
        self.children.entry(label.to_string()).or_insert_with(|| {
            let full_name = format!("{}{}{}", parent_name, separator, label);
            Self::with_name(label.to_string(), full_name, level)
        })
    }

    /// Record that `eco` maps to this name level
    pub fn add_code(&mut self, eco: &str) {
        if !self.codes.contains(eco) {
            self.codes.insert(eco.to_string());
        }
    }

    /// Offer a candidate move sequence; it replaces the current canonical
    /// only when strictly shorter (or when none is set yet)
    ///
    /// Returns true if the canonical changed.
    pub fn offer_canonical(&mut self, moves: &str, length: usize) -> bool {
        let replace = match &self.canonical {
            Some(current) => length < current.length,
            None => true,
        };
        if replace {
            self.canonical = Some(Canonical {
                moves: moves.to_string(),
                length,
            });
        }
        replace
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// ECO codes in sorted order
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.codes.iter().map(String::as_str)
    }

    pub fn code_count(&self) -> usize {
        self.codes.len()
    }

    pub fn canonical(&self) -> Option<&Canonical> {
        self.canonical.as_ref()
    }

    pub fn canonical_moves(&self) -> Option<&str> {
        self.canonical.as_ref().map(|c| c.moves.as_str())
    }

    pub fn canonical_length(&self) -> Option<usize> {
        self.canonical.as_ref().map(|c| c.length)
    }

    pub fn child(&self, label: &str) -> Option<&OpeningNode> {
        self.children.get(label)
    }

    /// Children in lexicographic label order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &OpeningNode> + '_ {
        self.children.values()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this one
    pub fn subtree_size(&self) -> usize {
        1 + self.children().map(OpeningNode::subtree_size).sum::<usize>()
    }
}
