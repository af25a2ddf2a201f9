use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::Result;
use crate::model::{OpeningForest, OpeningNode};

/// Nested view of one node and its subtree
///
/// Field names are the external output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NestedNode {
    pub label: String,
    pub full_name: String,
    pub level: usize,
    /// Sorted ECO codes
    pub eco_codes: Vec<String>,
    /// `null` when no line was ever assigned
    pub canonical_pgn: Option<String>,
    /// Children in lexicographic label order
    pub children: Vec<NestedNode>,
}

/// Family label → nested family tree, in lexicographic key order
pub type NestedForest = BTreeMap<String, NestedNode>;

impl From<&OpeningNode> for NestedNode {
    fn from(node: &OpeningNode) -> Self {
        Self {
            label: node.label().to_string(),
            full_name: node.full_name().to_string(),
            level: node.level(),
            eco_codes: node.codes().map(str::to_string).collect(),
            canonical_pgn: node.canonical_moves().map(str::to_string),
            children: node.children().map(NestedNode::from).collect(),
        }
    }
}

/// Build the nested view of the whole forest
pub fn nested_view(forest: &OpeningForest) -> NestedForest {
    forest
        .families()
        .map(|family| (family.label().to_string(), NestedNode::from(family)))
        .collect()
}

/// Encode a nested view as pretty-printed JSON (two-space indent, non-ASCII
/// kept as-is)
///
/// # Errors
///
/// Returns `Serialization` if encoding fails.
pub fn to_json_pretty(view: &NestedForest) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}
