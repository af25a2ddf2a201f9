use serde::Serialize;

use crate::model::{OpeningForest, OpeningNode};

/// Column names of the flattened output, in order
pub const FLAT_HEADER: [&str; 6] = [
    "full_name",
    "level",
    "family",
    "label",
    "eco_codes",
    "canonical_pgn",
];

/// Separator between ECO codes in a flat row
pub const CODE_SEPARATOR: &str = "|";

/// One node of the forest as a table row
///
/// Field order matches `FLAT_HEADER`, so serializers that derive headers
/// from field names produce the same header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatRow {
    pub full_name: String,
    pub level: usize,
    /// Label of the family root this node belongs to
    pub family: String,
    pub label: String,
    /// Sorted codes joined with `|`
    pub eco_codes: String,
    /// Empty when no line was ever assigned
    pub canonical_pgn: String,
}

impl FlatRow {
    fn from_node(node: &OpeningNode, family: &str) -> Self {
        Self {
            full_name: node.full_name().to_string(),
            level: node.level(),
            family: family.to_string(),
            label: node.label().to_string(),
            eco_codes: node.codes().collect::<Vec<_>>().join(CODE_SEPARATOR),
            canonical_pgn: node.canonical_moves().unwrap_or_default().to_string(),
        }
    }
}

/// Enumerate every node in pre-order, lexicographic at each branch
///
/// Families are visited in label order. Within a family an explicit stack is
/// used; children are pushed in reverse label order so they pop in order.
pub fn flat_view(forest: &OpeningForest) -> Vec<FlatRow> {
    let mut rows = Vec::with_capacity(forest.node_count());
    for family in forest.families() {
        let mut stack = vec![family];
        while let Some(node) = stack.pop() {
            rows.push(FlatRow::from_node(node, family.label()));
            stack.extend(node.children().rev());
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_order_lexicographic() {
        let mut forest = OpeningForest::new();
        let family = forest.family_entry("Caro-Kann Defense");
        family.child_entry("Main Line");
        family
            .child_entry("Advance Variation")
            .child_entry("Short Variation");
        forest.family_entry("Alekhine Defense");

        let names: Vec<_> = flat_view(&forest)
            .into_iter()
            .map(|row| row.full_name)
            .collect();

        assert_eq!(
            names,
            vec![
                "Alekhine Defense",
                "Caro-Kann Defense",
                "Caro-Kann Defense: Advance Variation",
                "Caro-Kann Defense: Advance Variation, Short Variation",
                "Caro-Kann Defense: Main Line",
            ]
        );
    }

    #[test]
    fn test_row_fields() {
        let mut forest = OpeningForest::new();
        let family = forest.family_entry("Scandinavian Defense");
        family.add_code("B01");
        let mieses = family.child_entry("Mieses-Kotroc Variation");
        mieses.add_code("B01");
        mieses.add_code("B00");
        mieses.offer_canonical("1. e4 d5 2. exd5 Qxd5", 4);

        let rows = flat_view(&forest);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].canonical_pgn, "");
        assert_eq!(rows[1].family, "Scandinavian Defense");
        assert_eq!(rows[1].label, "Mieses-Kotroc Variation");
        assert_eq!(rows[1].level, 1);
        assert_eq!(rows[1].eco_codes, "B00|B01");
        assert_eq!(rows[1].canonical_pgn, "1. e4 d5 2. exd5 Qxd5");
    }
}
