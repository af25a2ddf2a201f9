//! Read-only views of a built forest.
//!
//! - `nested`: one tree per family, children in label order, for JSON output
//! - `flat`: pre-order enumeration of every node, for tabular output

pub mod flat;
pub mod nested;

pub use flat::{flat_view, FlatRow, FLAT_HEADER};
pub use nested::{nested_view, to_json_pretty, NestedForest, NestedNode};
