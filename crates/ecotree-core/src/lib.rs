//! ecotree Core - canonical opening hierarchy kernel
//!
//! This crate turns flat `(eco, name, pgn)` opening records into a forest of
//! opening nodes, one node per distinct name prefix:
//! - Move-sequence token counting and opening-name splitting
//! - Canonical resolution of the shortest line per exact name
//! - Hierarchy construction with code accumulation at every level
//! - Nested and flattened render views in deterministic order
//! - Output digests for reproducibility checks
//!
//! Reading and writing files is left to `ecotree-store`.

pub mod canonical_resolver;
pub mod digest;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod render;

// Re-export commonly used types
pub use canonical_resolver::{Candidate, CanonicalResolver};
pub use errors::{EcoTreeError, ExError, ExErrorKind, Result};
pub use model::{OpeningForest, OpeningNode, OpeningRecord};
pub use ops::builder::{build_hierarchy, HierarchyBuilder};
pub use ops::moves::count_moves;
pub use ops::names::{split_name, SplitName};
