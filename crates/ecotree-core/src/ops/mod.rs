pub mod builder;
pub mod moves;
pub mod names;

pub use builder::{build_hierarchy, HierarchyBuilder};
pub use moves::count_moves;
pub use names::{split_name, SplitName};
