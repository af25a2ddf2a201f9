pub mod forest;
pub mod node;
pub mod record;

pub use forest::OpeningForest;
pub use node::{Canonical, OpeningNode};
pub use record::OpeningRecord;
