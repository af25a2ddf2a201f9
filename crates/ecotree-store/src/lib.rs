//! ecotree Store - file collaborators around the opening hierarchy core
//!
//! Provides:
//! - Run configuration (`ecotree.toml`) with ordered input lists
//! - TSV reader for `eco` / `name` / `pgn` opening tables
//! - Writers for the nested JSON and flattened CSV outputs

pub mod config;
pub mod errors;
pub mod reader;
pub mod writer;

// Re-export key types
pub use config::{load_config, OutputConfig, RunConfig};
pub use errors::Result;
pub use reader::{read_all, read_records, ReadReport};
pub use writer::{write_outputs, WrittenOutputs};
