//! Run configuration
//!
//! A run is described by an ordered list of input tables and the two output
//! paths. Input order matters: equal-length lines for the same name are
//! broken by first occurrence, so the list order is part of what makes a run
//! reproducible.
//!
//! ```toml
//! inputs = ["chess-openings/a.tsv", "chess-openings/b.tsv"]
//!
//! [output]
//! json = "openings_hierarchy.json"
//! csv = "openings_flat.csv"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{config_error, io_error, Result};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "ecotree.toml";

/// Volumes of the standard opening table, in classification order
const DEFAULT_VOLUMES: [&str; 5] = ["a", "b", "c", "d", "e"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Input tables, read and concatenated in this order
    pub inputs: Vec<PathBuf>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Nested hierarchy output
    pub json: PathBuf,
    /// Flattened table output
    pub csv: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            inputs: DEFAULT_VOLUMES
                .iter()
                .map(|volume| Path::new("chess-openings").join(format!("{}.tsv", volume)))
                .collect(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: PathBuf::from("openings_hierarchy.json"),
            csv: PathBuf::from("openings_flat.csv"),
        }
    }
}

impl RunConfig {
    /// Check the configuration can describe a run
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if there are no inputs or both outputs share a path.
    pub fn validate(&self, source: &str) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(config_error(source, "at least one input is required"));
        }
        if self.output.json == self.output.csv {
            return Err(config_error(
                source,
                "json and csv outputs must be different files",
            ));
        }
        Ok(())
    }
}

/// Load and validate a configuration file
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `InvalidConfig` if it does
/// not parse or fails validation.
pub fn load_config(path: &Path) -> Result<RunConfig> {
    let content = fs::read_to_string(path).map_err(|e| io_error("load_config", path, e))?;
    parse_config_str(&content, &path.display().to_string())
}

/// Parse and validate configuration text; `source` names it in errors
///
/// # Errors
///
/// Returns `InvalidConfig` if the text does not parse or fails validation.
pub fn parse_config_str(content: &str, source: &str) -> Result<RunConfig> {
    let config: RunConfig = toml::from_str(content)
        .map_err(|e| config_error(source, &format!("TOML parse error: {}", e)))?;
    config.validate(source)?;
    Ok(config)
}
