pub mod build;
pub mod show;

use std::path::{Path, PathBuf};

use clap::Args;
use ecotree_store::config::{load_config, RunConfig, DEFAULT_CONFIG_FILE};

/// Where the input tables come from
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Run configuration file (default: ./ecotree.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Input table; repeat for several, read in the given order.
    /// Replaces the configured input list.
    #[arg(short, long = "input")]
    pub inputs: Vec<PathBuf>,
}

impl SourceArgs {
    /// Resolve the run configuration: explicit file, then ./ecotree.toml,
    /// then built-in defaults; `--input` overrides the input list
    pub fn resolve(&self) -> Result<RunConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                load_config(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => RunConfig::default(),
        };

        if !self.inputs.is_empty() {
            config.inputs = self.inputs.clone();
        }
        Ok(config)
    }
}
