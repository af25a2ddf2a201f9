//! Build command
//!
//! Usage: ecotree build [--config <FILE>] [--input <TSV>]... [--json <FILE>] [--csv <FILE>]

use clap::Args;
use std::path::PathBuf;

use super::SourceArgs;

#[derive(Debug, Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Nested JSON output path (overrides the configuration)
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Flat CSV output path (overrides the configuration)
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Execute build command
pub fn execute(args: BuildArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = args.source.resolve()?;
    if let Some(json) = args.json {
        config.output.json = json;
    }
    if let Some(csv) = args.csv {
        config.output.csv = csv;
    }
    config.validate("command line")?;

    let records = ecotree_store::read_all(&config.inputs)?;
    let forest = ecotree_core::build_hierarchy(&records);
    let written = ecotree_store::write_outputs(&forest, &config.output)?;

    println!(
        "Wrote {} and {}",
        config.output.json.display(),
        config.output.csv.display()
    );
    println!("  records:  {}", records.len());
    println!("  families: {}", written.family_count);
    println!("  nodes:    {}", written.node_count);
    println!("  json sha256: {}", written.digests.nested);
    println!("  csv sha256:  {}", written.digests.flat);

    Ok(())
}
