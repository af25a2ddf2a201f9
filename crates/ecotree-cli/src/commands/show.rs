//! Show command
//!
//! Usage: ecotree show <FULL_NAME> [--config <FILE>] [--input <TSV>]...

use clap::Args;

use super::SourceArgs;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Full opening name, e.g. "Sicilian Defense: Najdorf Variation"
    pub name: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Execute show command
pub fn execute(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.source.resolve()?;
    config.validate("command line")?;

    let records = ecotree_store::read_all(&config.inputs)?;
    let forest = ecotree_core::build_hierarchy(&records);

    let node = forest
        .find(&args.name)
        .ok_or_else(|| format!("No opening named '{}'", args.name))?;

    println!("{}", node.full_name());
    println!("  level:     {}", node.level());
    println!("  eco codes: {}", node.codes().collect::<Vec<_>>().join(", "));
    println!("  canonical: {}", node.canonical_moves().unwrap_or("-"));
    for child in node.children() {
        println!("  - {}", child.label());
    }

    Ok(())
}
