//! ecotree CLI
//!
//! Command-line interface for building the opening hierarchy

use clap::{Parser, Subcommand};
use ecotree_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "ecotree")]
#[command(about = "ecotree - Canonical chess opening hierarchy builder", long_about = None)]
struct Cli {
    /// Log output format: pretty or json (RUST_LOG sets the level)
    #[arg(long, global = true, default_value = "pretty")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build the hierarchy and write the nested and flat outputs
    Build(commands::build::BuildArgs),
    /// Show one node of the hierarchy by its full opening name
    Show(commands::show::ShowArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(Profile::parse(&cli.log_format));

    let result = match cli.command {
        Commands::Build(args) => commands::build::execute(args),
        Commands::Show(args) => commands::show::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
