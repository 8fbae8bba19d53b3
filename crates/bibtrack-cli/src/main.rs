//! bibtrack CLI
//!
//! Command-line interface for the bibliography tracking pipeline

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "bibtrack")]
#[command(about = "Track how closely a bibliography engine matches its reference output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate the JSON data module for the dashboard
    Generate(commands::generate::GenerateArgs),
    /// Print one record's detail tables
    Report(commands::report::ReportArgs),
    /// Classify the differences between two output files
    Compare(commands::compare::CompareArgs),
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bibtrack=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::execute(args),
        Commands::Report(args) => commands::report::execute(args),
        Commands::Compare(args) => commands::compare::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
