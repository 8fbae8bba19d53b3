//! Data module generation command
//!
//! Usage: bibtrack generate --history <FILE> --out <FILE> [--cache-dir <DIR>]

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

use bibtrack_history::load_history;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to the history TOML file
    #[arg(long)]
    pub history: PathBuf,

    /// Where to write the JSON data module; `-` writes to stdout
    #[arg(long)]
    pub out: PathBuf,

    /// Comparison cache directory; when it holds both output texts they
    /// are attached to the newest record
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,
}

/// Execute data module generation
pub fn execute(args: GenerateArgs) -> anyhow::Result<()> {
    let json = generate(&args)?;

    if args.out.as_os_str() == "-" {
        println!("{json}");
    } else {
        std::fs::write(&args.out, json)
            .with_context(|| format!("failed to write {}", args.out.display()))?;
        println!("✓ Wrote {}", args.out.display());
    }
    Ok(())
}

/// Build the serialized data module.
fn generate(args: &GenerateArgs) -> anyhow::Result<String> {
    let mut module = load_history(&args.history)
        .with_context(|| format!("failed to load {}", args.history.display()))?;

    if let Some(cache_dir) = &args.cache_dir {
        let attached = module.attach_latest_result(cache_dir)?;
        tracing::info!(attached, "checked comparison cache");
    }

    Ok(module.to_json()?)
}
