//! Output comparison command
//!
//! Usage: bibtrack compare <EXPECTED> <ACTUAL> [--details] [--n-entries <N>]
//!
//! Classifies the line-level differences between the reference output and
//! the engine's output, and prints the summary that feeds a history
//! record.

use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};

use bibtrack_core::diff::human_summary::{render_details, render_summary};
use bibtrack_core::diff::{compare_outputs, summarize};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Path to the reference output
    pub expected: PathBuf,

    /// Path to the engine's output
    pub actual: PathBuf,

    /// Also print every difference with its cause
    #[arg(long)]
    pub details: bool,

    /// Number of entries compared; defaults to the reference line count
    #[arg(long)]
    pub n_entries: Option<u64>,
}

/// Execute the compare command
pub fn execute(args: CompareArgs) -> anyhow::Result<()> {
    print!("{}", render_comparison(&args)?);
    Ok(())
}

fn render_comparison(args: &CompareArgs) -> anyhow::Result<String> {
    let read = |path: &Path| {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
    };
    let expected = read(&args.expected)?;
    let actual = read(&args.actual)?;

    let diffs = compare_outputs(&expected, &actual);
    let n_entries = args
        .n_entries
        .unwrap_or_else(|| expected.lines().count() as u64);
    let summary = summarize(&diffs, n_entries);

    let mut out = String::new();
    if args.details {
        out.push_str(&render_details(&diffs));
        out.push('\n');
    }
    out.push_str(&render_summary(&summary));
    Ok(out)
}
