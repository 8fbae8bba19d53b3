//! Record detail report command
//!
//! Usage: bibtrack report --history <FILE> [--index <N>]
//!
//! Text rendition of the dashboard's detail pane for one record,
//! defaulting to the newest one.

use anyhow::Context;
use clap::Args;
use std::fmt::Write as _;
use std::path::PathBuf;

use bibtrack_core::diff::human_summary::render_summary;
use bibtrack_history::{load_history, HistoryRecord};

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Path to the history TOML file
    #[arg(long)]
    pub history: PathBuf,

    /// Zero-based record index; defaults to the newest record
    #[arg(long)]
    pub index: Option<usize>,
}

/// Execute the report command
pub fn execute(args: ReportArgs) -> anyhow::Result<()> {
    print!("{}", render_report(&args)?);
    Ok(())
}

fn render_report(args: &ReportArgs) -> anyhow::Result<String> {
    let module = load_history(&args.history)
        .with_context(|| format!("failed to load {}", args.history.display()))?;
    anyhow::ensure!(!module.records.is_empty(), "history has no records");

    let index = args.index.unwrap_or(module.records.len() - 1);
    let record = module.records.get(index).with_context(|| {
        format!(
            "record index {index} out of range (0..{})",
            module.records.len()
        )
    })?;

    Ok(render_record(record, index, module.records.len()))
}

fn render_record(record: &HistoryRecord, index: usize, total: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Record {} of {total}", index + 1);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Engine version: {} — {}",
        record.label.replace('\n', " "),
        record.date.to_rfc3339()
    );
    let _ = writeln!(out, "  {}", record.links.source);
    let _ = writeln!(out, "CSL style updated at: {}", record.csl_updated_at);
    let _ = writeln!(out, "Entries revision: {}", record.entries_rev);
    if let Some(entries) = &record.links.entries {
        let _ = writeln!(out, "  {entries}");
    }
    match &record.coverage {
        Some(coverage) => {
            let (oldest, newest) = &coverage.covered_range;
            let _ = writeln!(
                out,
                "First bundled by typst {} (covers {oldest} through {newest})",
                coverage.first_covered
            );
        }
        None => {
            let _ = writeln!(out, "Not yet bundled by a typst release");
        }
    }

    let share = if record.output.n_entries == 0 {
        0.0
    } else {
        100.0 * record.output.n_diff as f64 / record.output.n_entries as f64
    };
    let _ = writeln!(
        out,
        "\n{} of {} entries differ ≈ {share:.0}%",
        record.output.n_diff, record.output.n_entries
    );
    let _ = writeln!(out);
    out.push_str(&render_summary(&record.output));
    out
}
