//! History parser with validation
//!
//! Parses the TOML history file and validates the format version and the
//! closed category set before any enrichment happens.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use bibtrack_core::Category;

use crate::errors::{LoadError, Result};
use crate::format::{HistoryFile, SUPPORTED_VERSION};

/// Parse a history file from a path
pub fn parse_history_file(path: &Path) -> Result<HistoryFile> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_history_str(&content)
}

/// Parse a history document from a string
pub fn parse_history_str(content: &str) -> Result<HistoryFile> {
    let history: HistoryFile = toml::from_str(content)?;
    validate_history(&history)?;
    Ok(history)
}

/// Validate a parsed history document
fn validate_history(history: &HistoryFile) -> Result<()> {
    if history.version != SUPPORTED_VERSION {
        return Err(LoadError::UnsupportedVersion {
            found: history.version,
            expected: SUPPORTED_VERSION,
        });
    }

    for record in &history.records {
        let undeclared: Vec<String> = record
            .output
            .diff_counts
            .keys()
            .filter(|key| Category::from_str(key).is_err())
            .cloned()
            .collect();
        if !undeclared.is_empty() {
            return Err(LoadError::UndeclaredCategories {
                keys: undeclared,
                source_url: record.hayagriva_source.clone(),
            });
        }

        let cause_total: u64 = record.output.cause_counts.values().sum();
        if !record.output.cause_counts.is_empty() && cause_total != record.output.n_diff {
            tracing::warn!(
                source = %record.hayagriva_source,
                n_diff = record.output.n_diff,
                cause_total,
                "n_diff disagrees with the cause count total"
            );
        }
    }

    Ok(())
}
