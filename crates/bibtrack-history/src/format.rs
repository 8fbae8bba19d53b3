//! History file schema
//!
//! Defines the TOML structure of `history.toml`: one record per tracked
//! comparison run, oldest first, appended to over time.

use serde::Deserialize;
use std::collections::BTreeMap;

/// The format version this loader understands.
pub const SUPPORTED_VERSION: u32 = 1;

/// Top-level history file structure
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryFile {
    /// Format version (must be 1 for this schema)
    pub version: u32,

    /// Tracked comparison runs
    #[serde(default, rename = "record")]
    pub records: Vec<RecordInput>,
}

/// One tracked comparison run, as written to the file
#[derive(Debug, Clone, Deserialize)]
pub struct RecordInput {
    /// Git revision of the entries and the CSL style, as `owner/repo#rev`
    pub entries_rev: String,

    /// The `<updated>` field of the CSL style, kept in its original form
    pub csl_updated_at: String,

    /// Exact engine revision, as a Cargo.lock-style source URL
    pub hayagriva_source: String,

    /// Comparison result counts
    pub output: OutputInput,
}

/// Raw comparison counts, keyed by strings until validation
#[derive(Debug, Clone, Deserialize)]
pub struct OutputInput {
    /// Number of bibliography entries processed
    pub n_entries: u64,

    /// Total number of differing entries
    pub n_diff: u64,

    /// Count per difference category
    #[serde(default)]
    pub diff_counts: BTreeMap<String, u64>,

    /// Count per cause (combination of differences)
    #[serde(default)]
    pub cause_counts: BTreeMap<String, u64>,
}
