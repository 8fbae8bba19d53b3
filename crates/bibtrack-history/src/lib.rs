//! bibtrack-history - history loading and enrichment boundary
//!
//! This crate turns the hand-appended `history.toml` and the built-in
//! release tables into the immutable data module the rendering layer
//! consumes:
//! - Static fixture tables for engine and typst releases
//! - The history file schema, parsing, and fail-fast validation
//! - Enrichment: version resolution, coverage windows, browsable links
//! - The generated JSON artifact
//!
//! The whole pipeline runs once, synchronously; any failure aborts the
//! load.

pub mod artifact;
pub mod enrich;
pub mod errors;
pub mod fixtures;
pub mod format;
pub mod links;
pub mod parser;

use std::path::Path;

pub use artifact::DataModule;
pub use enrich::{ComparisonResult, HistoryRecord, RecordLinks};
pub use errors::{LoadError, Result};
pub use format::{HistoryFile, SUPPORTED_VERSION};

/// Load, validate, and enrich a history file in one call.
pub fn load_history(path: &Path) -> Result<DataModule> {
    let history = parser::parse_history_file(path)?;
    let n_records = history.records.len();
    let records = enrich::enrich(history)?;
    tracing::info!(n_records, "loaded history");
    Ok(DataModule::new(records))
}
