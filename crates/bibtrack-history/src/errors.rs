//! Error handling for bibtrack-history
//!
//! Wraps bibtrack-core ResolveError with loader-specific failures. Every
//! variant aborts the load: the input file or the fixtures need a
//! maintainer, and a partially enriched history must never reach the
//! rendering layer.

use std::path::PathBuf;
use thiserror::Error;

use bibtrack_core::ResolveError;

/// Result type alias using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors raised while loading and enriching the history file
#[derive(Error, Debug)]
pub enum LoadError {
    /// The history file could not be read
    #[error("failed to read history file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The history file is not valid TOML for the expected schema
    #[error("failed to parse history file")]
    Toml(#[from] toml::de::Error),

    /// The file declares a format version this loader does not support
    #[error("unsupported history version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// A record's diff_counts carries keys outside the closed category set
    #[error("undeclared categories of difference {keys:?} in record {source_url}")]
    UndeclaredCategories {
        keys: Vec<String>,
        source_url: String,
    },

    /// Version or coverage resolution failed
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The generated artifact could not be serialized
    #[error("failed to serialize the data module")]
    Serialize(#[from] serde_json::Error),
}
