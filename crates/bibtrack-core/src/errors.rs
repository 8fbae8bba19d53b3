//! Error handling for bibtrack-core
//!
//! Every variant here is a configuration-data inconsistency: the
//! hand-maintained release tables or the input records are stale or
//! malformed, and a maintainer has to fix them. Nothing is retried or
//! degraded; callers abort the load.

use thiserror::Error;

/// Result type alias using ResolveError
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors raised while resolving versions and coverage
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The source descriptor carries neither a tag nor a branch + commit
    #[error("cannot determine a version from source: {descriptor}")]
    UnresolvableSource { descriptor: String },

    /// A tag is missing from the release table
    #[error("unknown release tag: {tag} (release table may be stale)")]
    UnknownTag { tag: String },

    /// A short commit hash is missing from the commit-date table
    #[error("unknown commit hash: {hash} (commit-date table may be stale)")]
    UnknownCommit { hash: String },

    /// A fixture timestamp does not parse as RFC 3339
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    /// A release table is not sorted newest-first
    #[error("release table is not sorted newest-first around tag {tag}")]
    UnsortedReleases { tag: String },

    /// A matched inclusion window contains no releases; the build that
    /// matched must itself be in the window, so the tables disagree
    #[error("release {first_covered} covers no upstream releases; release tables are inconsistent")]
    EmptyCoveredRange { first_covered: String },
}
