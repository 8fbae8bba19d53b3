//! Version source descriptors
//!
//! A record pins the engine build it was produced with as a
//! Cargo.lock-style source URL, optionally `git+`-prefixed:
//! a `tag` query parameter for releases, or a `branch` parameter plus a
//! commit hash in the fragment for branch builds.

use chrono::{DateTime, Utc};

use crate::errors::{ResolveError, Result};
use crate::release::{CommitDates, ReleaseSet};

/// A parsed version descriptor.
///
/// One interface for both identifier kinds, so callers never branch on
/// which table a descriptor resolves against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    /// A tagged release.
    Tag { tag: String },
    /// A branch build pinned to a commit.
    Branch { branch: String, commit: String },
}

impl SourceRef {
    /// Parse a source descriptor URL.
    ///
    /// # Errors
    ///
    /// `ResolveError::UnresolvableSource` when the descriptor carries
    /// neither a `tag` nor a `branch` with a commit fragment. That is an
    /// inconsistency in the input data, not a recoverable condition.
    pub fn parse(source: &str) -> Result<Self> {
        let url = source.strip_prefix("git+").unwrap_or(source);
        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (url, None),
        };
        let query = rest.split_once('?').map(|(_, q)| q).unwrap_or("");

        let mut tag = None;
        let mut branch = None;
        for pair in query.split('&') {
            match pair.split_once('=') {
                Some(("tag", value)) if !value.is_empty() => tag = Some(value),
                Some(("branch", value)) if !value.is_empty() => branch = Some(value),
                _ => {}
            }
        }

        if let Some(tag) = tag {
            return Ok(SourceRef::Tag {
                tag: tag.to_string(),
            });
        }
        if let Some(branch) = branch {
            if let Some(commit) = fragment.filter(|f| !f.is_empty()) {
                return Ok(SourceRef::Branch {
                    branch: branch.to_string(),
                    commit: commit.to_string(),
                });
            }
        }
        Err(ResolveError::UnresolvableSource {
            descriptor: source.to_string(),
        })
    }
}

/// The human-readable label and publication date a descriptor resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub label: String,
    pub date: DateTime<Utc>,
}

/// Unified lookup over a release table and a commit-date table.
#[derive(Debug, Clone, Copy)]
pub struct VersionIndex<'a> {
    releases: &'a ReleaseSet,
    commits: &'a CommitDates,
}

impl<'a> VersionIndex<'a> {
    pub fn new(releases: &'a ReleaseSet, commits: &'a CommitDates) -> Self {
        Self { releases, commits }
    }

    /// Resolve a descriptor to its label and date.
    ///
    /// Tags resolve to `tag` / the release timestamp; branch builds to
    /// `"{branch}\n({hash7})"` / the commit timestamp.
    ///
    /// # Errors
    ///
    /// `UnknownTag` / `UnknownCommit` when the hand-maintained tables do
    /// not know the identifier. A miss means the tables are stale and must
    /// be updated, so it aborts the load rather than producing a record
    /// with no date.
    pub fn resolve(&self, source: &SourceRef) -> Result<Resolved> {
        match source {
            SourceRef::Tag { tag } => {
                let date = self
                    .releases
                    .date_of(tag)
                    .ok_or_else(|| ResolveError::UnknownTag { tag: tag.clone() })?;
                Ok(Resolved {
                    label: tag.clone(),
                    date,
                })
            }
            SourceRef::Branch { branch, commit } => {
                let short: String = commit.chars().take(7).collect();
                let date = self
                    .commits
                    .date_of(&short)
                    .ok_or(ResolveError::UnknownCommit { hash: short.clone() })?;
                Ok(Resolved {
                    label: format!("{branch}\n({short})"),
                    date,
                })
            }
        }
    }
}
