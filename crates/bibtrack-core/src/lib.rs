//! bibtrack-core - version tracking and difference classification kernel
//!
//! This crate provides the foundational types and algorithms for tracking
//! how closely a bibliography engine matches its reference output across
//! releases, including:
//! - The closed, ordered difference-category enumeration
//! - Release tables, commit dates, and source-descriptor resolution
//! - Coverage resolution between two release timelines
//! - A line-level difference classification engine with minimal-cause
//!   search and human-readable summaries
//!
//! Everything here is pure, synchronous computation over static tables;
//! file I/O and fixtures live in `bibtrack-history`.

pub mod category;
pub mod coverage;
pub mod diff;
pub mod errors;
pub mod release;
pub mod source;
pub mod summary;

// Re-export commonly used types
pub use category::Category;
pub use coverage::{resolve_coverage, Coverage};
pub use errors::{ResolveError, Result};
pub use release::{CommitDates, Release, ReleaseSet};
pub use source::{Resolved, SourceRef, VersionIndex};
pub use summary::OutputSummary;
