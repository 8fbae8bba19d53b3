//! Difference classification engine.
//!
//! Pairs a reference bibliography output with the engine's output line by
//! line, finds the minimal set of ignore transforms that reconciles each
//! differing pair, and folds the results into an
//! [`crate::summary::OutputSummary`].
//!
//! ## Entry point
//!
//! ```ignore
//! use bibtrack_core::diff::{compare_outputs, summarize};
//!
//! let diffs = compare_outputs(&expected, &actual);
//! let summary = summarize(&diffs, n_entries);
//! let text = bibtrack_core::diff::human_summary::render_summary(&summary);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical classification
//!   and ordering.
//! - **Minimality**: `eq_ignore_min` is the smallest transform
//!   subsequence (in canonical order) that makes a pair equal.
//! - **Closed causes**: every cause label is a `+`-joined combination of
//!   known categories, `All`, or `Unknown`.

pub mod bilingual;
pub mod engine;
pub mod human_summary;
pub mod minimize;
pub mod model;
pub mod transform;

pub use engine::{compare_outputs, summarize};
pub use model::Difference;
