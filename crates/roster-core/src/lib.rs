//! Roster Core - change classification for player version histories
//!
//! This crate turns an ordered history of player versions into an ordered list
//! of human-readable explanations of what changed between consecutive versions:
//! - Typed player version and lifecycle event models
//! - LCS sequence alignment for list and mapping fields
//! - Field-diff extraction over the fixed set of tracked fields
//! - The rule-driven change classifier
//! - History annotation with compaction of unchanged versions
//! - Text rendering of annotated histories
//!
//! The engine is pure and synchronous: it never performs I/O and never fails.
//! Loading a fetched history document is the only fallible operation.

pub mod align;
pub mod classify;
pub mod detail;
pub mod diff;
pub mod errors;
pub mod history;
pub mod logging_facility;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use align::{align, Aligned};
pub use classify::{classify, classify_with, Change, ChangeDescriptor, ChangeKind, ClassifierConfig};
pub use diff::{extract_diff, FieldSet, TrackedField};
pub use errors::{ExError, ExErrorKind, Result, RosterError};
pub use history::{annotate, annotate_with, AnnotatedSnapshot, PlayerHistory};
pub use model::{Event, PlayerVersion};
