//! Change classification.
//!
//! Explains the field-diff between two consecutive player versions as an
//! ordered list of human-readable changes.
//!
//! ## Entry point
//!
//! ```ignore
//! use roster_core::classify::classify;
//!
//! let diff = roster_core::diff::extract_diff(&previous, &current);
//! let changes = classify(Some(&previous), &current, &diff, &current.events);
//! println!("{}", changes);
//! ```
//!
//! ## Rule order
//!
//! 1. No predecessor: a single "Born" change.
//! 2. Live-report cutover marker.
//! 3. Events, in the order given.
//! 4. Residual rules, highest priority first, until every field is claimed;
//!    unmatched fields are emitted by name.
//!
//! Every differing field is claimed by exactly one change. Classification
//! never fails.

pub mod config;
pub mod descriptor;
pub mod engine;

pub use config::ClassifierConfig;
pub use descriptor::{BoonTier, Change, ChangeDescriptor, ChangeKind, ReportChange};
pub use engine::{classify, classify_with};
