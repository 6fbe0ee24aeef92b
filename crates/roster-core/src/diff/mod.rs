//! Field-diff extraction.
//!
//! Determines which tracked fields differ between two player versions.
//!
//! ## Entry point
//!
//! ```ignore
//! use roster_core::diff::extract_diff;
//!
//! let changed = extract_diff(&previous, &current);
//! ```
//!
//! ## Guarantees
//!
//! - **Structural equality**: every field compares by value through its own
//!   typed equality, never by identity.
//! - **Null-tolerant mappings**: an absent equipment or report key equals a
//!   key present with `null`.
//! - **Conservative on malformed input**: a tracked field missing from the
//!   source document of either side is always reported as changed.
//! - **Stable order**: results iterate in tracked-field order.

pub mod extract;
pub mod fields;

pub use extract::extract_diff;
pub use fields::{FieldSet, TrackedField};
