//! Text rendering of annotated histories.
//!
//! Output is Markdown-flavoured text meant for terminals and review notes.
//! Rendering is informational only; it never changes the annotation.

pub mod history_summary;
pub mod version_detail;

pub use history_summary::render_history_summary;
pub use version_detail::{field_value, render_version_detail};
