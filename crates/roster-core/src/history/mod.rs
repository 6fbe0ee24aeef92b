//! Player histories and their annotation.
//!
//! - [`load`] decodes a fetched history document
//! - [`annotate()`] links each retained version to the last retained one and
//!   classifies the transition
//! - [`digest`] derives a stable cache key for a history

pub mod annotate;
pub mod digest;
pub mod load;

use serde::{Deserialize, Serialize};

use crate::model::PlayerVersion;

pub use annotate::{annotate, annotate_with, AnnotatedSnapshot};

/// Every recorded version of one player, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerHistory {
    pub player_id: String,
    pub versions: Vec<PlayerVersion>,
}

impl PlayerHistory {
    pub fn new(player_id: impl Into<String>, versions: Vec<PlayerVersion>) -> Self {
        Self {
            player_id: player_id.into(),
            versions,
        }
    }

    /// Annotate this history with the default classifier configuration
    pub fn annotate(&self) -> Vec<AnnotatedSnapshot<'_>> {
        annotate(&self.versions)
    }
}
