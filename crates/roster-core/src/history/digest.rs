//! Stable cache keys for histories.
//!
//! Annotation is a pure function of the input versions, so a digest of the
//! versions identifies an annotation result.

use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::history::PlayerHistory;

/// Compute the SHA-256 digest of a history.
///
/// Hashes the canonical JSON of the player id and the ordered versions.
/// Same input, same digest; reordering versions changes it.
///
/// # Errors
///
/// Returns `RosterError::Serialization` if JSON serialization fails.
pub fn compute_history_digest(history: &PlayerHistory) -> Result<String> {
    let canonical = serde_json::to_string(history)?;
    Ok(hash_string(&canonical))
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
