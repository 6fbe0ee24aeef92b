//! Decoding of fetched history documents.
//!
//! The fetch layer hands over a JSON document of the form
//! `{ "player_id": "...", "versions": [ {...}, ... ] }`. Tracked fields that
//! are entirely absent from a version are recorded on the version so the
//! field-diff treats them as changed rather than guessing a value.

use serde_json::{Map, Value};
use std::time::Instant;

use crate::diff::{FieldSet, TrackedField};
use crate::errors::{ExError, Result, RosterError};
use crate::history::PlayerHistory;
use crate::model::PlayerVersion;
use crate::{log_op_end, log_op_error, log_op_start};

/// Parse a history document.
///
/// # Errors
///
/// Returns an [`ExError`] with kind `InvalidHistory` for malformed JSON or a
/// non-object root, `MissingField` when `player_id` or `versions` is absent,
/// and `InvalidVersion` (with the version index) when a version cannot be
/// decoded.
pub fn parse_history_bytes(bytes: &[u8]) -> std::result::Result<PlayerHistory, ExError> {
    let start = Instant::now();
    log_op_start!("parse_history_bytes", bytes = bytes.len());

    match parse_document(bytes) {
        Ok(history) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            log_op_end!(
                "parse_history_bytes",
                duration_ms = duration_ms,
                player_id = %history.player_id,
                versions = history.versions.len()
            );
            Ok(history)
        }
        Err(err) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            log_op_error!("parse_history_bytes", err.clone(), duration_ms = duration_ms);
            Err(ExError::from(err).with_op("parse_history_bytes"))
        }
    }
}

fn parse_document(bytes: &[u8]) -> Result<PlayerHistory> {
    let root: Value = serde_json::from_slice(bytes).map_err(|e| RosterError::InvalidJson {
        message: e.to_string(),
    })?;
    let Value::Object(mut root) = root else {
        return Err(RosterError::NotAnObject);
    };

    let player_id = match root.remove("player_id") {
        Some(Value::String(id)) => id,
        Some(Value::Number(n)) => n.to_string(),
        _ => {
            return Err(RosterError::MissingField {
                field: "player_id".to_string(),
            })
        }
    };

    let versions = match root.remove("versions") {
        Some(Value::Array(versions)) => versions,
        _ => {
            return Err(RosterError::MissingField {
                field: "versions".to_string(),
            })
        }
    };

    let versions = versions
        .into_iter()
        .enumerate()
        .map(|(index, value)| parse_version(index, value))
        .collect::<Result<Vec<_>>>()?;

    Ok(PlayerHistory::new(player_id, versions))
}

fn parse_version(index: usize, value: Value) -> Result<PlayerVersion> {
    let Value::Object(fields) = value else {
        return Err(RosterError::InvalidVersion {
            index,
            message: "version must be an object".to_string(),
        });
    };

    let missing = missing_fields(&fields);
    let mut version: PlayerVersion =
        serde_json::from_value(Value::Object(fields)).map_err(|e| RosterError::InvalidVersion {
            index,
            message: e.to_string(),
        })?;

    if !missing.is_empty() {
        tracing::debug!(
            version_id = %version.id,
            missing = missing.len(),
            "version is missing tracked fields"
        );
    }
    version.missing = missing;
    Ok(version)
}

fn missing_fields(fields: &Map<String, Value>) -> FieldSet {
    TrackedField::ALL
        .into_iter()
        .filter(|f| !f.is_optional_in_source() && !fields.contains_key(f.as_str()))
        .collect()
}
