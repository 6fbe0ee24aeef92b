pub mod history;
pub mod show;

use anyhow::{Context, Result};
use roster_core::errors::{ExError, ExErrorKind};
use roster_core::history::load::parse_history_bytes;
use roster_core::history::PlayerHistory;
use std::path::Path;

/// Read and decode a history document from disk
fn read_history(path: &Path) -> Result<PlayerHistory> {
    let bytes = std::fs::read(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("read_history")
            .with_message(format!("failed to read history file {}: {}", path.display(), e))
    })?;
    let history = parse_history_bytes(&bytes)
        .with_context(|| format!("failed to load history file {}", path.display()))?;
    Ok(history)
}
