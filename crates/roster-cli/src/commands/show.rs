//! Show command
//!
//! Usage: roster show <FILE> --version <N>

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use roster_core::errors::{ExError, RosterError};
use roster_core::history::annotate_with;
use roster_core::render::render_version_detail;
use roster_core::{log_op_end, log_op_start};

use crate::config::Settings;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// History document (JSON) as fetched for one player
    pub file: PathBuf,

    /// Index of the retained version, as listed by `roster history`
    #[arg(short, long)]
    pub version: usize,
}

/// Execute show command
pub fn execute(args: ShowArgs, settings: &Settings) -> Result<()> {
    let start = Instant::now();
    log_op_start!("cli_show", file = %args.file.display(), version = args.version);

    let history = super::read_history(&args.file)?;
    let annotated = annotate_with(&settings.classifier, &history.versions);

    let entry = annotated.get(args.version).ok_or_else(|| {
        ExError::from(RosterError::VersionNotFound {
            index: args.version,
            len: annotated.len(),
        })
        .with_op("show_version")
        .with_entity_id(history.player_id.as_str())
    })?;

    print!("{}", render_version_detail(entry));

    let duration_ms = start.elapsed().as_millis() as u64;
    log_op_end!("cli_show", duration_ms = duration_ms);
    Ok(())
}
