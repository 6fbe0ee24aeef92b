//! History command
//!
//! Usage: roster history <FILE> [--format text|json] [--output <FILE>]

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use roster_core::classify::ChangeDescriptor;
use roster_core::diff::FieldSet;
use roster_core::history::digest::compute_history_digest;
use roster_core::history::{annotate_with, AnnotatedSnapshot};
use roster_core::render::render_history_summary;
use roster_core::{log_op_end, log_op_start};

use crate::config::Settings;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// History document (JSON) as fetched for one player
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct HistoryReport<'a> {
    player_id: &'a str,
    digest: String,
    versions: Vec<VersionEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct VersionEntry<'a> {
    id: &'a str,
    previous_id: Option<&'a str>,
    valid_from: DateTime<Utc>,
    valid_until: Option<DateTime<Utc>>,
    differences: Option<&'a FieldSet>,
    changes: &'a ChangeDescriptor,
    labels: Vec<String>,
}

impl<'a> From<&'a AnnotatedSnapshot<'a>> for VersionEntry<'a> {
    fn from(entry: &'a AnnotatedSnapshot<'a>) -> Self {
        Self {
            id: &entry.snapshot.id,
            previous_id: entry.previous.map(|p| p.id.as_str()),
            valid_from: entry.snapshot.valid_from,
            valid_until: entry.snapshot.valid_until,
            differences: entry.differences.as_ref(),
            changes: &entry.changes,
            labels: entry.changes.labels(),
        }
    }
}

/// Execute history command
pub fn execute(args: HistoryArgs, settings: &Settings) -> Result<()> {
    let start = Instant::now();
    log_op_start!("cli_history", file = %args.file.display());

    let history = super::read_history(&args.file)?;
    let annotated = annotate_with(&settings.classifier, &history.versions);

    let rendered = match args.format {
        OutputFormat::Text => render_history_summary(&history.player_id, &annotated),
        OutputFormat::Json => {
            let report = HistoryReport {
                player_id: &history.player_id,
                digest: compute_history_digest(&history)?,
                versions: annotated.iter().map(VersionEntry::from).collect(),
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
    };

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &rendered)?;
        println!("✓ Wrote {} versions to {}", annotated.len(), output_path.display());
    } else {
        print!("{}", rendered);
    }

    let duration_ms = start.elapsed().as_millis() as u64;
    log_op_end!(
        "cli_history",
        duration_ms = duration_ms,
        retained = annotated.len()
    );
    Ok(())
}
