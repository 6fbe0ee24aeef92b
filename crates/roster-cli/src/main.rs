//! Roster CLI
//!
//! Explains what changed between the recorded versions of a player.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use roster_core::logging_facility::{init, Profile};

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(about = "Roster - player version history explainer", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every retained version with its changes
    History(commands::history::HistoryArgs),
    /// Show one retained version in detail
    Show(commands::show::ShowArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = config::load(cli.config.as_deref()).and_then(|settings| {
        let format = cli.log_format.or(match settings.logging.format {
            config::LogFormatSetting::Pretty => Some(LogFormat::Pretty),
            config::LogFormatSetting::Json => Some(LogFormat::Json),
            config::LogFormatSetting::Off => None,
        });
        match format {
            Some(LogFormat::Pretty) => init(Profile::Development),
            Some(LogFormat::Json) => init(Profile::Production),
            None => {}
        }

        match cli.command {
            Commands::History(args) => commands::history::execute(args, &settings),
            Commands::Show(args) => commands::show::execute(args, &settings),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
