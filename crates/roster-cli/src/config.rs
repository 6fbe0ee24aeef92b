//! CLI configuration.
//!
//! Loaded from the file named by `--config` (or `ROSTER_CONFIG`). Every key is
//! optional; a missing file argument means all defaults.
//!
//! ```toml
//! [classifier]
//! live_reports_cutover = "2025-07-24T00:00:00Z"
//!
//! [logging]
//! format = "json"
//! ```

use anyhow::{Context, Result};
use roster_core::classify::ClassifierConfig;
use roster_core::errors::{ExError, RosterError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormatSetting,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatSetting {
    Pretty,
    Json,
    /// No subscriber is installed unless `--log-format` asks for one
    #[default]
    Off,
}

/// Load settings from `path`, or defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse(&text).with_context(|| format!("invalid config file {}", path.display()))
}

fn parse(text: &str) -> Result<Settings> {
    toml::from_str(text).map_err(|e| {
        ExError::from(RosterError::InvalidConfig {
            message: e.to_string(),
        })
        .with_op("load_config")
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse("").unwrap(), Settings::default());
    }

    #[test]
    fn test_cutover_override() {
        let settings = parse(
            r#"
            [classifier]
            live_reports_cutover = "2025-08-01T00:00:00Z"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(
            settings.classifier.live_reports_cutover,
            Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(settings.logging.format, LogFormatSetting::Json);
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = parse("[database]\nurl = \"x\"\n").unwrap_err();
        let ex = err.downcast_ref::<ExError>().unwrap();
        assert_eq!(ex.code(), "ERR_INVALID_CONFIG");
    }
}
