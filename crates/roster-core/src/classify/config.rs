use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Unix time at which clubhouse reports started updating live (2025-07-24T00:00:00Z)
pub const LIVE_REPORTS_CUTOVER_UNIX: i64 = 1_753_315_200;

/// Tunables for the change classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Transitions that cross this instant get a one-time
    /// "Reports begin updating live" change claiming the report diff
    pub live_reports_cutover: DateTime<Utc>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            live_reports_cutover: Utc
                .timestamp_opt(LIVE_REPORTS_CUTOVER_UNIX, 0)
                .single()
                .unwrap_or_default(),
        }
    }
}
