//! History annotation with compaction.
//!
//! Each retained version is compared against the last *retained* version, not
//! the raw predecessor. Versions with no tracked difference are dropped, so
//! `previous` always means "last observed distinct state".

use std::time::Instant;

use crate::classify::{classify_with, ChangeDescriptor, ClassifierConfig};
use crate::diff::{extract_diff, FieldSet, TrackedField};
use crate::model::PlayerVersion;
use crate::{log_op_end, log_op_start};

/// A retained version with its link to the previous retained version
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedSnapshot<'a> {
    pub snapshot: &'a PlayerVersion,
    /// `None` only for the first version of the history
    pub previous: Option<&'a PlayerVersion>,
    /// Fields that differ from `previous`; `None` when there is no predecessor
    pub differences: Option<FieldSet>,
    pub changes: ChangeDescriptor,
}

impl AnnotatedSnapshot<'_> {
    /// Whether `field` differs from the previous retained version
    ///
    /// Always false for the first version.
    pub fn is_changed(&self, field: TrackedField) -> bool {
        self.differences
            .as_ref()
            .is_some_and(|diff| diff.contains(field))
    }
}

/// Annotate a history with the default classifier configuration.
pub fn annotate(history: &[PlayerVersion]) -> Vec<AnnotatedSnapshot<'_>> {
    annotate_with(&ClassifierConfig::default(), history)
}

/// Annotate a history.
///
/// The first version is always retained. The output is never longer than the
/// input and never fails.
pub fn annotate_with<'a>(
    config: &ClassifierConfig,
    history: &'a [PlayerVersion],
) -> Vec<AnnotatedSnapshot<'a>> {
    let start = Instant::now();
    log_op_start!("annotate_history", versions = history.len());

    let mut annotated: Vec<AnnotatedSnapshot<'a>> = Vec::with_capacity(history.len());
    for snapshot in history {
        let previous = annotated.last().map(|a| a.snapshot);

        let differences = match previous {
            Some(previous) => {
                let diff = extract_diff(previous, snapshot);
                if diff.is_empty() {
                    tracing::trace!(version_id = %snapshot.id, "dropping unchanged version");
                    continue;
                }
                Some(diff)
            }
            None => None,
        };

        let changes = classify_with(
            config,
            previous,
            snapshot,
            differences.as_ref().unwrap_or(&FieldSet::new()),
            &snapshot.events,
        );

        annotated.push(AnnotatedSnapshot {
            snapshot,
            previous,
            differences,
            changes,
        });
    }

    let duration_ms = start.elapsed().as_millis() as u64;
    log_op_end!(
        "annotate_history",
        duration_ms = duration_ms,
        versions = history.len(),
        retained = annotated.len()
    );
    annotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn version(id: &str, day: u32, number: i32) -> PlayerVersion {
        let mut v = PlayerVersion::new(id, Utc.with_ymd_and_hms(2025, 5, day, 0, 0, 0).unwrap());
        v.first_name = "Sam".to_string();
        v.last_name = "Spade".to_string();
        v.number = number;
        v
    }

    #[test]
    fn test_empty_history() {
        assert!(annotate(&[]).is_empty());
    }

    #[test]
    fn test_first_version_is_born() {
        let history = vec![version("a", 1, 7)];
        let annotated = annotate(&history);
        assert_eq!(annotated.len(), 1);
        assert!(annotated[0].previous.is_none());
        assert!(annotated[0].differences.is_none());
        assert!(!annotated[0].is_changed(TrackedField::Number));
        assert_eq!(annotated[0].changes.labels(), vec!["Born as Sam Spade"]);
    }

    #[test]
    fn test_unchanged_versions_are_dropped() {
        let mut churn = version("b", 2, 7);
        churn.durability = 0.3;
        let history = vec![version("a", 1, 7), churn, version("c", 3, 8)];

        let annotated = annotate(&history);
        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated[1].snapshot.id, "c");
        assert_eq!(annotated[1].previous.map(|p| p.id.as_str()), Some("a"));
        assert!(annotated[1].is_changed(TrackedField::Number));
        assert_eq!(annotated[1].changes.labels(), vec!["number"]);
    }
}
