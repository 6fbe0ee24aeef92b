//! The rule-driven classifier.
//!
//! A `Classifier` owns the working set of unexplained differences for one
//! transition. Every rule claims fields through [`FieldSet::consume`], so a
//! field can only ever be explained once.

use crate::align::{align_keys, Aligned};
use crate::classify::config::ClassifierConfig;
use crate::classify::descriptor::{BoonTier, Change, ChangeDescriptor, ChangeKind, ReportChange};
use crate::diff::extract::lookup;
use crate::diff::{FieldSet, TrackedField};
use crate::model::{Event, PlayerVersion};

use TrackedField::*;

/// Fields that change together when a player is recomposed
const IDENTITY_REQUIRED: &[TrackedField] = &[FirstName, LastName];

/// Fields a recomposition may also reroll
const IDENTITY_OPTIONAL: &[TrackedField] = &[
    BattingHandedness,
    PitchingHandedness,
    Likes,
    Dislikes,
    Home,
    Birthseason,
    BirthdayType,
    BirthdayDay,
    BirthdaySuperstarDay,
    Reports,
];

/// Everything a recomposition event can explain once a name has changed
const IDENTITY_GROUP: &[TrackedField] = &[
    FirstName,
    LastName,
    BattingHandedness,
    PitchingHandedness,
    Likes,
    Dislikes,
    Home,
    Birthseason,
    BirthdayType,
    BirthdayDay,
    BirthdaySuperstarDay,
    Reports,
];

const REPORTS_ONLY: &[TrackedField] = &[Reports];
const NO_FIELDS: &[TrackedField] = &[];

type Rule = fn(&mut Classifier<'_>) -> bool;

/// Residual rules, highest priority first
const RESIDUAL_RULES: &[(&str, Rule)] = &[
    ("slot", |c: &mut Classifier<'_>| c.position_swap()),
    ("identity", |c: &mut Classifier<'_>| c.inferred_recomposition()),
    ("greater_boon", |c: &mut Classifier<'_>| c.boon(BoonTier::Greater)),
    ("lesser_boon", |c: &mut Classifier<'_>| c.boon(BoonTier::Lesser)),
    ("modifications", |c: &mut Classifier<'_>| c.modifications()),
    ("equipment", |c: &mut Classifier<'_>| c.equipment()),
    ("reports", |c: &mut Classifier<'_>| c.reports()),
    ("team", |c: &mut Classifier<'_>| c.team()),
];

/// Classify a transition with the default configuration.
///
/// `previous` is the last retained version (or `None` for the first version),
/// `diff` the field-diff between the two and `events` the events recorded
/// against `current`.
pub fn classify(
    previous: Option<&PlayerVersion>,
    current: &PlayerVersion,
    diff: &FieldSet,
    events: &[Event],
) -> ChangeDescriptor {
    classify_with(&ClassifierConfig::default(), previous, current, diff, events)
}

/// Classify a transition.
///
/// Never fails and never returns an empty descriptor.
pub fn classify_with(
    config: &ClassifierConfig,
    previous: Option<&PlayerVersion>,
    current: &PlayerVersion,
    diff: &FieldSet,
    events: &[Event],
) -> ChangeDescriptor {
    let Some(previous) = previous else {
        let mut changes = ChangeDescriptor::new();
        changes.push(Change::new(
            ChangeKind::Born {
                name: current.display_name(),
            },
            Vec::new(),
        ));
        return changes;
    };

    let mut classifier = Classifier {
        previous,
        current,
        remaining: diff.clone(),
        changes: ChangeDescriptor::new(),
    };

    classifier.live_reports_cutover(config);
    for event in events {
        classifier.apply_event(event);
    }
    classifier.apply_residual_rules();

    let mut changes = classifier.changes;
    if changes.is_empty() {
        changes.push(Change::new(ChangeKind::NoDetectedChange, Vec::new()));
    }
    changes
}

struct Classifier<'a> {
    previous: &'a PlayerVersion,
    current: &'a PlayerVersion,
    remaining: FieldSet,
    changes: ChangeDescriptor,
}

impl<'a> Classifier<'a> {
    fn emit(&mut self, kind: ChangeKind, fields: Vec<TrackedField>) {
        self.changes.push(Change::new(kind, fields));
    }

    /// Claim `required` (plus any present `optional`) and emit `kind` if it fired
    fn rule(
        &mut self,
        required: &[TrackedField],
        optional: &[TrackedField],
        kind: impl FnOnce(&Self) -> ChangeKind,
    ) -> bool {
        match self.remaining.consume(required, optional) {
            Some(fields) => {
                let kind = kind(&*self);
                self.emit(kind, fields);
                true
            }
            None => false,
        }
    }

    fn names_changed(&self) -> bool {
        IDENTITY_REQUIRED
            .iter()
            .any(|field| self.remaining.contains(*field))
    }

    fn live_reports_cutover(&mut self, config: &ClassifierConfig) {
        let cutover = config.live_reports_cutover;
        if self.previous.valid_from < cutover && self.current.valid_from >= cutover {
            self.rule(&[Reports], &[], |_| ChangeKind::ReportsLive);
        }
    }

    fn apply_event(&mut self, event: &Event) {
        let (required, optional, kind): (&[TrackedField], &[TrackedField], ChangeKind) =
            match event {
                Event::Recomposition {
                    new_display_name,
                    reverts_prior_recomposition,
                    ..
                } => {
                    let kind = if !reverts_prior_recomposition {
                        ChangeKind::Recomposed {
                            name: new_display_name.clone(),
                        }
                    } else if *new_display_name == self.previous.display_name() {
                        ChangeKind::RecompositionReverted
                    } else {
                        ChangeKind::Unrecomposed {
                            name: new_display_name.clone(),
                        }
                    };
                    // Either name is enough evidence; with neither, the event claims nothing
                    let claim = if self.names_changed() {
                        IDENTITY_GROUP
                    } else {
                        NO_FIELDS
                    };
                    (NO_FIELDS, claim, kind)
                }
                Event::AttributeAugment {
                    attribute, value, ..
                } => (
                    REPORTS_ONLY,
                    NO_FIELDS,
                    ChangeKind::Augment {
                        attribute: attribute.clone(),
                        value: *value,
                    },
                ),
                Event::Party { attribute, value } => (
                    REPORTS_ONLY,
                    NO_FIELDS,
                    ChangeKind::Party {
                        attribute: attribute.clone(),
                        value: *value,
                    },
                ),
            };

        let fields = self
            .remaining
            .consume(required, optional)
            .unwrap_or_default();
        if fields.is_empty() {
            tracing::debug!(
                event_kind = event.kind_name(),
                player_version = %self.current.id,
                "event references fields with no detected change"
            );
        }
        self.emit(kind, fields);
    }

    fn apply_residual_rules(&mut self) {
        while !self.remaining.is_empty() {
            let mut fired = false;
            for (name, rule) in RESIDUAL_RULES {
                if rule(&mut *self) {
                    tracing::trace!(rule = *name, "residual rule fired");
                    fired = true;
                    break;
                }
            }
            if !fired {
                let fields = self.remaining.drain();
                tracing::debug!(
                    player_version = %self.current.id,
                    unexplained = fields.len(),
                    "reporting unexplained fields by name"
                );
                for field in fields {
                    self.emit(ChangeKind::Field { field }, vec![field]);
                }
            }
        }
    }

    fn position_swap(&mut self) -> bool {
        self.rule(&[Slot], &[], |c| ChangeKind::PositionSwap {
            from: c.previous.slot,
            to: c.current.slot,
        })
    }

    fn inferred_recomposition(&mut self) -> bool {
        self.rule(IDENTITY_REQUIRED, IDENTITY_OPTIONAL, |c| {
            ChangeKind::InferredRecomposition {
                name: c.current.display_name(),
            }
        })
    }

    fn boon(&mut self, tier: BoonTier) -> bool {
        let Some(fields) = self.remaining.consume(&[tier.field()], &[]) else {
            return false;
        };

        let (from, to) = match tier {
            BoonTier::Greater => (&self.previous.greater_boon, &self.current.greater_boon),
            BoonTier::Lesser => (&self.previous.lesser_boon, &self.current.lesser_boon),
        };
        let kind = match (from.clone(), to.clone()) {
            (None, Some(boon)) => ChangeKind::BoonGained { tier, boon },
            (Some(boon), None) => ChangeKind::BoonLost { tier, boon },
            (Some(from), Some(to)) => ChangeKind::BoonReplaced { tier, from, to },
            // Only reachable when the field was missing from a source document
            (None, None) => ChangeKind::Field {
                field: tier.field(),
            },
        };
        self.emit(kind, fields);
        true
    }

    fn modifications(&mut self) -> bool {
        self.rule(&[Modifications], &[], |_| ChangeKind::ModificationsChanged)
    }

    fn equipment(&mut self) -> bool {
        self.rule(&[Equipment], &[], |_| ChangeKind::EquipmentChanged)
    }

    fn reports(&mut self) -> bool {
        let Some(mut fields) = self.remaining.consume(&[Reports], &[]) else {
            return false;
        };

        let (previous, current) = (&self.previous.reports, &self.current.reports);
        let categories: Vec<(String, ReportChange)> = align_keys(previous, current)
            .into_iter()
            .filter_map(|step| {
                let category = match step {
                    Aligned::Both(key, _) | Aligned::Removed(key) | Aligned::Added(key) => key,
                };
                let change = match (lookup(previous, category), lookup(current, category)) {
                    (None, Some(_)) => ReportChange::Generated,
                    (Some(_), None) => ReportChange::Deleted,
                    (Some(a), Some(b)) if a != b => ReportChange::Changed,
                    _ => return None,
                };
                Some((category.clone(), change))
            })
            .collect();

        if categories.is_empty() {
            self.emit(ChangeKind::ReportsChanged, fields);
            return true;
        }

        // The first category change carries the claim on `reports`
        for (category, change) in categories {
            let claimed = std::mem::take(&mut fields);
            self.emit(ChangeKind::Report { category, change }, claimed);
        }
        true
    }

    fn team(&mut self) -> bool {
        self.rule(&[MmolbTeamId], &[], |_| ChangeKind::TeamChanged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::extract_diff;
    use crate::model::{Modification, Report, Slot as Position};
    use chrono::{DateTime, TimeZone, Utc};

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, day, 0, 0, 0).unwrap()
    }

    fn version(id: &str, day: u32) -> PlayerVersion {
        let mut v = PlayerVersion::new(id, at(day));
        v.first_name = "Sam".to_string();
        v.last_name = "Spade".to_string();
        v.slot = Some(Position::Catcher);
        v
    }

    fn boon(name: &str) -> Modification {
        Modification {
            name: name.to_string(),
            emoji: String::new(),
            description: String::new(),
        }
    }

    fn run(prev: &PlayerVersion, cur: &PlayerVersion) -> Vec<String> {
        let diff = extract_diff(prev, cur);
        classify(Some(prev), cur, &diff, &cur.events).labels()
    }

    #[test]
    fn test_born_ignores_diff() {
        let cur = version("a", 1);
        let diff = FieldSet::from([Number, Slot]);
        let changes = classify(None, &cur, &diff, &[]);
        assert_eq!(changes.labels(), vec!["Born as Sam Spade"]);
    }

    #[test]
    fn test_empty_diff_yields_sentinel() {
        let prev = version("a", 1);
        let cur = version("b", 2);
        assert_eq!(run(&prev, &cur), vec!["No detected change"]);
    }

    #[test]
    fn test_position_swap() {
        let prev = version("a", 1);
        let mut cur = version("b", 2);
        cur.slot = Some(Position::FirstBase);
        assert_eq!(run(&prev, &cur), vec!["Swapped from C to 1B"]);
    }

    #[test]
    fn test_boon_transitions() {
        let mut prev = version("a", 1);
        let mut cur = version("b", 2);
        cur.greater_boon = Some(boon("Geometry Expert"));
        prev.lesser_boon = Some(boon("Demonic"));
        assert_eq!(
            run(&prev, &cur),
            vec!["Gained greater boon Geometry Expert", "Lost lesser boon Demonic"]
        );
    }

    #[test]
    fn test_recomposition_revert_to_previous_name() {
        let prev = version("a", 1);
        let mut cur = version("b", 2);
        cur.first_name = "Max".to_string();
        cur.events.push(Event::Recomposition {
            time: at(2),
            new_display_name: "Sam Spade".to_string(),
            reverts_prior_recomposition: true,
        });
        assert_eq!(run(&prev, &cur), vec!["Recomposed attributes reverted"]);

        cur.events[0] = Event::Recomposition {
            time: at(2),
            new_display_name: "Max Spade".to_string(),
            reverts_prior_recomposition: true,
        };
        assert_eq!(run(&prev, &cur), vec!["Unrecomposed back to Max Spade"]);
    }

    #[test]
    fn test_report_categories_in_key_order() {
        let report = |day: i32| Report {
            season: Some(4),
            day_type: None,
            day: Some(day),
            quote: None,
            stars: Default::default(),
        };
        let mut prev = version("a", 1);
        let mut cur = version("b", 2);
        prev.reports.insert("Pitching".to_string(), Some(report(1)));
        prev.reports.insert("Defense".to_string(), Some(report(1)));
        cur.reports.insert("Pitching".to_string(), Some(report(2)));
        cur.reports.insert("Batting".to_string(), Some(report(1)));

        let diff = extract_diff(&prev, &cur);
        let changes = classify(Some(&prev), &cur, &diff, &[]);
        assert_eq!(
            changes.labels(),
            vec![
                "Batting report generated",
                "Defense report deleted",
                "Pitching report changed",
            ]
        );
        assert_eq!(changes.claimed_fields(), vec![Reports]);
    }

    #[test]
    fn test_cutover_claims_reports_once() {
        let config = ClassifierConfig {
            live_reports_cutover: at(2),
        };
        let prev = version("a", 1);
        let mut cur = version("b", 3);
        cur.reports.insert("Batting".to_string(), None);
        cur.reports.insert(
            "Pitching".to_string(),
            Some(Report {
                season: None,
                day_type: None,
                day: None,
                quote: None,
                stars: Default::default(),
            }),
        );

        let diff = extract_diff(&prev, &cur);
        let changes = classify_with(&config, Some(&prev), &cur, &diff, &[]);
        assert_eq!(changes.labels(), vec!["Reports begin updating live"]);
    }

    #[test]
    fn test_cutover_without_report_diff_emits_nothing() {
        let config = ClassifierConfig {
            live_reports_cutover: at(2),
        };
        let prev = version("a", 1);
        let mut cur = version("b", 3);
        cur.number = 7;
        let diff = extract_diff(&prev, &cur);
        let changes = classify_with(&config, Some(&prev), &cur, &diff, &[]);
        assert_eq!(changes.labels(), vec!["number"]);
    }

    #[test]
    fn test_event_with_no_matching_diff_is_tolerated() {
        let prev = version("a", 1);
        let mut cur = version("b", 2);
        cur.events.push(Event::Party {
            attribute: "Speed".to_string(),
            value: 2,
        });
        let diff = extract_diff(&prev, &cur);
        let changes = classify(Some(&prev), &cur, &diff, &cur.events);
        assert_eq!(changes.labels(), vec!["Party: +2 Speed"]);
        assert!(changes.claimed_fields().is_empty());
    }
}
