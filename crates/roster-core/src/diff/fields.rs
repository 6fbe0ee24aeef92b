//! Tracked field names and the ordered working set the classifier consumes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A player attribute the classifier knows how to compare and explain.
///
/// Declaration order is the canonical tracked-field order: field sets iterate
/// in this order and the raw-name fallback preserves it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TrackedField {
    FirstName,
    LastName,
    BattingHandedness,
    PitchingHandedness,
    Home,
    Birthseason,
    BirthdayType,
    BirthdayDay,
    BirthdaySuperstarDay,
    Likes,
    Dislikes,
    Number,
    MmolbTeamId,
    Slot,
    GreaterBoon,
    LesserBoon,
    Modifications,
    Equipment,
    Reports,
}

impl TrackedField {
    /// Every tracked field, in canonical order
    pub const ALL: [TrackedField; 19] = [
        TrackedField::FirstName,
        TrackedField::LastName,
        TrackedField::BattingHandedness,
        TrackedField::PitchingHandedness,
        TrackedField::Home,
        TrackedField::Birthseason,
        TrackedField::BirthdayType,
        TrackedField::BirthdayDay,
        TrackedField::BirthdaySuperstarDay,
        TrackedField::Likes,
        TrackedField::Dislikes,
        TrackedField::Number,
        TrackedField::MmolbTeamId,
        TrackedField::Slot,
        TrackedField::GreaterBoon,
        TrackedField::LesserBoon,
        TrackedField::Modifications,
        TrackedField::Equipment,
        TrackedField::Reports,
    ];

    /// Source document key for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackedField::FirstName => "first_name",
            TrackedField::LastName => "last_name",
            TrackedField::BattingHandedness => "batting_handedness",
            TrackedField::PitchingHandedness => "pitching_handedness",
            TrackedField::Home => "home",
            TrackedField::Birthseason => "birthseason",
            TrackedField::BirthdayType => "birthday_type",
            TrackedField::BirthdayDay => "birthday_day",
            TrackedField::BirthdaySuperstarDay => "birthday_superstar_day",
            TrackedField::Likes => "likes",
            TrackedField::Dislikes => "dislikes",
            TrackedField::Number => "number",
            TrackedField::MmolbTeamId => "mmolb_team_id",
            TrackedField::Slot => "slot",
            TrackedField::GreaterBoon => "greater_boon",
            TrackedField::LesserBoon => "lesser_boon",
            TrackedField::Modifications => "modifications",
            TrackedField::Equipment => "equipment",
            TrackedField::Reports => "reports",
        }
    }

    /// Look up a field by its source document key
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }

    /// Fields that may be entirely absent from older documents without the
    /// version counting as malformed: nullable fields and late API additions.
    pub fn is_optional_in_source(&self) -> bool {
        matches!(
            self,
            TrackedField::BattingHandedness
                | TrackedField::PitchingHandedness
                | TrackedField::BirthdayType
                | TrackedField::BirthdayDay
                | TrackedField::BirthdaySuperstarDay
                | TrackedField::MmolbTeamId
                | TrackedField::Slot
                | TrackedField::GreaterBoon
                | TrackedField::LesserBoon
                | TrackedField::Reports
        )
    }
}

impl fmt::Display for TrackedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered set of tracked fields.
///
/// The classifier's working set of unexplained differences. [`FieldSet::consume`]
/// is the only operation the classifier uses to remove fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet(BTreeSet<TrackedField>);

impl FieldSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn insert(&mut self, field: TrackedField) -> bool {
        self.0.insert(field)
    }

    pub fn contains(&self, field: TrackedField) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate in canonical tracked-field order
    pub fn iter(&self) -> impl Iterator<Item = TrackedField> + '_ {
        self.0.iter().copied()
    }

    /// Atomically claim a group of fields.
    ///
    /// If every field in `required` is present, removes all of `required` and
    /// whichever of `optional` are present, and returns the claimed fields in
    /// canonical order. Otherwise leaves the set untouched and returns `None`.
    pub fn consume(
        &mut self,
        required: &[TrackedField],
        optional: &[TrackedField],
    ) -> Option<Vec<TrackedField>> {
        if !required.iter().all(|f| self.0.contains(f)) {
            return None;
        }

        let mut claimed: Vec<TrackedField> = required
            .iter()
            .chain(optional)
            .copied()
            .filter(|f| self.0.remove(f))
            .collect();
        claimed.sort();
        Some(claimed)
    }

    /// Remove and return every remaining field, in canonical order
    pub fn drain(&mut self) -> Vec<TrackedField> {
        std::mem::take(&mut self.0).into_iter().collect()
    }
}

impl FromIterator<TrackedField> for FieldSet {
    fn from_iter<I: IntoIterator<Item = TrackedField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[TrackedField; N]> for FieldSet {
    fn from(fields: [TrackedField; N]) -> Self {
        fields.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TrackedField::*;

    #[test]
    fn test_names_round_trip_through_lookup() {
        for field in TrackedField::ALL {
            assert_eq!(TrackedField::from_name(field.as_str()), Some(field));
        }
        assert_eq!(TrackedField::from_name("durability"), None);
    }

    #[test]
    fn test_all_is_in_declaration_order() {
        let mut sorted = TrackedField::ALL;
        sorted.sort();
        assert_eq!(sorted, TrackedField::ALL);
    }

    #[test]
    fn test_consume_claims_required_and_present_optional() {
        let mut set = FieldSet::from([FirstName, LastName, Home, Slot]);
        let claimed = set.consume(&[FirstName, LastName], &[Home, Likes]);
        assert_eq!(claimed, Some(vec![FirstName, LastName, Home]));
        assert_eq!(set, FieldSet::from([Slot]));
    }

    #[test]
    fn test_consume_is_atomic_on_failure() {
        let mut set = FieldSet::from([FirstName, Home]);
        let before = set.clone();
        assert_eq!(set.consume(&[FirstName, LastName], &[Home]), None);
        assert_eq!(set, before);
    }

    #[test]
    fn test_consume_with_no_required_always_fires() {
        let mut set = FieldSet::from([Number]);
        assert_eq!(set.consume(&[], &[Reports]), Some(vec![]));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_drain_empties_in_order() {
        let mut set = FieldSet::from([Reports, Number, FirstName]);
        assert_eq!(set.drain(), vec![FirstName, Number, Reports]);
        assert!(set.is_empty());
    }
}
