//! Field-diff computation between two player versions.

use std::collections::BTreeMap;

use crate::diff::fields::{FieldSet, TrackedField};
use crate::model::PlayerVersion;

/// Compute the set of tracked fields whose values differ between two versions.
///
/// `previous` is the earlier version and `current` the later one. A field
/// recorded as missing from either source document is always included.
pub fn extract_diff(previous: &PlayerVersion, current: &PlayerVersion) -> FieldSet {
    TrackedField::ALL
        .into_iter()
        .filter(|&field| {
            previous.missing.contains(field)
                || current.missing.contains(field)
                || !field_eq(field, previous, current)
        })
        .collect()
}

fn field_eq(field: TrackedField, a: &PlayerVersion, b: &PlayerVersion) -> bool {
    match field {
        TrackedField::FirstName => a.first_name == b.first_name,
        TrackedField::LastName => a.last_name == b.last_name,
        TrackedField::BattingHandedness => a.batting_handedness == b.batting_handedness,
        TrackedField::PitchingHandedness => a.pitching_handedness == b.pitching_handedness,
        TrackedField::Home => a.home == b.home,
        TrackedField::Birthseason => a.birthseason == b.birthseason,
        TrackedField::BirthdayType => a.birthday_type == b.birthday_type,
        TrackedField::BirthdayDay => a.birthday_day == b.birthday_day,
        TrackedField::BirthdaySuperstarDay => a.birthday_superstar_day == b.birthday_superstar_day,
        TrackedField::Likes => a.likes == b.likes,
        TrackedField::Dislikes => a.dislikes == b.dislikes,
        TrackedField::Number => a.number == b.number,
        TrackedField::MmolbTeamId => a.mmolb_team_id == b.mmolb_team_id,
        TrackedField::Slot => a.slot == b.slot,
        TrackedField::GreaterBoon => a.greater_boon == b.greater_boon,
        TrackedField::LesserBoon => a.lesser_boon == b.lesser_boon,
        TrackedField::Modifications => a.modifications == b.modifications,
        TrackedField::Equipment => mapping_eq(&a.equipment, &b.equipment),
        TrackedField::Reports => mapping_eq(&a.reports, &b.reports),
    }
}

/// Compare two nullable-valued mappings, treating an absent key as `None`.
pub(crate) fn mapping_eq<V: PartialEq>(
    a: &BTreeMap<String, Option<V>>,
    b: &BTreeMap<String, Option<V>>,
) -> bool {
    let covers = |x: &BTreeMap<String, Option<V>>, y: &BTreeMap<String, Option<V>>| {
        x.iter().all(|(key, value)| value.as_ref() == lookup(y, key))
    };
    covers(a, b) && covers(b, a)
}

/// Value under `key`, with absent keys and `null` values both reading as `None`
pub(crate) fn lookup<'a, V>(map: &'a BTreeMap<String, Option<V>>, key: &str) -> Option<&'a V> {
    map.get(key).and_then(Option::as_ref)
}
