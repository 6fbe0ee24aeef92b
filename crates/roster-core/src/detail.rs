//! Per-element differences for the detail view.
//!
//! The classifier only says *that* modifications, equipment or reports
//! changed. These helpers pair the individual elements up so a viewer can
//! show what was added, removed or replaced.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::align::{align, align_keys, Aligned};
use crate::diff::extract::lookup;
use crate::model::{Equipment, Modification, PlayerVersion, Report};

/// How one mapping entry differs between two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Unchanged,
    Added,
    Removed,
    Changed,
}

/// One key of a mapping field, with its value on each side
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDiff<'a, V> {
    pub key: &'a str,
    pub previous: Option<&'a V>,
    pub current: Option<&'a V>,
}

impl<'a, V> EntryDiff<'a, V> {
    /// The value worth showing: the current one, or what was removed
    pub fn shown(&self) -> Option<&'a V> {
        self.current.or(self.previous)
    }
}

impl<V: PartialEq> EntryDiff<'_, V> {
    pub fn status(&self) -> EntryStatus {
        match (self.previous, self.current) {
            (None, Some(_)) => EntryStatus::Added,
            (Some(_), None) => EntryStatus::Removed,
            (Some(a), Some(b)) if a != b => EntryStatus::Changed,
            _ => EntryStatus::Unchanged,
        }
    }
}

/// Align the modification lists of two versions.
///
/// With no previous version every current modification is `Added`.
pub fn modification_changes<'a>(
    previous: Option<&'a PlayerVersion>,
    current: &'a PlayerVersion,
) -> Vec<Aligned<&'a Option<Modification>>> {
    let before: &[Option<Modification>] = previous.map_or(&[][..], |p| p.modifications.as_slice());
    align(before, &current.modifications)
}

/// Equipment slots present in either version, in slot-name order
pub fn equipment_changes<'a>(
    previous: Option<&'a PlayerVersion>,
    current: &'a PlayerVersion,
) -> Vec<EntryDiff<'a, Equipment>> {
    entry_changes(previous.map(|p| &p.equipment), &current.equipment)
}

/// Report categories present in either version, in category order
pub fn report_changes<'a>(
    previous: Option<&'a PlayerVersion>,
    current: &'a PlayerVersion,
) -> Vec<EntryDiff<'a, Report>> {
    entry_changes(previous.map(|p| &p.reports), &current.reports)
}

fn entry_changes<'a, V>(
    previous: Option<&'a BTreeMap<String, Option<V>>>,
    current: &'a BTreeMap<String, Option<V>>,
) -> Vec<EntryDiff<'a, V>> {
    let Some(previous) = previous else {
        return current
            .keys()
            .map(|key| EntryDiff {
                key: key.as_str(),
                previous: None,
                current: lookup(current, key),
            })
            .collect();
    };

    align_keys(previous, current)
        .into_iter()
        .map(|step| {
            let key = match step {
                Aligned::Both(key, _) | Aligned::Removed(key) | Aligned::Added(key) => key,
            };
            EntryDiff {
                key: key.as_str(),
                previous: lookup(previous, key),
                current: lookup(current, key),
            }
        })
        .collect()
}
