//! Detail view of one retained version.

use crate::align::Aligned;
use crate::detail::{equipment_changes, modification_changes, report_changes, EntryStatus};
use crate::diff::TrackedField;
use crate::history::AnnotatedSnapshot;
use crate::model::{Modification, PlayerVersion};

/// Short text for a tracked field's value on one version
pub fn field_value(version: &PlayerVersion, field: TrackedField) -> String {
    fn or_unknown<T: std::fmt::Debug>(value: &Option<T>) -> String {
        value
            .as_ref()
            .map_or_else(|| "unknown".to_string(), |v| format!("{:?}", v))
    }
    fn or_none(value: &Option<Modification>) -> String {
        value
            .as_ref()
            .map_or_else(|| "none".to_string(), |m| m.name.clone())
    }

    match field {
        TrackedField::FirstName => version.first_name.clone(),
        TrackedField::LastName => version.last_name.clone(),
        TrackedField::BattingHandedness => or_unknown(&version.batting_handedness),
        TrackedField::PitchingHandedness => or_unknown(&version.pitching_handedness),
        TrackedField::Home => version.home.clone(),
        TrackedField::Birthseason => version.birthseason.to_string(),
        TrackedField::BirthdayType => or_unknown(&version.birthday_type),
        TrackedField::BirthdayDay => or_unknown(&version.birthday_day),
        TrackedField::BirthdaySuperstarDay => or_unknown(&version.birthday_superstar_day),
        TrackedField::Likes => version.likes.clone(),
        TrackedField::Dislikes => version.dislikes.clone(),
        TrackedField::Number => version.number.to_string(),
        TrackedField::MmolbTeamId => version
            .mmolb_team_id
            .clone()
            .unwrap_or_else(|| "none".to_string()),
        TrackedField::Slot => version
            .slot
            .map_or_else(|| "unknown".to_string(), |s| s.abbreviation().to_string()),
        TrackedField::GreaterBoon => or_none(&version.greater_boon),
        TrackedField::LesserBoon => or_none(&version.lesser_boon),
        TrackedField::Modifications => version.modifications.len().to_string(),
        TrackedField::Equipment => version.equipment.values().flatten().count().to_string(),
        TrackedField::Reports => version.reports.values().flatten().count().to_string(),
    }
}

fn modification_name(m: &Option<Modification>) -> &str {
    m.as_ref().map_or("(unknown modification)", |m| m.name.as_str())
}

/// Render a retained version, marking fields changed since its predecessor.
///
/// Changed fields are prefixed with `*` and show the previous value.
pub fn render_version_detail(entry: &AnnotatedSnapshot<'_>) -> String {
    let current = entry.snapshot;
    let mut out = String::new();

    out.push_str(&format!("## {} ({})\n\n", current.display_name(), current.id));
    out.push_str(&format!("**Changes**: {}\n", entry.changes));
    let birthday = current.birthday_label();
    out.push_str(&format!(
        "**Birthday**: {}{}\n\n",
        birthday.text,
        if birthday.unrecognized { " (?)" } else { "" }
    ));

    out.push_str("### Fields\n\n");
    for field in TrackedField::ALL {
        let value = field_value(current, field);
        match entry.previous {
            Some(previous) if entry.is_changed(field) => out.push_str(&format!(
                "* {}: {} (was {})\n",
                field,
                value,
                field_value(previous, field)
            )),
            _ => out.push_str(&format!("  {}: {}\n", field, value)),
        }
    }
    out.push('\n');

    let modifications = modification_changes(entry.previous, current);
    if !modifications.is_empty() {
        out.push_str("### Modifications\n\n");
        for step in &modifications {
            match step {
                Aligned::Both(_, m) => out.push_str(&format!("  {}\n", modification_name(m))),
                Aligned::Removed(m) => out.push_str(&format!("- {}\n", modification_name(m))),
                Aligned::Added(m) => out.push_str(&format!("+ {}\n", modification_name(m))),
            }
        }
        out.push('\n');
    }

    let equipment = equipment_changes(entry.previous, current);
    if !equipment.is_empty() {
        out.push_str("### Equipment\n\n");
        for slot in &equipment {
            let item = slot
                .shown()
                .map_or_else(|| "empty".to_string(), |e| e.display_name());
            out.push_str(&format!("{} {}: {}\n", marker(slot.status()), slot.key, item));
        }
        out.push('\n');
    }

    let reports = report_changes(entry.previous, current);
    if !reports.is_empty() {
        out.push_str("### Reports\n\n");
        for report in &reports {
            let stars = report
                .shown()
                .map(|r| {
                    r.stars
                        .iter()
                        .map(|(attribute, stars)| format!("{} {}", attribute, stars))
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_else(|| "none".to_string());
            out.push_str(&format!("{} {}: {}\n", marker(report.status()), report.key, stars));
        }
        out.push('\n');
    }

    out
}

fn marker(status: EntryStatus) -> char {
    match status {
        EntryStatus::Unchanged => ' ',
        EntryStatus::Added => '+',
        EntryStatus::Removed => '-',
        EntryStatus::Changed => '*',
    }
}
