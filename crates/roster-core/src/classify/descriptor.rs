//! Change descriptors produced by the classifier.

use serde::Serialize;
use std::fmt;

use crate::diff::TrackedField;
use crate::model::{Modification, Slot};

/// Which of the two boon slots a boon change refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoonTier {
    Greater,
    Lesser,
}

impl BoonTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoonTier::Greater => "greater",
            BoonTier::Lesser => "lesser",
        }
    }

    pub(crate) fn field(&self) -> TrackedField {
        match self {
            BoonTier::Greater => TrackedField::GreaterBoon,
            BoonTier::Lesser => TrackedField::LesserBoon,
        }
    }
}

impl fmt::Display for BoonTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to a single report category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportChange {
    Generated,
    Changed,
    Deleted,
}

impl ReportChange {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportChange::Generated => "generated",
            ReportChange::Changed => "changed",
            ReportChange::Deleted => "deleted",
        }
    }
}

/// One semantic change between two versions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeKind {
    Born { name: String },
    NoDetectedChange,
    ReportsLive,
    Recomposed { name: String },
    RecompositionReverted,
    Unrecomposed { name: String },
    Augment { attribute: String, value: i32 },
    Party { attribute: String, value: i32 },
    PositionSwap { from: Option<Slot>, to: Option<Slot> },
    InferredRecomposition { name: String },
    BoonGained { tier: BoonTier, boon: Modification },
    BoonLost { tier: BoonTier, boon: Modification },
    BoonReplaced {
        tier: BoonTier,
        from: Modification,
        to: Modification,
    },
    ModificationsChanged,
    EquipmentChanged,
    Report {
        category: String,
        change: ReportChange,
    },
    ReportsChanged,
    TeamChanged,
    /// A differing field no rule explained, reported by name
    Field { field: TrackedField },
}

/// A player with no slot has an empty abbreviation
fn slot_abbreviation(slot: &Option<Slot>) -> &'static str {
    slot.as_ref().map_or("", Slot::abbreviation)
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Born { name } => write!(f, "Born as {}", name),
            ChangeKind::NoDetectedChange => f.write_str("No detected change"),
            ChangeKind::ReportsLive => f.write_str("Reports begin updating live"),
            ChangeKind::Recomposed { name } => write!(f, "Recomposed into {}", name),
            ChangeKind::RecompositionReverted => f.write_str("Recomposed attributes reverted"),
            ChangeKind::Unrecomposed { name } => write!(f, "Unrecomposed back to {}", name),
            ChangeKind::Augment { attribute, value } => {
                write!(f, "Augment: {:+} {}", value, attribute)
            }
            ChangeKind::Party { attribute, value } => write!(f, "Party: {:+} {}", value, attribute),
            ChangeKind::PositionSwap { from, to } => write!(
                f,
                "Swapped from {} to {}",
                slot_abbreviation(from),
                slot_abbreviation(to)
            ),
            ChangeKind::InferredRecomposition { name } => {
                write!(f, "Recomposed into {} (inferred)", name)
            }
            ChangeKind::BoonGained { tier, boon } => write!(f, "Gained {} boon {}", tier, boon),
            ChangeKind::BoonLost { tier, boon } => write!(f, "Lost {} boon {}", tier, boon),
            ChangeKind::BoonReplaced { tier, from, to } => {
                write!(f, "Replaced {} boon {} with {}", tier, from, to)
            }
            ChangeKind::ModificationsChanged => f.write_str("Modifications changed"),
            ChangeKind::EquipmentChanged => f.write_str("Equipment changed"),
            ChangeKind::Report { category, change } => {
                write!(f, "{} report {}", category, change.as_str())
            }
            ChangeKind::ReportsChanged => f.write_str("Reports changed"),
            ChangeKind::TeamChanged => f.write_str("Team changed"),
            ChangeKind::Field { field } => f.write_str(field.as_str()),
        }
    }
}

/// A change together with the tracked fields it accounts for
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Change {
    #[serde(flatten)]
    pub kind: ChangeKind,
    pub fields: Vec<TrackedField>,
}

impl Change {
    pub fn new(kind: ChangeKind, fields: Vec<TrackedField>) -> Self {
        Self { kind, fields }
    }

    pub fn label(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

/// Ordered list of changes explaining one transition
///
/// Order follows the classifier's consumption order, not chronology.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChangeDescriptor(Vec<Change>);

impl ChangeDescriptor {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn push(&mut self, change: Change) {
        self.0.push(change);
    }

    /// Human-readable label of every change, in order
    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(Change::label).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every field claimed by any change, in emission order
    pub fn claimed_fields(&self) -> Vec<TrackedField> {
        self.0.iter().flat_map(|c| c.fields.iter().copied()).collect()
    }
}

impl<'a> IntoIterator for &'a ChangeDescriptor {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ChangeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, change) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            change.fmt(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boon(name: &str) -> Modification {
        Modification {
            name: name.to_string(),
            emoji: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_signed_values() {
        let up = ChangeKind::Augment {
            attribute: "Contact".to_string(),
            value: 5,
        };
        let down = ChangeKind::Party {
            attribute: "Speed".to_string(),
            value: -3,
        };
        assert_eq!(up.to_string(), "Augment: +5 Contact");
        assert_eq!(down.to_string(), "Party: -3 Speed");
    }

    #[test]
    fn test_position_swap_uses_abbreviations() {
        let kind = ChangeKind::PositionSwap {
            from: Some(Slot::Catcher),
            to: Some(Slot::FirstBase),
        };
        assert_eq!(kind.to_string(), "Swapped from C to 1B");

        let unslotted = ChangeKind::PositionSwap {
            from: None,
            to: Some(Slot::Closer),
        };
        assert_eq!(unslotted.to_string(), "Swapped from  to CL");
    }

    #[test]
    fn test_boon_labels() {
        let replaced = ChangeKind::BoonReplaced {
            tier: BoonTier::Lesser,
            from: boon("Fire Eater"),
            to: boon("Demonic"),
        };
        assert_eq!(replaced.to_string(), "Replaced lesser boon Fire Eater with Demonic");
    }

    #[test]
    fn test_descriptor_display_and_claims() {
        let mut descriptor = ChangeDescriptor::new();
        descriptor.push(Change::new(ChangeKind::TeamChanged, vec![TrackedField::MmolbTeamId]));
        descriptor.push(Change::new(
            ChangeKind::Field {
                field: TrackedField::Number,
            },
            vec![TrackedField::Number],
        ));
        assert_eq!(descriptor.to_string(), "Team changed, number");
        assert_eq!(
            descriptor.claimed_fields(),
            vec![TrackedField::MmolbTeamId, TrackedField::Number]
        );
    }

    #[test]
    fn test_change_serializes_flat() {
        let change = Change::new(
            ChangeKind::Report {
                category: "Batting".to_string(),
                change: ReportChange::Generated,
            },
            vec![TrackedField::Reports],
        );
        let value = serde_json::to_value(&change).unwrap();
        assert_eq!(value["kind"], "report");
        assert_eq!(value["category"], "Batting");
        assert_eq!(value["change"], "generated");
        assert_eq!(value["fields"][0], "reports");
    }
}
