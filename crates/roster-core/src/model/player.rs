use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::event::Event;
use crate::diff::FieldSet;

/// One time-bounded version of a player record
///
/// A version is valid over `[valid_from, valid_until)`; `valid_until == None`
/// marks the currently valid version. Within one history versions are ordered
/// by `valid_from` and each `valid_from` equals the previous `valid_until`.
/// Nothing here enforces that ordering; the annotator assumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerVersion {
    /// Opaque identifier of this version
    pub id: String,

    pub valid_from: DateTime<Utc>,
    pub valid_until: Option<DateTime<Utc>>,

    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,

    /// `None` means the source value was not recognized
    #[serde(default, deserialize_with = "lenient")]
    pub batting_handedness: Option<Handedness>,
    /// `None` means the source value was not recognized
    #[serde(default, deserialize_with = "lenient")]
    pub pitching_handedness: Option<Handedness>,

    #[serde(default)]
    pub home: String,
    #[serde(default)]
    pub birthseason: i32,
    #[serde(default, deserialize_with = "lenient")]
    pub birthday_type: Option<DayType>,
    pub birthday_day: Option<i32>,
    pub birthday_superstar_day: Option<i32>,

    #[serde(default)]
    pub likes: String,
    #[serde(default)]
    pub dislikes: String,

    #[serde(default)]
    pub number: i32,
    pub mmolb_team_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub slot: Option<Slot>,

    /// Not tracked: churns on every game
    #[serde(default)]
    pub durability: f64,

    pub greater_boon: Option<Modification>,
    pub lesser_boon: Option<Modification>,

    /// `None` entries are modifications the source could not identify
    #[serde(default)]
    pub modifications: Vec<Option<Modification>>,

    /// Equipment slot name to equipped item; a `None` value is an empty slot
    #[serde(default)]
    pub equipment: BTreeMap<String, Option<Equipment>>,

    /// Report category to report; a `None` value is the same as an absent key
    #[serde(default)]
    pub reports: BTreeMap<String, Option<Report>>,

    /// Events that happened during the transition into this version
    #[serde(default)]
    pub events: Vec<Event>,

    /// Tracked fields that were entirely absent from the source document.
    /// Populated by the history loader; such fields always compare as changed.
    #[serde(skip)]
    pub missing: FieldSet,
}

impl PlayerVersion {
    /// Create a version with the given id and start time and empty attributes
    pub fn new(id: impl Into<String>, valid_from: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            valid_from,
            valid_until: None,
            first_name: String::new(),
            last_name: String::new(),
            batting_handedness: None,
            pitching_handedness: None,
            home: String::new(),
            birthseason: 0,
            birthday_type: None,
            birthday_day: None,
            birthday_superstar_day: None,
            likes: String::new(),
            dislikes: String::new(),
            number: 0,
            mmolb_team_id: None,
            slot: None,
            durability: 0.0,
            greater_boon: None,
            lesser_boon: None,
            modifications: Vec::new(),
            equipment: BTreeMap::new(),
            reports: BTreeMap::new(),
            events: Vec::new(),
            missing: FieldSet::new(),
        }
    }

    /// Full display name, `"{first} {last}"`
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Describe the birthday, flagging values the source did not recognize
    pub fn birthday_label(&self) -> DayLabel {
        let day = match self.birthday_type {
            None => DayLabel::unrecognized("Unknown day"),
            Some(DayType::RegularDay) => match self.birthday_day {
                Some(day) => DayLabel::known(format!("Day {}", day)),
                None => DayLabel::unrecognized("Unknown regular day"),
            },
            Some(DayType::SuperstarDay) => match self.birthday_superstar_day {
                Some(day) => DayLabel::known(format!("Superstar Day {}", day)),
                None => DayLabel::unrecognized("Unknown superstar day"),
            },
            Some(other) => DayLabel::known(format!("{:?}", other)),
        };

        DayLabel {
            text: format!("Season {} {}", self.birthseason, day.text),
            unrecognized: day.unrecognized,
        }
    }
}

/// Decode an enum value, mapping values this build does not know to `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// A human-readable day description plus whether any part was unrecognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLabel {
    pub text: String,
    pub unrecognized: bool,
}

impl DayLabel {
    fn known(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            unrecognized: false,
        }
    }

    fn unrecognized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            unrecognized: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    Right,
    Left,
    Switch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayType {
    Preseason,
    RegularDay,
    SuperstarBreak,
    SuperstarGame,
    SuperstarDay,
    PostseasonPreview,
    PostseasonRound1,
    PostseasonRound2,
    PostseasonRound3,
    Election,
    Holiday,
    Event,
    SpecialEvent,
}

/// Roster position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    LeftField,
    CenterField,
    RightField,
    DesignatedHitter,
    StartingPitcher1,
    StartingPitcher2,
    StartingPitcher3,
    StartingPitcher4,
    StartingPitcher5,
    ReliefPitcher1,
    ReliefPitcher2,
    ReliefPitcher3,
    Closer,
    StartingPitcher,
    ReliefPitcher,
    Pitcher,
}

impl Slot {
    /// Scorecard abbreviation (e.g. `C`, `1B`, `SP3`)
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Slot::Catcher => "C",
            Slot::FirstBase => "1B",
            Slot::SecondBase => "2B",
            Slot::ThirdBase => "3B",
            Slot::Shortstop => "SS",
            Slot::LeftField => "LF",
            Slot::CenterField => "CF",
            Slot::RightField => "RF",
            Slot::DesignatedHitter => "DH",
            Slot::StartingPitcher1 => "SP1",
            Slot::StartingPitcher2 => "SP2",
            Slot::StartingPitcher3 => "SP3",
            Slot::StartingPitcher4 => "SP4",
            Slot::StartingPitcher5 => "SP5",
            Slot::ReliefPitcher1 => "RP1",
            Slot::ReliefPitcher2 => "RP2",
            Slot::ReliefPitcher3 => "RP3",
            Slot::Closer => "CL",
            Slot::StartingPitcher => "SP",
            Slot::ReliefPitcher => "RP",
            Slot::Pitcher => "P",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// A modification, boon or other named effect attached to a player
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modification {
    pub name: String,
    pub emoji: String,
    pub description: String,
}

impl fmt::Display for Modification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectType {
    Flat,
    Additive,
    Multiplicative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentEffect {
    pub attribute: String,
    pub effect_type: EffectType,
    pub value: f64,
}

/// An equipped item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub emoji: String,
    pub name: String,
    pub special_type: Option<String>,
    pub description: Option<String>,
    pub rare_name: Option<String>,
    pub cost: Option<i64>,
    #[serde(default)]
    pub prefixes: Vec<Option<String>>,
    #[serde(default)]
    pub suffixes: Vec<Option<String>>,
    pub rarity: Option<String>,
    /// `None` entries are effects the source could not identify
    #[serde(default)]
    pub effects: Vec<Option<EquipmentEffect>>,
}

impl Equipment {
    /// Item name as shown in game: rare name if any, else prefixes + name + suffixes
    pub fn display_name(&self) -> String {
        let base = match &self.rare_name {
            Some(rare) => rare.clone(),
            None => self
                .prefixes
                .iter()
                .flatten()
                .map(String::as_str)
                .chain(std::iter::once(self.name.as_str()))
                .chain(self.suffixes.iter().flatten().map(String::as_str))
                .collect::<Vec<_>>()
                .join(" "),
        };
        match &self.rarity {
            Some(rarity) => format!("{} ({})", base, rarity),
            None => base,
        }
    }
}

/// A clubhouse report for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub season: Option<i32>,
    pub day_type: Option<DayType>,
    pub day: Option<i32>,
    pub quote: Option<String>,
    /// Attribute name to star count
    #[serde(default)]
    pub stars: BTreeMap<String, u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn version() -> PlayerVersion {
        PlayerVersion::new("v1", Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_display_name_joins_first_and_last() {
        let mut v = version();
        v.first_name = "Sam".to_string();
        v.last_name = "Spade".to_string();
        assert_eq!(v.display_name(), "Sam Spade");
    }

    #[test]
    fn test_birthday_label_regular_day() {
        let mut v = version();
        v.birthseason = 2;
        v.birthday_type = Some(DayType::RegularDay);
        v.birthday_day = Some(41);
        let label = v.birthday_label();
        assert_eq!(label.text, "Season 2 Day 41");
        assert!(!label.unrecognized);
    }

    #[test]
    fn test_birthday_label_flags_unknown_superstar_day() {
        let mut v = version();
        v.birthseason = 1;
        v.birthday_type = Some(DayType::SuperstarDay);
        let label = v.birthday_label();
        assert_eq!(label.text, "Season 1 Unknown superstar day");
        assert!(label.unrecognized);
    }

    #[test]
    fn test_unrecognized_enum_values_decode_as_none() {
        let v: PlayerVersion = serde_json::from_value(serde_json::json!({
            "id": "v1",
            "valid_from": "2025-05-01T00:00:00Z",
            "batting_handedness": "Ambidextrous",
            "pitching_handedness": "Left",
            "slot": "Goalkeeper"
        }))
        .unwrap();
        assert_eq!(v.batting_handedness, None);
        assert_eq!(v.pitching_handedness, Some(Handedness::Left));
        assert_eq!(v.slot, None);
        assert!(v.reports.is_empty());
    }

    #[test]
    fn test_slot_abbreviations() {
        assert_eq!(Slot::Catcher.abbreviation(), "C");
        assert_eq!(Slot::FirstBase.to_string(), "1B");
        assert_eq!(Slot::StartingPitcher3.abbreviation(), "SP3");
        assert_eq!(Slot::Closer.abbreviation(), "CL");
    }

    #[test]
    fn test_equipment_display_name_skips_missing_affixes() {
        let item = Equipment {
            emoji: "🧤".to_string(),
            name: "Glove".to_string(),
            special_type: None,
            description: None,
            rare_name: None,
            cost: None,
            prefixes: vec![Some("Sturdy".to_string()), None],
            suffixes: vec![Some("of Catching".to_string())],
            rarity: Some("Rare".to_string()),
            effects: Vec::new(),
        };
        assert_eq!(item.display_name(), "Sturdy Glove of Catching (Rare)");
    }
}
