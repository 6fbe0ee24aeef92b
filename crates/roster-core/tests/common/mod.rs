use chrono::{DateTime, TimeZone, Utc};
use roster_core::model::{Equipment, Modification, Report};
use roster_core::PlayerVersion;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Midnight UTC on the given day of May 2025
#[allow(dead_code)]
pub fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, day, 0, 0, 0).unwrap()
}

/// A plain player version named Sam Spade, valid from `at(day)`
#[allow(dead_code)]
pub fn player(id: &str, day: u32) -> PlayerVersion {
    let mut v = PlayerVersion::new(id, at(day));
    v.first_name = "Sam".to_string();
    v.last_name = "Spade".to_string();
    v.home = "Harbor Town".to_string();
    v.birthseason = 1;
    v.likes = "Rain".to_string();
    v.dislikes = "Sunshine".to_string();
    v.number = 7;
    v.mmolb_team_id = Some("team-1".to_string());
    v
}

/// Link a sequence of versions so each ends where the next begins
#[allow(dead_code)]
pub fn chain(mut versions: Vec<PlayerVersion>) -> Vec<PlayerVersion> {
    for i in 1..versions.len() {
        versions[i - 1].valid_until = Some(versions[i].valid_from);
    }
    versions
}

#[allow(dead_code)]
pub fn modification(name: &str) -> Modification {
    Modification {
        name: name.to_string(),
        emoji: "✨".to_string(),
        description: format!("{} description", name),
    }
}

#[allow(dead_code)]
pub fn equipment(name: &str) -> Equipment {
    Equipment {
        emoji: "🧢".to_string(),
        name: name.to_string(),
        special_type: None,
        description: None,
        rare_name: None,
        cost: Some(10),
        prefixes: Vec::new(),
        suffixes: Vec::new(),
        rarity: None,
        effects: Vec::new(),
    }
}

#[allow(dead_code)]
pub fn report(day: i32, stars: &[(&str, u8)]) -> Report {
    Report {
        season: Some(1),
        day_type: None,
        day: Some(day),
        quote: None,
        stars: stars
            .iter()
            .map(|(name, count)| (name.to_string(), *count))
            .collect::<BTreeMap<_, _>>(),
    }
}

/// JSON for one version as the fetch layer delivers it
#[allow(dead_code)]
pub fn version_json(id: &str, valid_from: &str, number: i32) -> Value {
    json!({
        "id": id,
        "valid_from": valid_from,
        "valid_until": null,
        "first_name": "Sam",
        "last_name": "Spade",
        "batting_handedness": "Right",
        "pitching_handedness": "Left",
        "home": "Harbor Town",
        "birthseason": 1,
        "birthday_type": "RegularDay",
        "birthday_day": 12,
        "birthday_superstar_day": null,
        "likes": "Rain",
        "dislikes": "Sunshine",
        "number": number,
        "mmolb_team_id": "team-1",
        "slot": "Catcher",
        "durability": 0.9,
        "greater_boon": null,
        "lesser_boon": null,
        "modifications": [],
        "equipment": {},
        "reports": {},
        "events": []
    })
}
