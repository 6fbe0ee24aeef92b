use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A discrete lifecycle event recorded against a version transition
///
/// Events belong to the *later* version of a transition. They are evidence
/// used to explain field changes, not an authoritative diff: an event may
/// mention attributes whose tracked fields did not change at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// The player was recomposed into (or reverted back to) another identity
    Recomposition {
        time: DateTime<Utc>,
        new_display_name: String,
        /// True when this recomposition undoes an earlier one
        #[serde(default)]
        reverts_prior_recomposition: bool,
    },

    /// A scheduled augment adjusted one attribute
    AttributeAugment {
        time: DateTime<Utc>,
        attribute: String,
        value: i32,
    },

    /// A party adjusted one attribute
    Party { attribute: String, value: i32 },
}

impl Event {
    /// Short, stable name of the event variant (used in logs)
    pub fn kind_name(&self) -> &'static str {
        match self {
            Event::Recomposition { .. } => "recomposition",
            Event::AttributeAugment { .. } => "attribute_augment",
            Event::Party { .. } => "party",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_tagged_deserialization() {
        let event: Event = serde_json::from_value(json!({
            "type": "Recomposition",
            "time": "2025-06-01T12:00:00Z",
            "new_display_name": "Max Power"
        }))
        .unwrap();

        match &event {
            Event::Recomposition {
                new_display_name,
                reverts_prior_recomposition,
                ..
            } => {
                assert_eq!(new_display_name, "Max Power");
                assert!(!reverts_prior_recomposition);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_party_without_time() {
        let event: Event = serde_json::from_value(json!({
            "type": "Party",
            "attribute": "Speed",
            "value": -3
        }))
        .unwrap();
        assert!(matches!(event, Event::Party { value: -3, .. }));
        assert_eq!(event.kind_name(), "party");
    }
}
