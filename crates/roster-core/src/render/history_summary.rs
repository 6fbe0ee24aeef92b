use crate::history::AnnotatedSnapshot;

/// Render one line per change for every retained version.
pub fn render_history_summary(player_id: &str, annotated: &[AnnotatedSnapshot<'_>]) -> String {
    let mut out = String::new();

    out.push_str(&format!("## Player {}\n\n", player_id));
    out.push_str(&format!("**Retained versions**: {}\n\n", annotated.len()));

    if annotated.is_empty() {
        out.push_str("_No versions recorded._\n");
        return out;
    }

    for (index, entry) in annotated.iter().enumerate() {
        let snapshot = entry.snapshot;
        let until = match snapshot.valid_until {
            Some(until) => until.to_rfc3339(),
            None => "current".to_string(),
        };
        out.push_str(&format!(
            "### {}. {} ({} to {})\n\n",
            index,
            snapshot.display_name(),
            snapshot.valid_from.to_rfc3339(),
            until
        ));
        for change in &entry.changes {
            out.push_str(&format!("- {}\n", change));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::annotate;
    use crate::model::PlayerVersion;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_summary_lists_changes_per_version() {
        let mut first = PlayerVersion::new("a", Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap());
        first.first_name = "Sam".to_string();
        first.last_name = "Spade".to_string();
        first.valid_until = Some(Utc.with_ymd_and_hms(2025, 5, 2, 0, 0, 0).unwrap());
        let mut second = first.clone();
        second.id = "b".to_string();
        second.valid_from = Utc.with_ymd_and_hms(2025, 5, 2, 0, 0, 0).unwrap();
        second.valid_until = None;
        second.mmolb_team_id = Some("t2".to_string());

        let history = vec![first, second];
        let summary = render_history_summary("p1", &annotate(&history));

        assert!(summary.starts_with("## Player p1\n"));
        assert!(summary.contains("**Retained versions**: 2"));
        assert!(summary.contains("- Born as Sam Spade\n"));
        assert!(summary.contains("to current)"));
        assert!(summary.contains("- Team changed\n"));
    }

    #[test]
    fn test_summary_of_empty_history() {
        let summary = render_history_summary("p1", &[]);
        assert!(summary.contains("_No versions recorded._"));
    }
}
