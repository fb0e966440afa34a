//! Summaries over collected submissions and published lineups.

use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::model::{Availability, FormResult, LineupRecord};

/// Respondent names grouped by the availability they chose.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailabilityTally {
    pub free: Vec<String>,
    pub maybe: Vec<String>,
    pub busy: Vec<String>,
}

impl AvailabilityTally {
    pub fn push(&mut self, availability: Availability, name: impl Into<String>) {
        let bucket = match availability {
            Availability::Free => &mut self.free,
            Availability::Maybe => &mut self.maybe,
            Availability::Busy => &mut self.busy,
        };
        bucket.push(name.into());
    }

    pub fn names(&self, availability: Availability) -> &[String] {
        match availability {
            Availability::Free => &self.free,
            Availability::Maybe => &self.maybe,
            Availability::Busy => &self.busy,
        }
    }
}

/// Groups respondent names per performance identifier.
///
/// Identifiers keep first-seen order and names keep submission order.
/// Entries without an availability are skipped.
pub fn tally(submissions: &[FormResult]) -> IndexMap<String, AvailabilityTally> {
    let mut tallies: IndexMap<String, AvailabilityTally> = IndexMap::new();
    for submission in submissions {
        for entry in &submission.performances {
            let tally = tallies.entry(entry.id.clone()).or_default();
            match entry.availability {
                Some(availability) => tally.push(availability, submission.name.as_str()),
                None => log::warn!(
                    "Skipping {:?} for {:?}: no availability selected",
                    entry.id,
                    submission.name
                ),
            }
        }
    }
    tallies
}

/// Counts how many performer groups list each person across all lineups.
///
/// Sorted by count, highest first; ties keep first-seen order.
pub fn performer_appearances<'a, I>(lineups: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a LineupRecord>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for lineup in lineups {
        for performer in lineup.performers.values().flatten() {
            *counts.entry(performer.clone()).or_insert(0) += 1;
        }
    }
    let mut counts: Vec<(String, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Reads a JSON array of records from a local file.
pub fn read_json_array<T: DeserializeOwned>(path: &Path) -> crate::Result<Vec<T>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PerformanceEntry, PerformanceRecord};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn entry(id: &str, availability: Option<Availability>) -> PerformanceEntry {
        PerformanceEntry {
            id: id.to_string(),
            availability,
            ..Default::default()
        }
    }

    fn submission(name: &str, entries: Vec<PerformanceEntry>) -> FormResult {
        FormResult {
            name: name.to_string(),
            performances: entries,
        }
    }

    #[test]
    fn test_tally_groups_names() {
        let submissions = vec![
            submission(
                "Ann",
                vec![entry("evt-2", Some(Availability::Free)), entry("evt-1", Some(Availability::Busy))],
            ),
            submission(
                "Ben",
                vec![entry("evt-2", Some(Availability::Free)), entry("evt-1", Some(Availability::Maybe))],
            ),
        ];
        let tallies = tally(&submissions);

        let ids: Vec<&String> = tallies.keys().collect();
        assert_eq!(ids, vec!["evt-2", "evt-1"]);
        assert_eq!(tallies["evt-2"].free, vec!["Ann", "Ben"]);
        assert_eq!(tallies["evt-1"].names(Availability::Busy), ["Ann".to_string()]);
        assert_eq!(tallies["evt-1"].names(Availability::Maybe), ["Ben".to_string()]);
    }

    #[test]
    fn test_tally_skips_missing_availability() {
        let submissions = vec![submission("Ann", vec![entry("evt-1", None)])];
        let tallies = tally(&submissions);
        assert_eq!(tallies["evt-1"], AvailabilityTally::default());
    }

    #[test]
    fn test_tally_serializes_with_choice_keys() {
        let submissions = vec![submission("Ann", vec![entry("evt-1", Some(Availability::Maybe))])];
        let value = serde_json::to_value(tally(&submissions)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"evt-1": {"Free": [], "Maybe": ["Ann"], "Busy": []}})
        );
    }

    #[test]
    fn test_performer_appearances_sorted() {
        let show = |name: &str| PerformanceRecord::new(name, "Concert");
        let lineups = vec![
            LineupRecord::new(show("One"))
                .with_group("Strings", ["Zoe", "Adam"])
                .with_group("Choir", ["Mia", "Zoe"]),
            LineupRecord::new(show("Two")).with_group("Choir", ["Mia", "Zoe"]),
        ];

        let counts = performer_appearances(&lineups);
        assert_eq!(
            counts,
            vec![
                ("Zoe".to_string(), 3),
                ("Mia".to_string(), 2),
                ("Adam".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_performer_appearances_ties_keep_first_seen_order() {
        let lineups = vec![LineupRecord::new(PerformanceRecord::new("One", "Concert"))
            .with_group("Duo", ["Bea", "Al"])];
        let counts = performer_appearances(&lineups);
        assert_eq!(counts[0].0, "Bea");
        assert_eq!(counts[1].0, "Al");
    }

    #[test]
    fn test_read_json_array() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Ann", "performances": [{{"id": "evt-1", "name": "", "type": "", "date": "", "day": "", "start": "", "arrive": "", "location": "", "availability": "Free"}}]}}]"#
        )
        .unwrap();

        let submissions: Vec<FormResult> = read_json_array(file.path()).unwrap();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].performances[0].availability, Some(Availability::Free));
    }

    #[test]
    fn test_read_json_array_errors() {
        let missing = read_json_array::<FormResult>(Path::new("/nonexistent/submissions.json"));
        assert!(matches!(missing, Err(crate::Error::Io(_))));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let bad = read_json_array::<FormResult>(file.path());
        assert!(matches!(bad, Err(crate::Error::Serialization(_))));
    }
}
