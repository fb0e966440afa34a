use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One event as listed in the performance data file.
///
/// Only `name` is required. Missing detail strings read as empty so that a
/// sparse record still renders a complete card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    /// Stable card identifier. Falls back to `name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub day: String,

    #[serde(default)]
    pub start: String,

    #[serde(default)]
    pub arrive: String,

    #[serde(default)]
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl PerformanceRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind: kind.into(),
            date: String::new(),
            day: String::new(),
            start: String::new(),
            arrive: String::new(),
            location: String::new(),
            extra: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_schedule(
        mut self,
        date: impl Into<String>,
        day: impl Into<String>,
        start: impl Into<String>,
        arrive: impl Into<String>,
    ) -> Self {
        self.date = date.into();
        self.day = day.into();
        self.start = start.into();
        self.arrive = arrive.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    /// The card identifier: `id` when present and non-empty, otherwise `name`.
    ///
    /// No uniqueness check is made, so two records sharing a name and
    /// lacking ids produce the same identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(&self.name)
    }

    /// The extra note, if it should be shown. Empty strings count as absent.
    #[must_use]
    pub fn extra_note(&self) -> Option<&str> {
        self.extra.as_deref().filter(|extra| !extra.is_empty())
    }
}

/// One event as listed in the lineup data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupRecord {
    #[serde(flatten)]
    pub event: PerformanceRecord,

    /// Group name to members. Both levels keep source order.
    #[serde(default)]
    pub performers: IndexMap<String, Vec<String>>,
}

impl LineupRecord {
    #[must_use]
    pub fn new(event: PerformanceRecord) -> Self {
        Self {
            event,
            performers: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_group<I, S>(mut self, group: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.performers
            .insert(group.into(), members.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_falls_back_to_name() {
        let record = PerformanceRecord::new("Gala Night", "Concert");
        assert_eq!(record.identifier(), "Gala Night");

        let record = record.with_id("evt-1");
        assert_eq!(record.identifier(), "evt-1");
    }

    #[test]
    fn test_empty_id_falls_back_to_name() {
        let record: PerformanceRecord =
            serde_json::from_str(r#"{"id": "", "name": "Gala Night", "type": "Concert"}"#)
                .unwrap();
        assert_eq!(record.id.as_deref(), Some(""));
        assert_eq!(record.identifier(), "Gala Night");
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": "evt-1",
            "name": "Spring Recital",
            "type": "Recital",
            "date": "12 April",
            "day": "Saturday",
            "start": "19:00",
            "arrive": "18:15",
            "location": "St. Mary's Hall",
            "extra": "Black attire"
        }"#;
        let record: PerformanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, "Recital");
        assert_eq!(record.extra_note(), Some("Black attire"));
    }

    #[test]
    fn test_deserialize_null_and_empty_extra() {
        let record: PerformanceRecord =
            serde_json::from_str(r#"{"name": "A", "type": "B", "extra": null}"#).unwrap();
        assert_eq!(record.extra, None);
        assert_eq!(record.extra_note(), None);

        let record: PerformanceRecord =
            serde_json::from_str(r#"{"name": "A", "type": "B", "extra": ""}"#).unwrap();
        assert_eq!(record.extra_note(), None);
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result = serde_json::from_str::<PerformanceRecord>(r#"{"type": "Concert"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_lineup_preserves_group_order() {
        let json = r#"{
            "name": "Winter Show",
            "type": "Concert",
            "performers": {
                "Strings": ["Zoe", "Adam"],
                "Brass": ["Mia"],
                "Choir": []
            }
        }"#;
        let record: LineupRecord = serde_json::from_str(json).unwrap();
        let groups: Vec<&String> = record.performers.keys().collect();
        assert_eq!(groups, vec!["Strings", "Brass", "Choir"]);
        assert_eq!(record.performers["Strings"], vec!["Zoe", "Adam"]);
        assert_eq!(record.event.name, "Winter Show");
    }
}
