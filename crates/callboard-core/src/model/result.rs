use serde::{Deserialize, Serialize};

use crate::model::Availability;

/// The aggregated submission, read back from a rendered signup form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormResult {
    /// Respondent name, trimmed.
    pub name: String,

    /// One entry per card, in document order.
    pub performances: Vec<PerformanceEntry>,
}

/// What one card showed, plus the respondent's choice for it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerformanceEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub day: String,
    pub start: String,
    pub arrive: String,
    pub location: String,

    /// `None` when nothing was selected; serialized as `null`.
    pub availability: Option<Availability>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl FormResult {
    /// Pretty JSON, as carried in the `form-data` submission field.
    pub fn to_pretty_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
