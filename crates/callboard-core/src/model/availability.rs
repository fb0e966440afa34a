use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A respondent's availability for one performance.
///
/// The declaration order is the order the choices appear on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    Free,
    Maybe,
    Busy,
}

impl Availability {
    /// Every choice, in display order.
    pub const ALL: [Self; 3] = [Self::Free, Self::Maybe, Self::Busy];

    /// The choice name as written to `data-option` and to the submission.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Maybe => "Maybe",
            Self::Busy => "Busy",
        }
    }

    /// Lower-case form used in CSS class names (`checkbox-free`, ...).
    #[must_use]
    pub const fn css_suffix(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Maybe => "maybe",
            Self::Busy => "busy",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown availability option: {0}")]
pub struct UnknownAvailability(pub String);

impl FromStr for Availability {
    type Err = UnknownAvailability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.as_str() == s)
            .ok_or_else(|| UnknownAvailability(s.to_string()))
    }
}
