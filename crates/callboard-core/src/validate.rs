//! Presence checks run before a submission is sent.

use crate::page::SignupForm;

pub const NAME_REQUIRED: &str = "Please enter your name before submitting.";
pub const MISSING_SELECTION_PREFIX: &str =
    "Please select an availability option for the following performance(s):";
pub const FORM_VALID: &str = "Form is valid";

/// Outcome of [`validate`]. `message` is meant for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub message: String,
}

impl Validation {
    fn valid() -> Self {
        Self {
            valid: true,
            message: FORM_VALID.to_string(),
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// Converts to a `Result`, carrying the message in
    /// [`crate::Error::Validation`].
    pub fn into_result(self) -> crate::Result<()> {
        if self.valid {
            Ok(())
        } else {
            Err(crate::Error::Validation(self.message))
        }
    }
}

/// Checks, in order, that a name was entered and that every card has a
/// selection. Stops at the first failure and never alters the form.
///
/// Cards lacking a selection are listed one per line by display name, or
/// as `Card N` when the name cannot be read.
pub fn validate(form: &SignupForm) -> Validation {
    let has_name = form
        .name_value()
        .is_some_and(|name| !name.trim().is_empty());
    if !has_name {
        return Validation::invalid(NAME_REQUIRED);
    }

    let unfilled: Vec<String> = form
        .cards()
        .iter()
        .enumerate()
        .filter(|(_, card)| card.checked_checkbox().is_none())
        .map(|(index, card)| {
            card.field("name")
                .map(|el| el.text_content())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| format!("Card {}", index + 1))
        })
        .collect();

    if unfilled.is_empty() {
        Validation::valid()
    } else {
        Validation::invalid(format!(
            "{MISSING_SELECTION_PREFIX}\n{}",
            unfilled.join("\n")
        ))
    }
}
