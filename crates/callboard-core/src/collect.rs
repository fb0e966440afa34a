//! Reads a [`FormResult`] back out of a rendered signup form.

use crate::dom::Element;
use crate::model::{FormResult, PerformanceEntry};
use crate::page::SignupForm;
use crate::render::CARD_ID_ATTR;

/// Builds the submission from the current form state.
///
/// The name is trimmed. Each card contributes its identifier, the text of
/// every tagged field, and the checked option if any. `extra` is only
/// included when the card shows a non-empty extra row. Nothing is mutated.
pub fn collect(form: &SignupForm) -> FormResult {
    let name = form
        .name_value()
        .map(|value| value.trim().to_string())
        .unwrap_or_default();

    FormResult {
        name,
        performances: form.cards().iter().map(collect_card).collect(),
    }
}

fn collect_card(card: &Element) -> PerformanceEntry {
    let field = |name: &str| {
        card.field(name)
            .map(Element::text_content)
            .unwrap_or_default()
    };

    PerformanceEntry {
        id: card.data(CARD_ID_ATTR).unwrap_or_default().to_string(),
        name: field("name"),
        kind: field("type"),
        date: field("date"),
        day: field("day"),
        start: field("start"),
        arrive: field("arrive"),
        location: field("location"),
        availability: card
            .checked_checkbox()
            .and_then(|checkbox| checkbox.data("option"))
            .and_then(|option| option.parse().ok()),
        extra: Some(field("extra")).filter(|extra| !extra.is_empty()),
    }
}
