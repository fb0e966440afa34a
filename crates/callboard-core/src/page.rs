//! The page shells that cards are rendered into.
//!
//! [`SignupForm`] owns the signup form tree: hidden form name, the name
//! input and the cards container. [`LineupBoard`] owns the lineup
//! container. Both are the single source of truth for what is displayed.

use std::collections::HashMap;

use crate::choice::ChoiceGroup;
use crate::dom::Element;
use crate::model::{Availability, FormResult, LineupRecord, PerformanceRecord};
use crate::render::{render_into, CARD_ID_ATTR};
use crate::validate::Validation;

/// `id` of the signup form element.
pub const FORM_ID: &str = "performance-form";
/// `id` and `name` of the respondent name input.
pub const NAME_FIELD: &str = "name";
/// Hidden field naming the form for the form-handling endpoint.
pub const FORM_NAME_FIELD: &str = "form-name";
/// `id` of the lineup container.
pub const LINEUPS_ID: &str = "lineups";

/// The signup form and its rendered cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    root: Element,
}

impl SignupForm {
    /// An empty form shell carrying `form_name` as its hidden form name.
    #[must_use]
    pub fn new(form_name: &str) -> Self {
        let root = Element::new("form")
            .with_id(FORM_ID)
            .with_child(Element::hidden_input(FORM_NAME_FIELD, form_name))
            .with_child(
                Element::new("label")
                    .with_text("Name")
                    .with_child(Element::text_input(NAME_FIELD).with_id(NAME_FIELD)),
            )
            .with_child(Element::div("cards"))
            .with_child(
                Element::new("button")
                    .with_id("submit-btn")
                    .with_text("Submit"),
            );
        Self { root }
    }

    /// Renders one card per record into the cards container.
    pub fn populate(&mut self, records: &[PerformanceRecord]) -> usize {
        let Some(container) = self.container_mut() else {
            return 0;
        };
        let count = render_into(container, records);
        for id in self.duplicate_ids() {
            log::warn!("Several cards share the identifier {id:?}; their results will collide");
        }
        count
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The rendered cards, in document order.
    pub fn cards(&self) -> &[Element] {
        self.container().map(Element::children).unwrap_or(&[])
    }

    pub fn card_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.container_mut()?.children_mut().get_mut(index)
    }

    /// The choice group of the card at `index`.
    pub fn choice_group(&mut self, index: usize) -> Option<ChoiceGroup<'_>> {
        self.card_mut(index).map(ChoiceGroup::new)
    }

    /// Clicks one option on one card. Returns the control's new state.
    pub fn toggle(&mut self, index: usize, choice: Availability) -> bool {
        self.choice_group(index)
            .is_some_and(|mut group| group.toggle(choice))
    }

    /// The checked choice on the card at `index`.
    pub fn selection(&mut self, index: usize) -> Option<Availability> {
        self.choice_group(index)?.active()
    }

    /// The name input: `#name`, falling back to any input named `name`.
    pub fn name_input(&self) -> Option<&Element> {
        self.root
            .find(|el| el.tag() == "input" && el.id() == Some(NAME_FIELD))
            .or_else(|| self.root.find(|el| el.input_name() == Some(NAME_FIELD)))
    }

    fn name_input_mut(&mut self) -> Option<&mut Element> {
        if self
            .root
            .find(|el| el.tag() == "input" && el.id() == Some(NAME_FIELD))
            .is_some()
        {
            self.root
                .find_mut(|el| el.tag() == "input" && el.id() == Some(NAME_FIELD))
        } else {
            self.root.find_mut(|el| el.input_name() == Some(NAME_FIELD))
        }
    }

    /// Raw (untrimmed) name input value.
    pub fn name_value(&self) -> Option<&str> {
        self.name_input().and_then(Element::value)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if let Some(input) = self.name_input_mut() {
            input.set_value(name);
        }
    }

    /// Native fields as `(name, value)` pairs in document order.
    ///
    /// Only named text and hidden inputs take part; the availability
    /// checkboxes carry no name.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        self.root
            .find_all(|el| el.input_name().is_some())
            .into_iter()
            .filter_map(|el| Some((el.input_name()?.to_string(), el.value()?.to_string())))
            .collect()
    }

    /// Empties the name and unchecks every option on every card.
    ///
    /// Card content is left as rendered.
    pub fn clear(&mut self) {
        self.set_name("");
        if let Some(container) = self.container_mut() {
            container.for_each_mut(&mut |el| el.set_checked(false));
        }
    }

    /// Card identifiers that appear on more than one card.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut duplicates = Vec::new();
        for id in self.cards().iter().filter_map(|card| card.data(CARD_ID_ATTR)) {
            let count = seen.entry(id).or_insert(0);
            *count += 1;
            if *count == 2 {
                duplicates.push(id.to_string());
            }
        }
        duplicates
    }

    /// Reads the current form state. See [`crate::collect::collect`].
    pub fn collect(&self) -> FormResult {
        crate::collect::collect(self)
    }

    /// Checks the form is ready to submit. See [`crate::validate::validate`].
    pub fn validate(&self) -> Validation {
        crate::validate::validate(self)
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }

    fn container(&self) -> Option<&Element> {
        self.root.find(|el| el.has_class("cards"))
    }

    fn container_mut(&mut self) -> Option<&mut Element> {
        self.root.find_mut(|el| el.has_class("cards"))
    }
}

/// The render-only lineup container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupBoard {
    root: Element,
}

impl Default for LineupBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl LineupBoard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Element::div("lineups").with_id(LINEUPS_ID),
        }
    }

    pub fn populate(&mut self, records: &[LineupRecord]) -> usize {
        render_into(&mut self.root, records)
    }

    pub fn cards(&self) -> &[Element] {
        self.root.children()
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}
