//! Single-select behaviour for a card's availability checkboxes.
//!
//! Checkboxes have no native grouping, so exclusivity is enforced by
//! reacting to each change: when a control becomes checked, every sibling
//! in the same card's options block is cleared. Other cards are never
//! touched.

use crate::dom::Element;
use crate::model::Availability;

/// The option controls of one card.
#[derive(Debug)]
pub struct ChoiceGroup<'a> {
    card: &'a mut Element,
}

impl<'a> ChoiceGroup<'a> {
    pub fn new(card: &'a mut Element) -> Self {
        Self { card }
    }

    /// Flips one control the way a click does, then runs the change
    /// reaction. Returns the control's new state.
    pub fn toggle(&mut self, choice: Availability) -> bool {
        let Some(control) = self.control_mut(choice) else {
            return false;
        };
        let checked = !control.is_checked();
        control.set_checked(checked);
        self.on_change(choice);
        checked
    }

    /// Checks one control and clears its siblings.
    pub fn activate(&mut self, choice: Availability) {
        if let Some(control) = self.control_mut(choice) {
            control.set_checked(true);
        }
        self.on_change(choice);
    }

    /// Reaction to a control's state changing.
    ///
    /// If the changed control is now checked, every other control in the
    /// group is unchecked. Unchecking a control changes nothing else.
    pub fn on_change(&mut self, changed: Availability) {
        let now_checked = self
            .options()
            .and_then(|options| options.find(|el| is_control_for(el, changed)))
            .is_some_and(Element::is_checked);
        if !now_checked {
            return;
        }

        if let Some(options) = self.options_mut() {
            options.for_each_mut(&mut |el| {
                if el.is_checkbox() && el.data("option") != Some(changed.as_str()) {
                    el.set_checked(false);
                }
            });
        }
    }

    /// The currently checked choice, if any.
    pub fn active(&self) -> Option<Availability> {
        self.options()?
            .checked_checkbox()?
            .data("option")?
            .parse()
            .ok()
    }

    /// Unchecks every control in the group.
    pub fn clear(&mut self) {
        if let Some(options) = self.options_mut() {
            options.for_each_mut(&mut |el| el.set_checked(false));
        }
    }

    fn options(&self) -> Option<&Element> {
        self.card.find(|el| el.has_class("options"))
    }

    fn options_mut(&mut self) -> Option<&mut Element> {
        self.card.find_mut(|el| el.has_class("options"))
    }

    fn control_mut(&mut self, choice: Availability) -> Option<&mut Element> {
        self.options_mut()?
            .find_mut(|el| is_control_for(el, choice))
    }
}

fn is_control_for(el: &Element, choice: Availability) -> bool {
    el.is_checkbox() && el.data("option") == Some(choice.as_str())
}
