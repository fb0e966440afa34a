//! Card construction.
//!
//! A card is `div.card[data-performance-id]` holding a header, a details
//! block, and either the availability options (signup) or the performer
//! groups (lineup). Construction is pure; appending to a container is the
//! only side effect, and happens in [`render_into`].

use indexmap::IndexMap;

use crate::dom::Element;
use crate::model::{Availability, LineupRecord, PerformanceRecord};

/// Attribute holding the card identifier, without the `data-` prefix.
pub const CARD_ID_ATTR: &str = "performance-id";

/// Something that renders to one card.
pub trait RenderCard {
    fn render_card(&self) -> Element;
}

impl RenderCard for PerformanceRecord {
    fn render_card(&self) -> Element {
        performance_card(self)
    }
}

impl RenderCard for LineupRecord {
    fn render_card(&self) -> Element {
        lineup_card(self)
    }
}

/// Appends one card per record to `container`, in input order.
///
/// Returns the number of cards appended.
pub fn render_into<R: RenderCard>(container: &mut Element, records: &[R]) -> usize {
    for record in records {
        container.append_child(record.render_card());
    }
    records.len()
}

/// A signup card: header, details, and the Free/Maybe/Busy options.
#[must_use]
pub fn performance_card(record: &PerformanceRecord) -> Element {
    card_shell(record).with_child(options())
}

/// A lineup card: header, details, and one block per performer group.
#[must_use]
pub fn lineup_card(record: &LineupRecord) -> Element {
    card_shell(&record.event).with_child(performer_groups(&record.performers))
}

fn card_shell(record: &PerformanceRecord) -> Element {
    Element::div("card")
        .with_data(CARD_ID_ATTR, record.identifier())
        .with_child(header(record))
        .with_child(details(record))
}

fn header(record: &PerformanceRecord) -> Element {
    Element::div("header")
        .with_child(
            Element::new("h2")
                .with_text(record.name.as_str())
                .with_data("field", "name"),
        )
        .with_child(
            Element::new("h3")
                .with_text(record.kind.as_str())
                .with_data("field", "type"),
        )
}

/// Detail rows as `(label, value, field)`, in display order.
fn detail_rows(record: &PerformanceRecord) -> Vec<(&'static str, &str, &'static str)> {
    let mut rows = vec![
        ("Date: ", record.date.as_str(), "date"),
        ("Day: ", record.day.as_str(), "day"),
        ("Start: ", record.start.as_str(), "start"),
        ("Arrive: ", record.arrive.as_str(), "arrive"),
        ("Address: ", record.location.as_str(), "location"),
    ];
    if let Some(extra) = record.extra_note() {
        rows.push(("Extra: ", extra, "extra"));
    }
    rows
}

fn details(record: &PerformanceRecord) -> Element {
    detail_rows(record)
        .into_iter()
        .fold(Element::div("details"), |details, (label, value, field)| {
            details.with_child(
                Element::div("detail-row")
                    .with_child(Element::div("key").with_text(label))
                    .with_child(
                        Element::div("value")
                            .with_text(value)
                            .with_data("field", field),
                    ),
            )
        })
}

fn options() -> Element {
    Availability::ALL
        .into_iter()
        .fold(Element::div("options"), |options, choice| {
            let suffix = choice.css_suffix();
            let checkbox = Element::checkbox()
                .with_class(&format!("checkbox-{suffix}"))
                .with_data("option", choice.as_str());
            let label = Element::new("label")
                .with_class("checkbox-container")
                .with_child(checkbox)
                .with_child(Element::new("span").with_class(&format!("checkmark checkmark-{suffix}")));

            options.with_child(
                Element::div("option")
                    .with_child(Element::new("p").with_text(choice.as_str()))
                    .with_child(label),
            )
        })
}

fn performer_groups(performers: &IndexMap<String, Vec<String>>) -> Element {
    let mut block = Element::div("performers");
    for (group, members) in performers {
        let mut group_el =
            Element::div("performer-group").with_child(Element::div("group-name").with_text(group.as_str()));
        for member in members {
            group_el.append_child(Element::div("group-member").with_text(member.as_str()));
        }
        block.append_child(group_el);
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recital() -> PerformanceRecord {
        PerformanceRecord::new("Spring Recital", "Recital")
            .with_id("evt-1")
            .with_schedule("12 April", "Saturday", "19:00", "18:15")
            .with_location("St. Mary's Hall")
    }

    fn detail_fields(card: &Element) -> Vec<String> {
        card.find(|el| el.has_class("details"))
            .unwrap()
            .find_all(|el| el.has_class("value"))
            .into_iter()
            .map(|el| el.data("field").unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_card_identifier_and_header() {
        let card = performance_card(&recital());
        assert!(card.has_class("card"));
        assert_eq!(card.data(CARD_ID_ATTR), Some("evt-1"));
        assert_eq!(card.field("name").unwrap().tag(), "h2");
        assert_eq!(card.field("name").unwrap().text(), Some("Spring Recital"));
        assert_eq!(card.field("type").unwrap().tag(), "h3");
    }

    #[test]
    fn test_identifier_falls_back_to_name() {
        let record = PerformanceRecord::new("Gala Night", "Concert");
        let card = performance_card(&record);
        assert_eq!(card.data(CARD_ID_ATTR), Some("Gala Night"));

        let card = performance_card(&record.with_id(""));
        assert_eq!(card.data(CARD_ID_ATTR), Some("Gala Night"));
    }

    #[test]
    fn test_detail_rows_fixed_order() {
        let card = performance_card(&recital());
        assert_eq!(detail_fields(&card), vec!["date", "day", "start", "arrive", "location"]);

        let card = performance_card(&recital().with_extra("Black attire"));
        assert_eq!(
            detail_fields(&card),
            vec!["date", "day", "start", "arrive", "location", "extra"]
        );
        assert_eq!(card.field("extra").unwrap().text(), Some("Black attire"));
    }

    #[test]
    fn test_detail_labels() {
        let card = performance_card(&recital());
        let labels: Vec<String> = card
            .find_all(|el| el.has_class("key"))
            .into_iter()
            .map(Element::text_content)
            .collect();
        assert_eq!(labels, vec!["Date: ", "Day: ", "Start: ", "Arrive: ", "Address: "]);
        assert_eq!(card.field("location").unwrap().text(), Some("St. Mary's Hall"));
    }

    #[test]
    fn test_empty_extra_has_no_row() {
        let card = performance_card(&recital().with_extra(""));
        assert!(card.field("extra").is_none());
    }

    #[test]
    fn test_options_are_free_maybe_busy() {
        let card = performance_card(&recital());
        let checkboxes = card.find_all(Element::is_checkbox);
        let options: Vec<&str> = checkboxes.iter().filter_map(|c| c.data("option")).collect();
        assert_eq!(options, vec!["Free", "Maybe", "Busy"]);
        assert!(checkboxes.iter().all(|c| !c.is_checked()));
        assert!(checkboxes[1].has_class("checkbox-maybe"));

        let checkmarks = card.find_all(|el| el.has_class("checkmark"));
        assert_eq!(checkmarks.len(), 3);
        assert!(checkmarks[2].has_class("checkmark-busy"));
    }

    #[test]
    fn test_render_into_preserves_input_order() {
        let records = vec![
            PerformanceRecord::new("Zeta", "Concert"),
            PerformanceRecord::new("Alpha", "Concert"),
            PerformanceRecord::new("Mid", "Concert"),
        ];
        let mut container = Element::div("cards");
        let count = render_into(&mut container, &records);

        assert_eq!(count, 3);
        let names: Vec<&str> = container
            .children()
            .iter()
            .map(|card| card.field("name").unwrap().text().unwrap())
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_lineup_card_groups_in_order() {
        let record = LineupRecord::new(recital())
            .with_group("Strings", ["Zoe", "Adam"])
            .with_group("Brass", ["Mia"]);
        let card = lineup_card(&record);

        assert!(card.find(Element::is_checkbox).is_none());
        let groups = card.find_all(|el| el.has_class("performer-group"));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].find(|el| el.has_class("group-name")).unwrap().text(), Some("Strings"));
        let members: Vec<&str> = groups[0]
            .find_all(|el| el.has_class("group-member"))
            .into_iter()
            .filter_map(Element::text)
            .collect();
        assert_eq!(members, vec!["Zoe", "Adam"]);
        assert_eq!(groups[1].text_content(), "BrassMia");
    }

    #[test]
    fn test_card_html() {
        let html = performance_card(&recital()).to_html();
        assert!(html.starts_with("<div class=\"card\" data-performance-id=\"evt-1\">"));
        assert!(html.contains("<h2 data-field=\"name\">Spring Recital</h2>"));
        assert!(html.contains("St. Mary&#39;s Hall"));
    }
}
