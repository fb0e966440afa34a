use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};

use callboard_core::model::Availability;
use callboard_core::Element;

use super::{App, Mode};

fn layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name input
            Constraint::Min(5),    // Performance table
            Constraint::Length(3), // Help bar
        ])
        .split(area)
}

/// Card rows that fit in the performance table when drawing into `area`.
pub fn card_rows(area: Rect) -> usize {
    table_rows(layout(area)[1])
}

// area.height - 2 for borders - 1 for header
fn table_rows(table: Rect) -> usize {
    table.height.saturating_sub(3) as usize
}

/// Render the signup form.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chunks = layout(area);

    render_name(frame, app, chunks[0]);
    render_table(frame, app, chunks[1]);
    render_help(frame, app, chunks[2]);

    if let Some(message) = &app.alert.message {
        render_alert(frame, message, area);
    }
}

fn render_name(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.mode == Mode::EditName;
    let text = if editing {
        format!("{}_", app.name())
    } else if app.name().is_empty() {
        "<press n to enter your name>".to_string()
    } else {
        app.name().to_string()
    };
    let style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };

    let name = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Name"));
    frame.render_widget(name, area);
}

fn field_text(card: &Element, field: &str) -> String {
    card.field(field)
        .map(Element::text_content)
        .unwrap_or_default()
}

fn choice_cell(card: &Element, choice: Availability) -> Cell<'static> {
    let checked = card
        .checked_checkbox()
        .and_then(|checkbox| checkbox.data("option"))
        == Some(choice.as_str());
    let (mark, colour) = match (checked, choice) {
        (false, _) => ("[ ]", Color::DarkGray),
        (true, Availability::Free) => ("[x]", Color::Green),
        (true, Availability::Maybe) => ("[x]", Color::Yellow),
        (true, Availability::Busy) => ("[x]", Color::Red),
    };
    Cell::from(mark).style(Style::default().fg(colour))
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("#").style(Style::default().fg(Color::DarkGray)),
        Cell::from("Performance").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Type"),
        Cell::from("Date"),
        Cell::from("Start"),
        Cell::from("Arrive"),
        Cell::from("Address"),
        Cell::from("Free"),
        Cell::from("Maybe"),
        Cell::from("Busy"),
    ])
    .height(1);

    let cards = app.form.cards();

    let viewport_height = table_rows(area);
    let visible_start = app.card_list_offset;
    let visible_end = (visible_start + viewport_height).min(cards.len());

    let rows: Vec<Row> = cards
        .iter()
        .enumerate()
        .skip(visible_start)
        .take(viewport_height)
        .map(|(i, card)| {
            let style = if i == app.selected_card {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };
            let date = format!("{} {}", field_text(card, "day"), field_text(card, "date"));
            let mut address = field_text(card, "location");
            let extra = field_text(card, "extra");
            if !extra.is_empty() {
                address = format!("{address} ({extra})");
            }
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(field_text(card, "name")),
                Cell::from(field_text(card, "type")),
                Cell::from(date.trim().to_string()),
                Cell::from(field_text(card, "start")),
                Cell::from(field_text(card, "arrive")),
                Cell::from(address),
                choice_cell(card, Availability::Free),
                choice_cell(card, Availability::Maybe),
                choice_cell(card, Availability::Busy),
            ])
            .style(style)
        })
        .collect();

    let title = if cards.len() > viewport_height {
        format!(
            "Performances [{}-{} of {}]",
            visible_start + 1,
            visible_end,
            cards.len()
        )
    } else {
        "Performances".to_string()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Percentage(22),
            Constraint::Percentage(12),
            Constraint::Percentage(14),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Percentage(22),
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Length(5),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        Mode::Browse => {
            "  \u{2191}/k Up  \u{2193}/j Down  f Free  m Maybe  b Busy  n Name  Enter Submit  q Quit"
        }
        Mode::EditName => "  Type your name  Backspace Delete  Enter/Esc Done",
    };
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn render_alert(frame: &mut Frame, message: &str, area: Rect) {
    let lines = u16::try_from(message.lines().count()).unwrap_or(u16::MAX);
    let width = area.width.saturating_sub(4).min(70);
    let height = lines.saturating_add(4).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let alert = Paragraph::new(format!("{message}\n\n(press any key)"))
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Notice")
                .style(Style::default().bg(Color::Black)),
        );
    frame.render_widget(Clear, popup);
    frame.render_widget(alert, popup);
}
