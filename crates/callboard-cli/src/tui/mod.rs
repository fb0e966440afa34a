use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

use callboard_client::{FormEndpoint, Notifier, Submitter};
use callboard_core::model::Availability;
use callboard_core::SignupForm;

pub mod signup_view;

/// Card rows assumed before the first draw.
const DEFAULT_VIEWPORT_HEIGHT: usize = 20;

/// Which input the keyboard is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    EditName,
}

/// Something the event loop must do outside of key handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
}

/// The modal alert shown over the form.
#[derive(Debug, Default)]
pub struct AlertBox {
    pub message: Option<String>,
}

impl Notifier for AlertBox {
    fn alert(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }
}

/// Application state for the signup TUI.
#[derive(Debug)]
pub struct App {
    pub form: SignupForm,
    pub mode: Mode,
    pub alert: AlertBox,
    pub selected_card: usize,
    pub card_list_offset: usize, // First visible card in the list
    pub viewport_height: usize,  // Card rows shown by the last draw
    pub should_quit: bool,
}

impl App {
    pub fn new(form: SignupForm) -> Self {
        Self {
            form,
            mode: Mode::Browse,
            alert: AlertBox::default(),
            selected_card: 0,
            card_list_offset: 0,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<Action> {
        // Any key dismisses an open alert.
        if self.alert.message.take().is_some() {
            return None;
        }

        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::EditName => {
                self.handle_name_key(key);
                None
            }
        }
    }

    /// Records how many card rows fit on screen and scrolls so the
    /// selected card stays visible.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height.max(1);
        self.scroll_to_selected();
    }

    fn scroll_to_selected(&mut self) {
        if self.selected_card < self.card_list_offset {
            self.card_list_offset = self.selected_card;
        } else if self.selected_card >= self.card_list_offset + self.viewport_height {
            self.card_list_offset = self.selected_card + 1 - self.viewport_height;
        }
    }

    fn handle_browse_key(&mut self, key: KeyCode) -> Option<Action> {
        let card_count = self.form.cards().len();
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected_card + 1 < card_count {
                    self.selected_card += 1;
                    self.scroll_to_selected();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.selected_card > 0 {
                    self.selected_card -= 1;
                    self.scroll_to_selected();
                }
            }
            KeyCode::Char('f') => self.toggle(Availability::Free),
            KeyCode::Char('m') => self.toggle(Availability::Maybe),
            KeyCode::Char('b') => self.toggle(Availability::Busy),
            KeyCode::Char('n') | KeyCode::Tab => self.mode = Mode::EditName,
            KeyCode::Enter => return Some(Action::Submit),
            _ => {}
        }
        None
    }

    fn handle_name_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => self.mode = Mode::Browse,
            KeyCode::Char(c) => {
                let mut name = self.name().to_string();
                name.push(c);
                self.form.set_name(name);
            }
            KeyCode::Backspace => {
                let mut name = self.name().to_string();
                name.pop();
                self.form.set_name(name);
            }
            _ => {}
        }
    }

    fn toggle(&mut self, choice: Availability) {
        self.form.toggle(self.selected_card, choice);
    }

    pub fn name(&self) -> &str {
        self.form.name_value().unwrap_or_default()
    }

    /// Run the submit handler; the outcome lands in the alert box.
    pub async fn submit<E: FormEndpoint>(&mut self, submitter: &Submitter<E>) {
        submitter.handle(&mut self.form, &mut self.alert).await;
    }
}

/// Run the signup TUI.
///
/// Sets up the terminal, runs the main event loop, and restores the terminal
/// on exit (including on error).
pub async fn run_signup<E: FormEndpoint>(form: SignupForm, submitter: &Submitter<E>) -> Result<()> {
    let app = App::new(form);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the event loop, capturing any error so we can restore the terminal
    let result = run_event_loop(&mut terminal, app, submitter).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_event_loop<E: FormEndpoint>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    submitter: &Submitter<E>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            app.set_viewport_height(signup_view::card_rows(frame.area()));
            signup_view::render(frame, &app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key.code) == Some(Action::Submit) {
                app.submit(submitter).await;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
