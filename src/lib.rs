//! # question-bank
//!
//! A read-only multiple-choice question bank with a terminal reader.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use question_bank::QuestionStore;
//!
//! let store = QuestionStore::builtin();
//! for record in store.records() {
//!     println!("{}. {}", record.id, record.preview());
//! }
//! ```

mod app;
mod data;
mod error;
pub mod export;
mod models;
mod store;
pub mod terminal;
mod ui;
pub mod validate;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::debug;

pub use app::App;
pub use data::{BankDocument, ParsedBank, ROUND3_TEXT, load_bank_from_path, parse_bank};
pub use error::{BankError, ParseError};
pub use models::{AppState, Choice, ChoiceLabel, QuestionRecord, QuestionText};
pub use store::QuestionStore;

/// Terminal reader over a store. Shows questions, never records answers.
///
/// ```rust,no_run
/// use question_bank::{AppState, Browser, QuestionStore};
///
/// let browser = Browser::new(QuestionStore::builtin());
/// assert_eq!(browser.app().state, AppState::Overview);
/// browser.run().expect("terminal available");
/// ```
pub struct Browser<'a> {
    app: App<'a>,
}

impl<'a> Browser<'a> {
    /// Create a reader over `store`, starting on the overview screen.
    pub fn new(store: &'a QuestionStore) -> Self {
        Self {
            app: App::new(store),
        }
    }

    /// Takes over the terminal until the reader quits.
    pub fn run(mut self) -> Result<(), BankError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the navigation state, e.g. to inspect the current question.
    pub fn app(&self) -> &App<'a> {
        &self.app
    }

    /// Get a mutable reference to the navigation state for custom key handling.
    pub fn app_mut(&mut self) -> &mut App<'a> {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::ReaderTerminal, app: &mut App) -> Result<(), BankError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                debug!(position = app.current_position(), "reader closed");
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the reader should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return true;
    }

    match app.state {
        AppState::Overview => handle_overview_input(app, key),
        AppState::Question => handle_question_input(app, key),
        AppState::Index => handle_index_input(app, key),
    }
    false
}

fn handle_overview_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.open_questions(),
        KeyCode::Char('i') => app.open_index(),
        _ => {}
    }
}

fn handle_question_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => app.next_question(),
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => app.previous_question(),
        KeyCode::Char('a') | KeyCode::Char(' ') => app.toggle_answer(),
        KeyCode::Char('g') | KeyCode::Home => app.first_question(),
        KeyCode::Char('G') | KeyCode::End => app.last_question(),
        KeyCode::Char('i') => app.open_index(),
        _ => {}
    }
}

fn handle_index_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_index_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_index_up(),
        KeyCode::Enter => app.open_selected(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_flow() {
        let store = QuestionStore::builtin();
        let mut app = App::new(store);

        assert!(!handle_input(&mut app, KeyCode::Enter));
        assert_eq!(app.state, AppState::Question);

        assert!(!handle_input(&mut app, KeyCode::Char('G')));
        assert_eq!(app.current_position(), store.len());

        assert!(!handle_input(&mut app, KeyCode::Char('a')));
        assert!(app.answer_revealed());

        assert!(!handle_input(&mut app, KeyCode::Char('i')));
        assert_eq!(app.state, AppState::Index);
        assert!(!handle_input(&mut app, KeyCode::Up));
        assert!(!handle_input(&mut app, KeyCode::Enter));
        assert_eq!(app.state, AppState::Question);
        assert_eq!(app.current_position(), store.len() - 1);

        assert!(handle_input(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_reader_never_changes_store() {
        let store = QuestionStore::builtin();
        let before = store.clone();
        let mut browser = Browser::new(store);
        for key in [KeyCode::Enter, KeyCode::Char('j'), KeyCode::Char('a'), KeyCode::Char('i')] {
            handle_input(browser.app_mut(), key);
        }
        assert_eq!(browser.app().store(), &before);
    }
}
