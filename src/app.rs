use crate::models::{AppState, QuestionRecord};
use crate::store::QuestionStore;

/// Navigation state of the terminal reader. Never touches the records.
pub struct App<'a> {
    pub state: AppState,
    store: &'a QuestionStore,
    current_index: usize,
    answer_revealed: bool,
    index_scroll: usize,
}

impl<'a> App<'a> {
    pub fn new(store: &'a QuestionStore) -> Self {
        Self {
            state: AppState::Overview,
            store,
            current_index: 0,
            answer_revealed: false,
            index_scroll: 0,
        }
    }

    pub fn store(&self) -> &'a QuestionStore {
        self.store
    }

    pub fn current_question(&self) -> Option<&'a QuestionRecord> {
        self.store.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_position(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.store.len()
    }

    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    pub fn index_scroll(&self) -> usize {
        self.index_scroll
    }

    pub fn open_questions(&mut self) {
        if !self.store.is_empty() {
            self.state = AppState::Question;
        }
    }

    pub fn open_index(&mut self) {
        self.index_scroll = self.current_index;
        self.state = AppState::Index;
    }

    pub fn next_question(&mut self) {
        if self.current_index + 1 < self.store.len() {
            self.jump_to(self.current_index + 1);
        }
    }

    pub fn previous_question(&mut self) {
        if self.current_index > 0 {
            self.jump_to(self.current_index - 1);
        }
    }

    pub fn first_question(&mut self) {
        self.jump_to(0);
    }

    pub fn last_question(&mut self) {
        self.jump_to(self.store.len().saturating_sub(1));
    }

    pub fn toggle_answer(&mut self) {
        self.answer_revealed = !self.answer_revealed;
    }

    pub fn scroll_index_down(&mut self) {
        if self.index_scroll + 1 < self.store.len() {
            self.index_scroll += 1;
        }
    }

    pub fn scroll_index_up(&mut self) {
        self.index_scroll = self.index_scroll.saturating_sub(1);
    }

    /// Opens the question highlighted in the index.
    pub fn open_selected(&mut self) {
        self.jump_to(self.index_scroll);
        self.open_questions();
    }

    fn jump_to(&mut self, index: usize) {
        if index != self.current_index {
            self.answer_revealed = false;
        }
        self.current_index = index;
    }
}
