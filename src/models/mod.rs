mod question;

pub use question::{Choice, ChoiceLabel, QuestionRecord, QuestionText};

/// Screen currently shown by the terminal reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Overview,
    Question,
    Index,
}
