//! Error types for loading and reading question banks.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::ChoiceLabel;

/// Structural failure in bank text. Lines are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: choice found outside of a question")]
    ChoiceOutsideQuestion { line: usize },

    #[error("line {line}: choice found after the answer of question {id}")]
    ChoiceAfterAnswer { line: usize, id: u32 },

    #[error("line {line}: choice {label} repeated in question {id}")]
    DuplicateChoice { line: usize, id: u32, label: char },

    #[error("line {line}: answer found before any choice")]
    AnswerWithoutChoices { line: usize },

    #[error("line {line}: question {id} already has an answer")]
    RepeatedAnswer { line: usize, id: u32 },

    #[error("line {line}: invalid answer label {found:?}")]
    InvalidAnswerLabel { line: usize, found: String },

    #[error("line {line}: unexpected text after the choices of question {id}")]
    UnexpectedText { line: usize, id: u32 },

    #[error("line {line}: question {id} has no choices")]
    NoChoices { line: usize, id: u32 },

    #[error("no questions found")]
    Empty,
}

/// Errors from loading a bank or reading records out of it.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read {path}: {source}", path = .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid question bank: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Structural failure in a record read from JSON. Positions are 1-based.
    #[error("record {position} (question {id}) has no choices")]
    RecordWithoutChoices { position: usize, id: u32 },

    #[error("record {position} (question {id}) repeats choice {label}")]
    RecordDuplicateChoice {
        position: usize,
        id: u32,
        label: ChoiceLabel,
    },

    #[error("position {position} is out of range (1-{len})")]
    PositionOutOfRange { position: usize, len: usize },
}
