//! The read-only question store.

use std::path::Path;
use std::sync::LazyLock;

use crate::data::{self, ParsedBank};
use crate::error::BankError;
use crate::models::QuestionRecord;

static BUILTIN: LazyLock<QuestionStore> = LazyLock::new(|| {
    QuestionStore::parse(data::ROUND3_TEXT).expect("embedded question bank is well-formed")
});

/// Ordered, immutable collection of question records.
///
/// Records keep their source order. Repeated labels are all kept, so
/// look records up by position or with [`QuestionStore::with_label`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionStore {
    title: Option<String>,
    records: Vec<QuestionRecord>,
}

impl QuestionStore {
    pub fn new(title: Option<String>, records: Vec<QuestionRecord>) -> Self {
        Self { title, records }
    }

    /// The "Round 3" bank compiled into the crate, parsed on first use.
    pub fn builtin() -> &'static QuestionStore {
        &BUILTIN
    }

    pub fn parse(text: &str) -> Result<Self, BankError> {
        Ok(data::parse_bank(text)?.into())
    }

    /// Loads bank text, or a JSON document when the file ends in `.json`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BankError> {
        Ok(data::load_bank_from_path(path)?.into())
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a 0-based position.
    pub fn get(&self, position: usize) -> Option<&QuestionRecord> {
        self.records.get(position)
    }

    /// Record at a 1-based position, as shown to readers.
    pub fn at_position(&self, position: usize) -> Result<&QuestionRecord, BankError> {
        position
            .checked_sub(1)
            .and_then(|index| self.records.get(index))
            .ok_or(BankError::PositionOutOfRange {
                position,
                len: self.records.len(),
            })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionRecord> {
        self.records.iter()
    }

    /// Every record printed with `id`, in source order.
    pub fn with_label(&self, id: u32) -> impl Iterator<Item = &QuestionRecord> {
        self.records.iter().filter(move |record| record.id == id)
    }
}

impl From<ParsedBank> for QuestionStore {
    fn from(bank: ParsedBank) -> Self {
        Self::new(bank.title, bank.records)
    }
}

impl<'a> IntoIterator for &'a QuestionStore {
    type Item = &'a QuestionRecord;
    type IntoIter = std::slice::Iter<'a, QuestionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
