use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::data::parser::{ParsedBank, parse_bank};
use crate::error::{BankError, ParseError};
use crate::models::QuestionRecord;

/// The bank compiled into the binary.
pub const ROUND3_TEXT: &str = include_str!("../../data/round3.txt");

/// JSON shape of a whole bank, shared with `export --format records`.
#[derive(Debug, Serialize, Deserialize)]
pub struct BankDocument {
    #[serde(default)]
    pub title: Option<String>,
    pub records: Vec<QuestionRecord>,
}

pub fn load_bank_from_path<P: AsRef<Path>>(path: P) -> Result<ParsedBank, BankError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| BankError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let bank = if is_json {
        let document: BankDocument = serde_json::from_str(&content)?;
        check_records(&document.records)?;
        ParsedBank {
            title: document.title,
            records: document.records,
        }
    } else {
        parse_bank(&content)?
    };

    info!(
        path = %path.display(),
        records = bank.records.len(),
        "loaded question bank"
    );
    Ok(bank)
}

/// Applies the parser's structural rules to records that bypassed it.
fn check_records(records: &[QuestionRecord]) -> Result<(), BankError> {
    if records.is_empty() {
        return Err(ParseError::Empty.into());
    }

    for (index, record) in records.iter().enumerate() {
        if record.choices.is_empty() {
            return Err(BankError::RecordWithoutChoices {
                position: index + 1,
                id: record.id,
            });
        }

        for (seen, choice) in record.choices.iter().enumerate() {
            if record.choices[..seen].iter().any(|c| c.label == choice.label) {
                return Err(BankError::RecordDuplicateChoice {
                    position: index + 1,
                    id: record.id,
                    label: choice.label,
                });
            }
        }
    }

    Ok(())
}
