//! JSON export of a store.

use clap::ValueEnum;
use serde::Serialize;

use crate::data::BankDocument;
use crate::error::BankError;
use crate::store::QuestionStore;

const QUESTION_TYPE_MCQ: &str = "MCQ";
const DEFAULT_MAX_POINTS: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Title plus the record list, readable back with `--bank file.json`
    #[default]
    Records,
    /// One row per question, shaped for a `question_bank` table
    Rows,
}

/// A question as stored by the event backend's `question_bank` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRow {
    pub question_text: String,
    pub question_type: &'static str,
    /// JSON array of the choice texts, stored as text.
    pub options: String,
    pub correct_answer: Option<String>,
    pub max_points: u32,
    pub question_set_id: u32,
}

pub fn to_rows(store: &QuestionStore, question_set_id: u32) -> Result<Vec<QuestionRow>, BankError> {
    store
        .iter()
        .map(|record| {
            let texts: Vec<&str> = record.choices.iter().map(|c| c.text.as_str()).collect();
            Ok(QuestionRow {
                question_text: format!("{}. {}", record.id, record.prompt),
                question_type: QUESTION_TYPE_MCQ,
                options: serde_json::to_string(&texts)?,
                correct_answer: record.correct_choice.map(|label| label.to_string()),
                max_points: DEFAULT_MAX_POINTS,
                question_set_id,
            })
        })
        .collect()
}

pub fn to_json(store: &QuestionStore, format: ExportFormat, pretty: bool) -> Result<String, BankError> {
    let value = match format {
        ExportFormat::Records => serde_json::to_value(BankDocument {
            title: store.title().map(str::to_string),
            records: store.records().to_vec(),
        })?,
        ExportFormat::Rows => serde_json::to_value(to_rows(store, 1)?)?,
    };

    let json = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> QuestionStore {
        QuestionStore::parse("Set\n4.Pick\nA) x\nB) y\n✅ Answer: B\n14. Open\nA) x\nB) y\n").unwrap()
    }

    #[test]
    fn test_rows_shape() {
        let rows = to_rows(&store(), 3).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].question_text, "4. Pick");
        assert_eq!(rows[0].question_type, "MCQ");
        assert_eq!(rows[0].options, r#"["x","y"]"#);
        assert_eq!(rows[0].correct_answer.as_deref(), Some("B"));
        assert_eq!(rows[0].max_points, 15);
        assert_eq!(rows[0].question_set_id, 3);
        assert_eq!(rows[1].correct_answer, None);
    }

    #[test]
    fn test_records_json_reads_back() {
        let original = store();
        let json = to_json(&original, ExportFormat::Records, false).unwrap();
        let document: BankDocument = serde_json::from_str(&json).unwrap();
        let restored = QuestionStore::new(document.title, document.records);
        assert_eq!(restored, original);
    }

    #[test]
    fn test_rows_json_keeps_null_answer() {
        let json = to_json(&store(), ExportFormat::Rows, true).unwrap();
        assert!(json.contains("\"correct_answer\": null"));
    }
}
