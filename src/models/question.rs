use std::fmt;

use serde::{Deserialize, Serialize};

const PREVIEW_LENGTH: usize = 55;

/// Label of a choice within a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChoiceLabel {
    A,
    B,
    C,
    D,
}

impl ChoiceLabel {
    pub const ALL: [ChoiceLabel; 4] = [ChoiceLabel::A, ChoiceLabel::B, ChoiceLabel::C, ChoiceLabel::D];

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(ChoiceLabel::A),
            'B' => Some(ChoiceLabel::B),
            'C' => Some(ChoiceLabel::C),
            'D' => Some(ChoiceLabel::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            ChoiceLabel::A => 'A',
            ChoiceLabel::B => 'B',
            ChoiceLabel::C => 'C',
            ChoiceLabel::D => 'D',
        }
    }
}

impl fmt::Display for ChoiceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub label: ChoiceLabel,
    pub text: String,
}

/// One multiple-choice item as written in the bank.
///
/// `id` is the number printed in front of the question. It is neither
/// unique nor sequential, so records are addressed by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u32,
    pub prompt: String,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub correct_choice: Option<ChoiceLabel>,
}

impl QuestionRecord {
    pub fn is_answered(&self) -> bool {
        self.correct_choice.is_some()
    }

    pub fn choice(&self, label: ChoiceLabel) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.label == label)
    }

    /// Text of the stated answer, if the answer names an existing choice.
    pub fn correct_text(&self) -> Option<&str> {
        self.correct_choice
            .and_then(|label| self.choice(label))
            .map(|choice| choice.text.as_str())
    }

    /// First prompt line, cut to a fixed width for listings.
    pub fn preview(&self) -> String {
        let first_line = self.prompt.lines().next().unwrap_or_default();
        if first_line.chars().count() > PREVIEW_LENGTH {
            let truncated: String = first_line.chars().take(PREVIEW_LENGTH).collect();
            format!("{}...", truncated)
        } else {
            first_line.to_string()
        }
    }

    /// Renders the record without its answer line.
    pub fn display_without_answer(&self) -> QuestionText<'_> {
        QuestionText {
            record: self,
            with_answer: false,
        }
    }
}

/// Bank text rendering of a record, see [`QuestionRecord::display_without_answer`].
pub struct QuestionText<'a> {
    record: &'a QuestionRecord,
    with_answer: bool,
}

impl fmt::Display for QuestionText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        writeln!(f, "{}. {}", record.id, record.prompt)?;
        for choice in &record.choices {
            writeln!(f, "{}) {}", choice.label, choice.text)?;
        }
        if self.with_answer {
            if let Some(label) = record.correct_choice {
                writeln!(f, "✅ Answer: {}", label)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = QuestionText {
            record: self,
            with_answer: true,
        };
        fmt::Display::fmt(&text, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuestionRecord {
        QuestionRecord {
            id: 19,
            prompt: "Which ACID property ensures that partial changes are never saved?".to_string(),
            choices: ChoiceLabel::ALL
                .iter()
                .zip(["Atomicity", "Consistency", "Isolation", "Durability"])
                .map(|(label, text)| Choice {
                    label: *label,
                    text: text.to_string(),
                })
                .collect(),
            correct_choice: Some(ChoiceLabel::A),
        }
    }

    #[test]
    fn test_label_from_char() {
        assert_eq!(ChoiceLabel::from_char('c'), Some(ChoiceLabel::C));
        assert_eq!(ChoiceLabel::from_char('D'), Some(ChoiceLabel::D));
        assert_eq!(ChoiceLabel::from_char('E'), None);
    }

    #[test]
    fn test_correct_text() {
        let mut record = sample();
        assert_eq!(record.correct_text(), Some("Atomicity"));

        record.correct_choice = None;
        assert!(!record.is_answered());
        assert_eq!(record.correct_text(), None);
    }

    #[test]
    fn test_display_matches_bank_notation() {
        let record = sample();
        let text = record.to_string();
        assert!(text.starts_with("19. Which ACID property"));
        assert!(text.contains("\nB) Consistency\n"));
        assert!(text.ends_with("✅ Answer: A\n"));

        let hidden = record.display_without_answer().to_string();
        assert!(!hidden.contains("Answer"));
        assert!(hidden.ends_with("D) Durability\n"));
    }

    #[test]
    fn test_preview_uses_first_line() {
        let mut record = sample();
        assert_eq!(record.preview().chars().count(), PREVIEW_LENGTH + 3);
        assert!(record.preview().ends_with("..."));

        record.prompt = "Table Users:\nName\nAlice".to_string();
        assert_eq!(record.preview(), "Table Users:");
    }

    #[test]
    fn test_missing_answer_deserializes_as_none() {
        let json = r#"{"id":14,"prompt":"p","choices":[{"label":"A","text":"x"}]}"#;
        let record: QuestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.correct_choice, None);
    }
}
