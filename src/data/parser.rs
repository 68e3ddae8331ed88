//! Parser for the plain-text bank notation.
//!
//! ```text
//! 9. In a binary tree:
//! •	Inorder: D B E A F C G
//! What is the left child of C?
//! A) F
//! B) G
//! ✅ Answer: A
//! ```
//!
//! A numbered line opens a question, but only once the previous question has
//! reached its choices. Inside a prompt, numbered lines are operation lists.

use tracing::debug;

use crate::error::ParseError;
use crate::models::{Choice, ChoiceLabel, QuestionRecord};

const ANSWER_MARKER: char = '✅';
const ANSWER_PREFIX: &str = "Answer:";

/// Records and heading read from bank text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBank {
    pub title: Option<String>,
    pub records: Vec<QuestionRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Preamble,
    Prompt,
    Choices,
    Answered,
}

enum LineKind<'a> {
    Header { id: u32, rest: &'a str },
    Choice { label: ChoiceLabel, text: &'a str },
    Answer(&'a str),
    Text,
}

struct Draft {
    id: u32,
    line: usize,
    prompt: Vec<String>,
    choices: Vec<Choice>,
    correct_choice: Option<ChoiceLabel>,
}

impl Draft {
    fn new(id: u32, line: usize, first: &str) -> Self {
        let prompt = if first.is_empty() {
            Vec::new()
        } else {
            vec![first.to_string()]
        };

        Self {
            id,
            line,
            prompt,
            choices: Vec::new(),
            correct_choice: None,
        }
    }

    fn finish(self) -> Result<QuestionRecord, ParseError> {
        if self.choices.is_empty() {
            return Err(ParseError::NoChoices {
                line: self.line,
                id: self.id,
            });
        }

        Ok(QuestionRecord {
            id: self.id,
            prompt: self.prompt.join("\n"),
            choices: self.choices,
            correct_choice: self.correct_choice,
        })
    }
}

fn classify(line: &str) -> LineKind<'_> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 && line[digits..].starts_with('.') {
        if let Ok(id) = line[..digits].parse() {
            return LineKind::Header {
                id,
                rest: line[digits + 1..].trim(),
            };
        }
    }

    let mut chars = line.chars();
    if let (Some(first), Some(')')) = (chars.next(), chars.next()) {
        if first.is_ascii_uppercase() {
            if let Some(label) = ChoiceLabel::from_char(first) {
                return LineKind::Choice {
                    label,
                    text: chars.as_str().trim(),
                };
            }
        }
    }

    let unmarked = line.trim_start().trim_start_matches(ANSWER_MARKER).trim_start();
    if let Some(rest) = unmarked.strip_prefix(ANSWER_PREFIX) {
        return LineKind::Answer(rest.trim());
    }

    LineKind::Text
}

fn parse_answer_label(found: &str, line: usize) -> Result<ChoiceLabel, ParseError> {
    let mut chars = found.chars();
    match (chars.next().and_then(ChoiceLabel::from_char), chars.next()) {
        (Some(label), None) => Ok(label),
        _ => Err(ParseError::InvalidAnswerLabel {
            line,
            found: found.to_string(),
        }),
    }
}

/// Parses bank text into records, in source order.
///
/// Missing answers, repeated or skipped numbers and answers that name no
/// existing choice are kept as written; only malformed structure fails.
pub fn parse_bank(text: &str) -> Result<ParsedBank, ParseError> {
    let mut title = None;
    let mut records = Vec::new();
    let mut draft: Option<Draft> = None;
    let mut state = State::Preamble;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim_end();
        if line.trim().is_empty() {
            continue;
        }

        match (classify(line), draft.as_mut()) {
            (LineKind::Header { .. }, Some(current)) if state == State::Prompt => {
                current.prompt.push(line.to_string());
            }
            (LineKind::Header { id, rest }, _) => {
                if let Some(done) = draft.take() {
                    records.push(done.finish()?);
                }
                draft = Some(Draft::new(id, line_no, rest));
                state = State::Prompt;
            }
            (LineKind::Choice { label, text }, Some(current)) => match state {
                State::Answered => {
                    return Err(ParseError::ChoiceAfterAnswer {
                        line: line_no,
                        id: current.id,
                    });
                }
                _ => {
                    if current.choices.iter().any(|choice| choice.label == label) {
                        return Err(ParseError::DuplicateChoice {
                            line: line_no,
                            id: current.id,
                            label: label.as_char(),
                        });
                    }
                    current.choices.push(Choice {
                        label,
                        text: text.to_string(),
                    });
                    state = State::Choices;
                }
            },
            (LineKind::Choice { .. }, None) => {
                return Err(ParseError::ChoiceOutsideQuestion { line: line_no });
            }
            (LineKind::Answer(found), Some(current)) => match state {
                State::Choices => {
                    current.correct_choice = Some(parse_answer_label(found, line_no)?);
                    state = State::Answered;
                }
                State::Answered => {
                    return Err(ParseError::RepeatedAnswer {
                        line: line_no,
                        id: current.id,
                    });
                }
                State::Preamble | State::Prompt => {
                    return Err(ParseError::AnswerWithoutChoices { line: line_no });
                }
            },
            (LineKind::Answer(_), None) => {
                return Err(ParseError::AnswerWithoutChoices { line: line_no });
            }
            (LineKind::Text, Some(current)) => {
                if state == State::Prompt {
                    current.prompt.push(line.to_string());
                } else {
                    return Err(ParseError::UnexpectedText {
                        line: line_no,
                        id: current.id,
                    });
                }
            }
            (LineKind::Text, None) => {
                if title.is_none() {
                    title = Some(line.trim().to_string());
                }
            }
        }
    }

    if let Some(done) = draft {
        records.push(done.finish()?);
    }

    if records.is_empty() {
        return Err(ParseError::Empty);
    }

    debug!(records = records.len(), ?title, "parsed question bank");
    Ok(ParsedBank { title, records })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_BANK: &str = "\
Practice Bank

1. Stack and Queue start empty.
Operations:
1.\tPush 1, 2, 3 into stack
2.\tPop two elements
Final queue order?
A) 3 2
B) 2 3
✅ Answer: A

2.What is the output?
int x = 5;
if(true){
    int x = 10;
}
A) 5
B) 10
C) Compile-time error

2. Unlabelled duplicate
A) yes
B) no
Answer: b
";

    #[test]
    fn test_parse_small_bank() {
        let bank = parse_bank(SMALL_BANK).unwrap();
        assert_eq!(bank.title.as_deref(), Some("Practice Bank"));
        assert_eq!(bank.records.len(), 3);

        let first = &bank.records[0];
        assert_eq!(first.id, 1);
        assert_eq!(
            first.prompt,
            "Stack and Queue start empty.\nOperations:\n1.\tPush 1, 2, 3 into stack\n2.\tPop two elements\nFinal queue order?"
        );
        assert_eq!(first.choices.len(), 2);
        assert_eq!(first.correct_choice, Some(ChoiceLabel::A));
    }

    #[test]
    fn test_prompt_keeps_code_indentation() {
        let bank = parse_bank(SMALL_BANK).unwrap();
        let second = &bank.records[1];
        assert_eq!(second.id, 2);
        assert!(second.prompt.starts_with("What is the output?\n"));
        assert!(second.prompt.contains("\n    int x = 10;\n"));
        assert_eq!(second.choices.len(), 3);
        assert_eq!(second.correct_choice, None);
    }

    #[test]
    fn test_duplicate_ids_and_lowercase_answer() {
        let bank = parse_bank(SMALL_BANK).unwrap();
        let third = &bank.records[2];
        assert_eq!(third.id, 2);
        assert_eq!(third.prompt, "Unlabelled duplicate");
        assert_eq!(third.correct_choice, Some(ChoiceLabel::B));
    }

    #[test]
    fn test_answer_outside_choices_is_kept() {
        let bank = parse_bank("1. Pick\nA) x\nB) y\n✅ Answer: D\n").unwrap();
        assert_eq!(bank.records[0].correct_choice, Some(ChoiceLabel::D));
        assert_eq!(bank.records[0].correct_text(), None);
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(
            parse_bank("A) orphan\n"),
            Err(ParseError::ChoiceOutsideQuestion { line: 1 })
        );
        assert_eq!(
            parse_bank("1. Q\nA) x\nA) y\n"),
            Err(ParseError::DuplicateChoice {
                line: 3,
                id: 1,
                label: 'A'
            })
        );
        assert_eq!(
            parse_bank("1. Q\n✅ Answer: A\n"),
            Err(ParseError::AnswerWithoutChoices { line: 2 })
        );
        assert_eq!(
            parse_bank("1. Q\nA) x\n✅ Answer: A\n✅ Answer: A\n"),
            Err(ParseError::RepeatedAnswer { line: 4, id: 1 })
        );
        assert_eq!(
            parse_bank("1. Q\nA) x\n✅ Answer: AB\n"),
            Err(ParseError::InvalidAnswerLabel {
                line: 3,
                found: "AB".to_string()
            })
        );
        assert_eq!(
            parse_bank("1. Q\nA) x\n✅ Answer: A\nB) y\n"),
            Err(ParseError::ChoiceAfterAnswer { line: 4, id: 1 })
        );
        assert_eq!(
            parse_bank("1. Q\nA) x\nstray text\n"),
            Err(ParseError::UnexpectedText { line: 3, id: 1 })
        );
    }

    #[test]
    fn test_question_without_choices() {
        assert_eq!(
            parse_bank("1. First\nA) x\n2. Second\n"),
            Err(ParseError::NoChoices { line: 3, id: 2 })
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(parse_bank(""), Err(ParseError::Empty));
        assert_eq!(parse_bank("Just a heading\n\n"), Err(ParseError::Empty));
    }
}
