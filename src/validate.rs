//! Consistency checks over a store.
//!
//! Data defects such as a missing answer or a repeated number are reported
//! as warnings and never alter the records.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::models::ChoiceLabel;
use crate::store::QuestionStore;

const MIN_CHOICES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single finding. Positions are 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    AnswerNotAmongChoices {
        position: usize,
        id: u32,
        label: ChoiceLabel,
    },
    TooFewChoices {
        position: usize,
        id: u32,
        count: usize,
    },
    Unanswered {
        position: usize,
        id: u32,
    },
    DuplicateLabel {
        id: u32,
        positions: Vec<usize>,
    },
    /// Inclusive run of labels absent between the smallest and largest.
    MissingLabels {
        from: u32,
        to: u32,
    },
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::AnswerNotAmongChoices { .. } | Issue::TooFewChoices { .. } => Severity::Error,
            Issue::Unanswered { .. } | Issue::DuplicateLabel { .. } | Issue::MissingLabels { .. } => {
                Severity::Warning
            }
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::AnswerNotAmongChoices {
                position,
                id,
                label,
            } => write!(
                f,
                "question {} (position {}) states answer {} which is not one of its choices",
                id,
                position + 1,
                label
            ),
            Issue::TooFewChoices {
                position,
                id,
                count,
            } => write!(
                f,
                "question {} (position {}) has only {} choice(s)",
                id,
                position + 1,
                count
            ),
            Issue::Unanswered { position, id } => write!(
                f,
                "question {} (position {}) has no stated answer",
                id,
                position + 1
            ),
            Issue::DuplicateLabel { id, positions } => {
                let shown: Vec<String> = positions.iter().map(|p| (p + 1).to_string()).collect();
                write!(
                    f,
                    "label {} is used by {} questions (positions {})",
                    id,
                    positions.len(),
                    shown.join(", ")
                )
            }
            Issue::MissingLabels { from, to } if from == to => {
                write!(f, "label {} is missing from the numbering", from)
            }
            Issue::MissingLabels { from, to } => {
                write!(f, "labels {}-{} are missing from the numbering", from, to)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub records: usize,
    pub answered: usize,
    pub unanswered: usize,
    pub choices: usize,
    pub issues: Vec<Issue>,
}

impl Report {
    /// True when no error-severity issue was found.
    pub fn is_consistent(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == Severity::Warning)
    }
}

pub fn validate(store: &QuestionStore) -> Report {
    let mut issues = Vec::new();
    let mut positions_by_label: BTreeMap<u32, Vec<usize>> = BTreeMap::new();

    for (position, record) in store.iter().enumerate() {
        positions_by_label
            .entry(record.id)
            .or_default()
            .push(position);

        if record.choices.len() < MIN_CHOICES {
            issues.push(Issue::TooFewChoices {
                position,
                id: record.id,
                count: record.choices.len(),
            });
        }

        match record.correct_choice {
            Some(label) if record.choice(label).is_none() => {
                issues.push(Issue::AnswerNotAmongChoices {
                    position,
                    id: record.id,
                    label,
                });
            }
            Some(_) => {}
            None => issues.push(Issue::Unanswered {
                position,
                id: record.id,
            }),
        }
    }

    for (id, positions) in &positions_by_label {
        if positions.len() > 1 {
            issues.push(Issue::DuplicateLabel {
                id: *id,
                positions: positions.clone(),
            });
        }
    }

    let labels: Vec<u32> = positions_by_label.keys().copied().collect();
    for pair in labels.windows(2) {
        let (low, high) = (pair[0], pair[1]);
        if high - low > 1 {
            issues.push(Issue::MissingLabels {
                from: low + 1,
                to: high - 1,
            });
        }
    }

    for issue in &issues {
        debug!(severity = ?issue.severity(), "{}", issue);
    }

    let answered = store.iter().filter(|record| record.is_answered()).count();
    let report = Report {
        records: store.len(),
        answered,
        unanswered: store.len() - answered,
        choices: store.iter().map(|record| record.choices.len()).sum(),
        issues,
    };

    if !report.is_consistent() {
        warn!(
            errors = report.errors().count(),
            "question bank has consistency errors"
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_bank_is_consistent() {
        let store = QuestionStore::parse("1. Q\nA) x\nB) y\n✅ Answer: B\n").unwrap();
        let report = validate(&store);
        assert!(report.is_consistent());
        assert!(report.issues.is_empty());
        assert_eq!(report.answered, 1);
        assert_eq!(report.choices, 2);
    }

    #[test]
    fn test_answer_not_among_choices_is_error() {
        let store = QuestionStore::parse("1. Q\nA) x\nB) y\n✅ Answer: D\n").unwrap();
        let report = validate(&store);
        assert!(!report.is_consistent());
        assert_eq!(
            report.issues,
            vec![Issue::AnswerNotAmongChoices {
                position: 0,
                id: 1,
                label: ChoiceLabel::D
            }]
        );
    }

    #[test]
    fn test_data_defects_are_warnings() {
        let store = QuestionStore::parse(
            "1. Q\nA) x\nB) y\n✅ Answer: A\n3. R\nA) x\nB) y\n3. S\nA) x\nB) y\n✅ Answer: B\n",
        )
        .unwrap();
        let report = validate(&store);

        assert!(report.is_consistent());
        assert_eq!(report.unanswered, 1);
        assert!(report.issues.contains(&Issue::Unanswered { position: 1, id: 3 }));
        assert!(report.issues.contains(&Issue::DuplicateLabel {
            id: 3,
            positions: vec![1, 2]
        }));
        assert!(report.issues.contains(&Issue::MissingLabels { from: 2, to: 2 }));
        assert_eq!(report.warnings().count(), 3);
    }

    #[test]
    fn test_single_choice_is_error() {
        let store = QuestionStore::parse("1. Q\nA) only\n✅ Answer: A\n").unwrap();
        let report = validate(&store);
        assert_eq!(report.errors().count(), 1);
        assert_eq!(
            report.issues[0].to_string(),
            "question 1 (position 1) has only 1 choice(s)"
        );
    }

    #[test]
    fn test_large_label_gap_is_one_issue() {
        let store = QuestionStore::parse(
            "1. Q\nA) x\nB) y\n✅ Answer: A\n4000000000. R\nA) x\nB) y\n✅ Answer: B\n",
        )
        .unwrap();
        let report = validate(&store);

        assert_eq!(
            report.issues,
            vec![Issue::MissingLabels {
                from: 2,
                to: 3_999_999_999
            }]
        );
        assert_eq!(
            report.issues[0].to_string(),
            "labels 2-3999999999 are missing from the numbering"
        );
    }
}
