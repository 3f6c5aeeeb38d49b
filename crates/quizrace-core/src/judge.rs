//! Answer judging.
//!
//! Multiple-choice questions take a 1-based choice number; free-text
//! questions compare the typed answer to the stored one. A miscue (not a
//! number, out of range) is an incorrect answer, never an error.
//!
//! Both sides are trimmed before comparison. Free text ignores case unless
//! the judge is configured to be case sensitive.

use crate::model::Question;

/// Judging options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Judge {
    /// Compare free-text answers exactly (after trimming).
    pub case_sensitive: bool,
}

/// Outcome of judging one raw answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    /// A multiple-choice answer that did not name a choice. Scored wrong.
    Miscue { reason: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

impl Judge {
    pub fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    /// Judge a raw answer line against a question.
    pub fn judge(&self, question: &Question, raw_answer: &str) -> Verdict {
        if question.choices.is_empty() {
            return self.judge_free_text(question, raw_answer);
        }

        let selection = raw_answer.trim();
        let index = match selection.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                return Verdict::Miscue {
                    reason: format!("'{selection}' is not a choice number"),
                }
            }
        };

        let Some(choice) = index.checked_sub(1).and_then(|i| question.choices.get(i)) else {
            return Verdict::Miscue {
                reason: format!(
                    "choice {index} is outside 1..={}",
                    question.choices.len()
                ),
            };
        };

        if choice.trim() == question.correct_answer.trim() {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    fn judge_free_text(&self, question: &Question, raw_answer: &str) -> Verdict {
        let given = normalize(raw_answer, self.case_sensitive);
        let expected = normalize(&question.correct_answer, self.case_sensitive);
        if given == expected {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}

/// Trim and (unless `case_sensitive`) lowercase a string for comparison.
pub fn normalize(s: &str, case_sensitive: bool) -> String {
    let trimmed = s.trim();
    if case_sensitive {
        trimmed.to_string()
    } else {
        trimmed.to_lowercase()
    }
}
