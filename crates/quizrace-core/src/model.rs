//! Core data model types for quizrace.
//!
//! Questions are immutable once loaded; the session result is what a run
//! hands back to the caller.

use std::fmt;

/// A single quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The question as shown to the user.
    pub text: String,
    /// The expected answer. For multiple-choice questions this is the text
    /// of the correct choice, not its index.
    pub correct_answer: String,
    /// Enumerated choices. Empty means free-text mode.
    pub choices: Vec<String>,
}

impl Question {
    pub fn free_text(text: impl Into<String>, correct_answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            correct_answer: correct_answer.into(),
            choices: Vec::new(),
        }
    }

    pub fn multiple_choice(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        choices: Vec<String>,
    ) -> Self {
        Self {
            text: text.into(),
            correct_answer: correct_answer.into(),
            choices,
        }
    }

    /// How answers to this question are judged.
    pub fn mode(&self) -> AnswerMode {
        if self.choices.is_empty() {
            AnswerMode::FreeText
        } else {
            AnswerMode::MultipleChoice
        }
    }
}

/// Judging mode, derived from whether a question carries choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerMode {
    FreeText,
    MultipleChoice,
}

impl fmt::Display for AnswerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerMode::FreeText => write!(f, "free text"),
            AnswerMode::MultipleChoice => write!(f, "multiple choice"),
        }
    }
}

/// Why a session stopped before the last question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The deadline elapsed before an answer arrived.
    Timeout,
    /// The answer source reported end of input (or failed) before the deadline.
    EndOfInput,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::Timeout => write!(f, "timed out"),
            AbortReason::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every question was presented and judged.
    Completed,
    /// The session stopped at `question_index` (0-based).
    Aborted {
        question_index: usize,
        reason: AbortReason,
    },
}

/// Summary of one quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    /// Questions judged correct.
    pub correct_count: usize,
    /// Questions presented. On abort this counts the aborted question too.
    pub total_count: usize,
    /// Whether the session stopped early.
    pub aborted: bool,
    pub end: SessionEnd,
}

impl SessionResult {
    pub fn completed(correct_count: usize, total_count: usize) -> Self {
        Self {
            correct_count,
            total_count,
            aborted: false,
            end: SessionEnd::Completed,
        }
    }

    pub fn aborted(correct_count: usize, question_index: usize, reason: AbortReason) -> Self {
        Self {
            correct_count,
            total_count: question_index + 1,
            aborted: true,
            end: SessionEnd::Aborted {
                question_index,
                reason,
            },
        }
    }

    /// The `<correct> out of <total>` tally.
    pub fn tally(&self) -> String {
        format!("{} out of {}", self.correct_count, self.total_count)
    }
}
