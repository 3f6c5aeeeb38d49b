//! CSV question loader.
//!
//! Loads questions from comma-delimited files and validates them. Each
//! record is `question, answer, choice1, choice2, ...` with standard CSV
//! quoting; there is no header row.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::StartupError;
use crate::judge::normalize;
use crate::model::{AnswerMode, Question};

/// Load every question from a CSV file.
pub fn load_questions(path: &Path) -> Result<Vec<Question>, StartupError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StartupError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(StartupError::Unreadable {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let questions = parse_questions_str(&content, &path.display().to_string())?;
    tracing::debug!("loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

/// Parse CSV text into questions (useful for testing).
///
/// `source_name` only appears in error messages.
pub fn parse_questions_str(content: &str, source_name: &str) -> Result<Vec<Question>, StartupError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut questions = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| StartupError::Malformed {
            source_name: source_name.to_string(),
            line: e.position().map(|p| p.line()).unwrap_or(0),
            message: e.to_string(),
        })?;

        // Whitespace-only lines come through as a single empty field
        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.len() < 2 {
            return Err(StartupError::Malformed {
                source_name: source_name.to_string(),
                line,
                message: format!(
                    "expected a question and an answer, found {} field(s)",
                    record.len()
                ),
            });
        }

        // Trailing commas leave empty choice fields behind
        let fields: Vec<&str> = record.iter().skip(2).collect();
        let kept = fields.iter().rposition(|c| !c.is_empty()).map_or(0, |i| i + 1);
        let choices = fields[..kept].iter().map(|c| c.to_string()).collect();

        questions.push(Question {
            text: record[0].to_string(),
            correct_answer: record[1].to_string(),
            choices,
        });
    }

    Ok(questions)
}

/// A warning from question set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based question number (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Check a question set for problems that would make a question unanswerable
/// or confusing. Running a quiz never depends on this.
pub fn validate_questions(questions: &[Question]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if questions.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "quiz has no questions".into(),
        });
    }

    let mut seen = HashSet::new();
    for (i, q) in questions.iter().enumerate() {
        let number = Some(i + 1);

        if q.text.is_empty() {
            warnings.push(ValidationWarning {
                question: number,
                message: "question text is empty".into(),
            });
        } else if !seen.insert(normalize(&q.text, false)) {
            warnings.push(ValidationWarning {
                question: number,
                message: format!("duplicate question: {}", q.text),
            });
        }

        if q.correct_answer.is_empty() {
            warnings.push(ValidationWarning {
                question: number,
                message: "correct answer is empty".into(),
            });
        }

        if q.mode() == AnswerMode::MultipleChoice
            && !q.choices.iter().any(|c| c == &q.correct_answer)
        {
            warnings.push(ValidationWarning {
                question: number,
                message: format!(
                    "answer '{}' is not one of the choices, so no choice can score",
                    q.correct_answer
                ),
            });
        }
    }

    warnings
}
