//! quizrace-input: Answer sources.
//!
//! Implements the `AnswerSource` trait for stdin (or any buffered reader)
//! and for scripted answers used in tests.

pub mod error;
pub mod line;
pub mod scripted;

pub use error::InputError;
pub use line::LineSource;
pub use scripted::{ScriptedAnswer, ScriptedAnswers};
