//! quizrace-core: Question loading, judging, and the timed quiz engine.
//!
//! This crate defines the data model, the answer-source trait, and the
//! engine that races every answer against a per-question deadline.

pub mod config;
pub mod engine;
pub mod error;
pub mod judge;
pub mod model;
pub mod parser;
pub mod session;
pub mod traits;

pub use engine::{NoopReporter, QuizEngine, QuizEngineConfig, QuizReporter};
pub use error::StartupError;
pub use model::{AbortReason, Question, SessionEnd, SessionResult};
pub use traits::AnswerSource;
