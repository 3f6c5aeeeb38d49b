//! Startup error types.
//!
//! Everything that can go wrong before the first question is shown. None of
//! these are raised once a session is running: judging miscues score as
//! wrong answers and timeouts end the session normally.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a quiz from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The time limit was not a positive whole number of seconds.
    #[error("invalid time limit '{input}': expected a positive number of seconds")]
    InvalidTimeLimit { input: String },

    /// The quiz file does not exist.
    #[error("quiz file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The quiz file exists but could not be read.
    #[error("failed to read quiz file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record in the quiz file could not be turned into a question.
    #[error("malformed record in {source_name} at line {line}: {message}")]
    Malformed {
        source_name: String,
        line: u64,
        message: String,
    },

    /// Input closed while a startup value was still being prompted for.
    #[error("no {what} given: input closed")]
    MissingInput { what: &'static str },

    /// The config file could not be loaded.
    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}
