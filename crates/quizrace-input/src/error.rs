//! Answer source error types.

use thiserror::Error;

/// Errors that can occur while reading answers.
#[derive(Debug, Error)]
pub enum InputError {
    /// The background reader thread is gone (it panicked or failed to start).
    #[error("input reader stopped")]
    ReaderStopped,

    /// Reading from the underlying stream failed.
    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),
}
