//! Core trait definitions for answer sources.
//!
//! Implemented by the `quizrace-input` crate.

use async_trait::async_trait;

/// A line-oriented supplier of answers.
///
/// The engine races `next_line` against a deadline and drops the future if
/// the deadline wins. Implementations must therefore tolerate being dropped
/// mid-read: a line that completes after its future was dropped must be
/// discarded, never handed to a later call. A read must not need polling to
/// make progress, and nothing may be read before `next_line` is first polled.
#[async_trait]
pub trait AnswerSource: Send {
    /// Read the next line, without its line terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    async fn next_line(&mut self) -> anyhow::Result<Option<String>>;
}

#[async_trait]
impl<S: AnswerSource + ?Sized> AnswerSource for Box<S> {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        (**self).next_line().await
    }
}
