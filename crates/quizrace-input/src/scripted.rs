//! Scripted answer source for testing.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;

use quizrace_core::traits::AnswerSource;

/// One scripted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    /// Deliver `answer` after `delay`.
    After(Duration, String),
    /// Never deliver anything.
    Silent,
    /// Report end of input.
    Closed,
}

/// An answer source that replays a fixed script, for driving the engine
/// without a terminal.
///
/// Delays use tokio's clock, so tests with paused time run instantly. Once
/// the script is exhausted every read reports end of input.
pub struct ScriptedAnswers {
    script: VecDeque<ScriptedAnswer>,
    /// Number of reads started.
    call_count: u32,
}

impl ScriptedAnswers {
    pub fn new(script: Vec<ScriptedAnswer>) -> Self {
        Self {
            script: script.into(),
            call_count: 0,
        }
    }

    /// Answers delivered the moment they are asked for.
    pub fn immediate(answers: &[&str]) -> Self {
        Self::new(
            answers
                .iter()
                .map(|a| ScriptedAnswer::After(Duration::ZERO, a.to_string()))
                .collect(),
        )
    }

    /// Get the number of reads started against this source.
    pub fn call_count(&self) -> u32 {
        self.call_count
    }

    /// Script entries not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswers {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        self.call_count += 1;

        match self.script.pop_front() {
            Some(ScriptedAnswer::After(delay, answer)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(Some(answer))
            }
            Some(ScriptedAnswer::Silent) => std::future::pending().await,
            Some(ScriptedAnswer::Closed) | None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn replays_in_order() {
        let mut source = ScriptedAnswers::new(vec![
            ScriptedAnswer::After(Duration::from_secs(2), "4".into()),
            ScriptedAnswer::After(Duration::ZERO, "Paris".into()),
            ScriptedAnswer::Closed,
        ]);

        let start = tokio::time::Instant::now();
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("4"));
        assert!(start.elapsed() >= Duration::from_secs(2));
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("Paris"));
        assert_eq!(source.next_line().await.unwrap(), None);
        assert_eq!(source.next_line().await.unwrap(), None);
        assert_eq!(source.call_count(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn silent_entry_never_resolves() {
        let mut source = ScriptedAnswers::new(vec![ScriptedAnswer::Silent]);
        let read = tokio::time::timeout(Duration::from_secs(3600), source.next_line()).await;
        assert!(read.is_err());
        assert_eq!(source.remaining(), 0);
    }

    #[tokio::test]
    async fn immediate_answers() {
        let mut source = ScriptedAnswers::immediate(&["a", "b"]);
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("a"));
        assert_eq!(source.remaining(), 1);
    }
}
