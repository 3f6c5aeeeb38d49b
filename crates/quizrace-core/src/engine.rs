//! Timed quiz engine.
//!
//! Presents questions one at a time and races each answer against its own
//! deadline. The first question to time out (or to find the input closed)
//! ends the whole session.

use std::time::Duration;

use tokio::time::Instant;

use crate::error::StartupError;
use crate::judge::{Judge, Verdict};
use crate::model::{AbortReason, Question, SessionResult};
use crate::session::QuizSession;
use crate::traits::AnswerSource;

/// Configuration for the quiz engine.
#[derive(Debug, Clone)]
pub struct QuizEngineConfig {
    /// Time allowed for each question.
    pub time_limit: Duration,
    /// How answers are judged.
    pub judge: Judge,
}

impl Default for QuizEngineConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(30),
            judge: Judge::default(),
        }
    }
}

/// Progress reporting trait.
pub trait QuizReporter: Send + Sync {
    /// A question was presented and its deadline armed.
    fn on_question(&self, index: usize, total: usize, question: &Question);
    /// An answer arrived in time and was judged.
    fn on_answer(&self, index: usize, question: &Question, verdict: &Verdict);
    /// The session stopped at this question.
    fn on_abort(&self, index: usize, question: &Question, reason: AbortReason);
    /// The session is over, either way.
    fn on_finish(&self, result: &SessionResult);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl QuizReporter for NoopReporter {
    fn on_question(&self, _: usize, _: usize, _: &Question) {}
    fn on_answer(&self, _: usize, _: &Question, _: &Verdict) {}
    fn on_abort(&self, _: usize, _: &Question, _: AbortReason) {}
    fn on_finish(&self, _: &SessionResult) {}
}

/// What decided a single question's race.
#[derive(Debug)]
enum RaceOutcome {
    Answered(String),
    Lost(AbortReason),
}

/// The timed quiz engine.
pub struct QuizEngine {
    config: QuizEngineConfig,
}

impl QuizEngine {
    /// Create an engine. The time limit must be non-zero.
    pub fn new(config: QuizEngineConfig) -> Result<Self, StartupError> {
        if config.time_limit.is_zero() {
            return Err(StartupError::InvalidTimeLimit {
                input: format!("{:?}", config.time_limit),
            });
        }
        Ok(Self { config })
    }

    /// Run one quiz session to completion or to its first timeout.
    ///
    /// Each question gets exactly one read from `source`, armed only after
    /// the previous question was settled.
    pub async fn run<S>(
        &self,
        questions: Vec<Question>,
        source: &mut S,
        reporter: &dyn QuizReporter,
    ) -> SessionResult
    where
        S: AnswerSource + ?Sized,
    {
        let mut session = QuizSession::new(questions, self.config.time_limit);
        let total = session.questions().len();
        session.begin();

        while let Some(index) = session.awaiting() {
            let deadline = Instant::now() + session.time_limit();
            let question = &session.questions()[index];
            reporter.on_question(index, total, question);

            match race(&mut *source, deadline).await {
                RaceOutcome::Answered(raw) => {
                    let verdict = self.config.judge.judge(question, &raw);
                    tracing::debug!(index, ?verdict, "answer judged");
                    reporter.on_answer(index, question, &verdict);
                    session.score(verdict.is_correct());
                    session.advance();
                }
                RaceOutcome::Lost(reason) => {
                    tracing::debug!(index, %reason, "question lost its race");
                    reporter.on_abort(index, question, reason);
                    session.abort(reason);
                }
            }
        }

        let result = session
            .result()
            .unwrap_or_else(|| SessionResult::completed(session.correct_count(), total));
        reporter.on_finish(&result);
        result
    }
}

/// Race one read against the deadline.
///
/// The deadline is polled first, so an answer that becomes ready at the same
/// instant the deadline passes is too late. Losing the race drops the read
/// future; the source is responsible for discarding whatever it later reads.
async fn race<S>(source: &mut S, deadline: Instant) -> RaceOutcome
where
    S: AnswerSource + ?Sized,
{
    tokio::select! {
        biased;

        () = tokio::time::sleep_until(deadline) => RaceOutcome::Lost(AbortReason::Timeout),
        line = source.next_line() => match line {
            Ok(Some(line)) => RaceOutcome::Answered(line),
            Ok(None) => RaceOutcome::Lost(AbortReason::EndOfInput),
            Err(e) => {
                tracing::warn!("answer source failed, treating as end of input: {e:#}");
                RaceOutcome::Lost(AbortReason::EndOfInput)
            }
        },
    }
}
