//! Quiz session state.
//!
//! A `QuizSession` is the mutable state of one run: the question cursor,
//! the correct-answer tally, and where the run is in its lifecycle. Only the
//! engine drives it. Transitions called from the wrong state are refused
//! (they return `None` or leave the state unchanged).

use std::time::Duration;

use crate::model::{AbortReason, Question, SessionResult};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    /// Question `i` is on screen and its race is armed.
    AwaitingAnswer(usize),
    /// Question `i` got an answer in time and has been judged.
    Scored(usize),
    Completed,
    Aborted {
        question_index: usize,
        reason: AbortReason,
    },
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Completed | SessionState::Aborted { .. })
    }
}

/// State of one quiz run.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    correct_count: usize,
    time_limit: Duration,
    state: SessionState,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>, time_limit: Duration) -> Self {
        Self {
            questions,
            current_index: 0,
            correct_count: 0,
            time_limit,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Leave `Idle`: go to the first question, or straight to `Completed`
    /// when there are none.
    pub fn begin(&mut self) -> SessionState {
        if self.state == SessionState::Idle {
            self.state = if self.questions.is_empty() {
                SessionState::Completed
            } else {
                SessionState::AwaitingAnswer(0)
            };
            tracing::debug!(state = ?self.state, "session started");
        }
        self.state
    }

    /// Index of the question currently awaiting an answer.
    pub fn awaiting(&self) -> Option<usize> {
        match self.state {
            SessionState::AwaitingAnswer(i) => Some(i),
            _ => None,
        }
    }

    /// Record the judged answer for the awaiting question.
    ///
    /// Returns the question index, or `None` if no question was awaiting.
    pub fn score(&mut self, correct: bool) -> Option<usize> {
        let index = self.awaiting()?;
        if correct {
            self.correct_count += 1;
        }
        self.current_index = index + 1;
        self.state = SessionState::Scored(index);
        self.check_invariant();
        Some(index)
    }

    /// Move past a scored question to the next one, or to `Completed`.
    pub fn advance(&mut self) -> SessionState {
        if let SessionState::Scored(index) = self.state {
            let next = index + 1;
            self.state = if next == self.questions.len() {
                SessionState::Completed
            } else {
                SessionState::AwaitingAnswer(next)
            };
        }
        self.state
    }

    /// End the session at the awaiting question. The cursor stays on it.
    pub fn abort(&mut self, reason: AbortReason) -> Option<usize> {
        let index = self.awaiting()?;
        self.state = SessionState::Aborted {
            question_index: index,
            reason,
        };
        self.check_invariant();
        Some(index)
    }

    /// The final result, once the session is terminal.
    pub fn result(&self) -> Option<SessionResult> {
        match self.state {
            SessionState::Completed => Some(SessionResult::completed(
                self.correct_count,
                self.questions.len(),
            )),
            SessionState::Aborted {
                question_index,
                reason,
            } => Some(SessionResult::aborted(
                self.correct_count,
                question_index,
                reason,
            )),
            _ => None,
        }
    }

    fn check_invariant(&self) {
        debug_assert!(
            self.correct_count <= self.current_index && self.current_index <= self.questions.len(),
            "tally out of range: {} correct, index {}, {} questions",
            self.correct_count,
            self.current_index,
            self.questions.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_questions() -> QuizSession {
        QuizSession::new(
            vec![
                Question::free_text("2+2?", "4"),
                Question::free_text("Capital of France?", "Paris"),
            ],
            Duration::from_secs(5),
        )
    }

    #[test]
    fn empty_session_completes_immediately() {
        let mut session = QuizSession::new(vec![], Duration::from_secs(1));
        assert_eq!(session.begin(), SessionState::Completed);
        assert_eq!(session.result(), Some(SessionResult::completed(0, 0)));
    }

    #[test]
    fn walks_every_question() {
        let mut session = two_questions();
        assert_eq!(session.begin(), SessionState::AwaitingAnswer(0));

        assert_eq!(session.score(true), Some(0));
        assert_eq!(session.state(), SessionState::Scored(0));
        assert_eq!(session.advance(), SessionState::AwaitingAnswer(1));

        assert_eq!(session.score(false), Some(1));
        assert_eq!(session.advance(), SessionState::Completed);

        assert_eq!(session.current_index(), 2);
        assert_eq!(session.result(), Some(SessionResult::completed(1, 2)));
    }

    #[test]
    fn abort_freezes_cursor() {
        let mut session = two_questions();
        session.begin();
        session.score(true);
        session.advance();

        assert_eq!(session.abort(AbortReason::Timeout), Some(1));
        assert_eq!(session.current_index(), 1);
        assert!(session.state().is_terminal());

        let result = session.result().unwrap();
        assert_eq!(result.correct_count, 1);
        assert_eq!(result.total_count, 2);
        assert!(result.aborted);
    }

    #[test]
    fn out_of_order_transitions_are_refused() {
        let mut session = two_questions();
        assert_eq!(session.score(true), None);
        assert_eq!(session.abort(AbortReason::Timeout), None);
        assert_eq!(session.result(), None);

        session.begin();
        session.abort(AbortReason::EndOfInput);
        assert_eq!(session.score(true), None);
        assert_eq!(session.correct_count(), 0);
        assert!(matches!(session.advance(), SessionState::Aborted { .. }));
    }

    #[test]
    fn begin_only_once() {
        let mut session = two_questions();
        session.begin();
        session.score(true);
        assert_eq!(session.begin(), SessionState::Scored(0));
    }
}
