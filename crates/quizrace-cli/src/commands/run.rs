//! The `quizrace run` command.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use quizrace_core::config::{load_config_from, parse_time_limit};
use quizrace_core::judge::{Judge, Verdict};
use quizrace_core::parser::load_questions;
use quizrace_core::{
    AbortReason, AnswerSource, Question, QuizEngine, QuizEngineConfig, QuizReporter,
    SessionResult, StartupError,
};
use quizrace_input::LineSource;

/// Console progress reporter.
struct ConsoleReporter;

impl QuizReporter for ConsoleReporter {
    fn on_question(&self, index: usize, _total: usize, question: &Question) {
        println!("Question {}: {}", index + 1, question.text);
        for (j, choice) in question.choices.iter().enumerate() {
            println!("  {}. {choice}", j + 1);
        }
        print!("> ");
        let _ = std::io::stdout().flush();
    }

    fn on_answer(&self, _index: usize, _question: &Question, _verdict: &Verdict) {}

    fn on_abort(&self, _index: usize, question: &Question, reason: AbortReason) {
        match reason {
            AbortReason::Timeout => println!("\nTime's up!"),
            AbortReason::EndOfInput => println!("\nNo more input."),
        }
        println!("The correct answer was: {}", question.correct_answer);
    }

    fn on_finish(&self, result: &SessionResult) {
        println!("You got {} questions correct.", result.tally());
    }
}

/// Everything needed to start a session.
struct PreparedQuiz {
    questions: Vec<Question>,
    time_limit: Duration,
    judge: Judge,
}

pub async fn execute(
    file: Option<PathBuf>,
    time_limit: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    // One reader for the whole process: startup prompts and answers share it
    let mut input = LineSource::stdin()?;

    let quiz = match prepare(file, time_limit, config_path, &mut input).await {
        Ok(quiz) => quiz,
        Err(e) => {
            tracing::debug!("startup failed: {e:?}");
            eprintln!("{e}");
            return Ok(());
        }
    };

    let engine = QuizEngine::new(QuizEngineConfig {
        time_limit: quiz.time_limit,
        judge: quiz.judge,
    })?;

    let result = engine
        .run(quiz.questions, &mut input, &ConsoleReporter)
        .await;
    tracing::debug!(?result, "session finished");

    Ok(())
}

/// Resolve the quiz file and time limit (flag, then environment or config,
/// then prompt) and load the questions.
async fn prepare(
    file: Option<PathBuf>,
    time_limit: Option<String>,
    config_path: Option<PathBuf>,
    input: &mut LineSource,
) -> Result<PreparedQuiz, StartupError> {
    let config = load_config_from(config_path.as_deref())?;

    let file = match file.or(config.quiz_file) {
        Some(file) => file,
        None => PathBuf::from(
            prompt(
                input,
                "Enter the name of the quiz file (e.g., quiz.csv): ",
                "quiz file",
            )
            .await?
            .trim(),
        ),
    };

    let time_limit = match (time_limit, config.time_limit_secs) {
        (Some(raw), _) => parse_time_limit(&raw)?,
        (None, Some(secs)) => Duration::from_secs(secs),
        (None, None) => {
            let raw = prompt(
                input,
                "Enter the amount of time per question (in seconds): ",
                "time limit",
            )
            .await?;
            parse_time_limit(&raw)?
        }
    };

    let questions = load_questions(&file)?;

    Ok(PreparedQuiz {
        questions,
        time_limit,
        judge: Judge::new(config.case_sensitive),
    })
}

/// Ask for one line. There is no deadline on startup prompts.
async fn prompt(
    input: &mut LineSource,
    message: &str,
    what: &'static str,
) -> Result<String, StartupError> {
    print!("{message}");
    let _ = std::io::stdout().flush();

    match input.next_line().await {
        Ok(Some(line)) => Ok(line),
        Ok(None) => Err(StartupError::MissingInput { what }),
        Err(e) => {
            tracing::warn!("failed to read {what}: {e:#}");
            Err(StartupError::MissingInput { what })
        }
    }
}
