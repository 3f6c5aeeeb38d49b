//! The `quizrace validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizrace_core::parser::{load_questions, validate_questions};

pub fn execute(file: PathBuf) -> Result<()> {
    let questions = load_questions(&file)?;

    println!("Quiz: {} ({} questions)", file.display(), questions.len());

    if !questions.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["#", "Question", "Mode", "Answer", "Choices"]);
        for (i, q) in questions.iter().enumerate() {
            let choices = q
                .choices
                .iter()
                .enumerate()
                .map(|(j, c)| format!("{}. {c}", j + 1))
                .collect::<Vec<_>>()
                .join("  ");
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(&q.text),
                Cell::new(q.mode()),
                Cell::new(&q.correct_answer),
                Cell::new(choices),
            ]);
        }
        println!("{table}");
    }

    let warnings = validate_questions(&questions);
    for w in &warnings {
        let prefix = w
            .question
            .map(|n| format!("  [{n}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Quiz file valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
