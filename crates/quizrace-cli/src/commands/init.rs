//! The `quizrace init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing("quizrace.toml", SAMPLE_CONFIG)?;
    write_if_missing("quiz.csv", SAMPLE_QUIZ)?;

    println!("\nNext steps:");
    println!("  1. Edit quiz.csv with your own questions");
    println!("  2. Run: quizrace validate --file quiz.csv");
    println!("  3. Run: quizrace run");

    Ok(())
}

fn write_if_missing(path: &str, content: &str) -> Result<()> {
    if std::path::Path::new(path).exists() {
        println!("{path} already exists, skipping.");
    } else {
        std::fs::write(path, content)?;
        println!("Created {path}");
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizrace configuration

quiz_file = "quiz.csv"
time_limit_secs = 10

# Free-text answers ignore case unless this is true
case_sensitive = false
"#;

const SAMPLE_QUIZ: &str = "\
2+2?,4
Capital of France?,Paris,London,Paris,Rome
\"Largest planet, by mass?\",Jupiter,Saturn,Jupiter,Neptune
Chemical symbol for gold?,Au
";
