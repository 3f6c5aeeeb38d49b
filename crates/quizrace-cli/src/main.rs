//! quizrace CLI: a timed quiz in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "quizrace", version, about = "Timed terminal quiz runner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a quiz (the default; prompts for anything not given)
    Run {
        /// Path to the CSV quiz file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Seconds allowed per question
        #[arg(long)]
        time_limit: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a quiz file and list its questions
    Validate {
        /// Path to the CSV quiz file
        #[arg(long)]
        file: PathBuf,
    },

    /// Create a sample quiz and config
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizrace=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Run {
        file: None,
        time_limit: None,
        config: None,
    }) {
        Commands::Run {
            file,
            time_limit,
            config,
        } => commands::run::execute(file, time_limit, config).await,
        Commands::Validate { file } => commands::validate::execute(file),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
