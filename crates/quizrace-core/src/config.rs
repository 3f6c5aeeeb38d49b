//! Quiz configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::StartupError;

/// Top-level quizrace configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Quiz file to load when none is given on the command line.
    #[serde(default)]
    pub quiz_file: Option<PathBuf>,
    /// Seconds allowed per question.
    #[serde(default)]
    pub time_limit_secs: Option<u64>,
    /// Compare free-text answers case-sensitively.
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Parse a time limit given as a positive whole number of seconds.
pub fn parse_time_limit(input: &str) -> Result<Duration, StartupError> {
    match input.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(StartupError::InvalidTimeLimit {
            input: input.to_string(),
        }),
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizrace.toml` in the current directory
/// 2. `~/.config/quizrace/config.toml`
///
/// Environment variable overrides: `QUIZRACE_QUIZ_FILE`, `QUIZRACE_TIME_LIMIT`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig, StartupError> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => {
            return Err(StartupError::Config {
                path: p.to_path_buf(),
                message: "file not found".into(),
            })
        }
        None => {
            let local = PathBuf::from("quizrace.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|home| home.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => parse_config_file(&path)?,
        None => QuizConfig::default(),
    };

    if let Ok(file) = std::env::var("QUIZRACE_QUIZ_FILE") {
        config.quiz_file = Some(PathBuf::from(file));
    }

    if let Ok(limit) = std::env::var("QUIZRACE_TIME_LIMIT") {
        config.time_limit_secs = Some(parse_time_limit(&limit)?.as_secs());
    }

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<QuizConfig, StartupError> {
    let content = std::fs::read_to_string(path).map_err(|e| StartupError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let config: QuizConfig = toml::from_str(&content).map_err(|e| StartupError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if config.time_limit_secs == Some(0) {
        return Err(StartupError::Config {
            path: path.to_path_buf(),
            message: "time_limit_secs must be greater than 0".into(),
        });
    }

    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizrace"))
}
