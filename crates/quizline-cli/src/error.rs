//! Quizline — CLI error types.

use quizline_core::error::QuizError;
use thiserror::Error;

/// Startup and runtime errors for the terminal front end.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable holds an invalid value.
    #[error("configuration error: {0}")]
    Config(String),

    /// The question bank could not be loaded or the session refused to run.
    #[error(transparent)]
    Quiz(#[from] QuizError),

    /// Reading input or writing the screen failed.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_error_message_passes_through() {
        let err = AppError::from(QuizError::Load("cannot read bank.yaml".to_owned()));

        assert_eq!(
            err.to_string(),
            "failed to load question bank: cannot read bank.yaml"
        );
    }

    #[test]
    fn test_config_error_message() {
        let err = AppError::Config("QUIZ_SEED must be a valid u64".to_owned());

        assert_eq!(
            err.to_string(),
            "configuration error: QUIZ_SEED must be a valid u64"
        );
    }
}
