//! The immutable multiple-choice question record.

use quizline_core::error::QuizError;
use serde::{Deserialize, Serialize};

/// Minimum number of options a question must offer.
pub const MIN_OPTIONS: usize = 2;

/// A multiple-choice question.
///
/// Construction validates that there are at least [`MIN_OPTIONS`] options and
/// that the correct index points at one of them, so every `Question` value is
/// valid. Deserialization goes through the same check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    pub(crate) prompt: String,
    pub(crate) options: Vec<String>,
    pub(crate) correct_option_index: usize,
}

/// Wire shape accepted from bank files before validation.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    #[serde(alias = "question")]
    prompt: String,
    options: Vec<String>,
    #[serde(alias = "correctAnswer", alias = "correct_answer")]
    correct_option_index: usize,
}

impl TryFrom<RawQuestion> for Question {
    type Error = QuizError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        Self::new(raw.prompt, raw.options, raw.correct_option_index)
    }
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidQuestion` if the prompt is blank, fewer than
    /// two options are given, or `correct_option_index` is not a valid option
    /// index.
    pub fn new<P, I, O>(
        prompt: P,
        options: I,
        correct_option_index: usize,
    ) -> Result<Self, QuizError>
    where
        P: Into<String>,
        I: IntoIterator<Item = O>,
        O: Into<String>,
    {
        let prompt = prompt.into();
        let options: Vec<String> = options.into_iter().map(Into::into).collect();

        if prompt.trim().is_empty() {
            return Err(QuizError::InvalidQuestion(
                "prompt must not be empty".to_owned(),
            ));
        }
        if options.len() < MIN_OPTIONS {
            return Err(QuizError::InvalidQuestion(format!(
                "expected at least {MIN_OPTIONS} options, got {}",
                options.len()
            )));
        }
        if correct_option_index >= options.len() {
            return Err(QuizError::InvalidQuestion(format!(
                "correct option index {correct_option_index} is out of range for {} options",
                options.len()
            )));
        }

        Ok(Self {
            prompt,
            options,
            correct_option_index,
        })
    }

    /// The question text.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The answer choices, in display order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Number of answer choices.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Index of the correct answer within [`options`](Self::options).
    #[must_use]
    pub fn correct_option_index(&self) -> usize {
        self.correct_option_index
    }

    /// Whether `chosen_index` is the correct answer.
    #[must_use]
    pub fn is_correct(&self, chosen_index: usize) -> bool {
        chosen_index == self.correct_option_index
    }
}
