//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Every condition is locally recoverable: a failing operation leaves the
/// bank or session exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A session was started against a bank with no questions.
    #[error("cannot start a quiz with an empty question bank")]
    EmptyBank,

    /// A second answer was submitted for the same question.
    #[error("question {question_index} has already been answered")]
    AlreadyAnswered {
        /// The question that was already answered.
        question_index: usize,
    },

    /// The chosen option does not exist on the current question.
    #[error("choice {chosen_index} is out of range for a question with {option_count} options")]
    InvalidChoice {
        /// The rejected choice.
        chosen_index: usize,
        /// Number of options on the current question.
        option_count: usize,
    },

    /// The session was advanced before the current question was answered.
    #[error("question {question_index} must be answered before advancing")]
    NotAnswered {
        /// The unanswered question.
        question_index: usize,
    },

    /// Results were requested before the last question was advanced past.
    #[error("results are only available once the quiz is completed")]
    NotCompleted,

    /// The session was queried or driven before `start()`.
    #[error("the quiz session has not been started")]
    SessionNotStarted,

    /// The session was driven after it reached its terminal state.
    #[error("the quiz session is already completed")]
    SessionCompleted,

    /// `start()` was called on a session that is under way or finished.
    #[error("the quiz session has already been started")]
    AlreadyStarted,

    /// A bank index outside `[0, size)`.
    #[error("question index {index} is out of range for a bank of {size}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The bank size at the time of the request.
        size: usize,
    },

    /// A question that violates the question invariants.
    #[error("invalid question: {0}")]
    InvalidQuestion(String),

    /// A question bank source could not be read or parsed.
    #[error("failed to load question bank: {0}")]
    Load(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_choice_message_names_choice_and_option_count() {
        let err = QuizError::InvalidChoice {
            chosen_index: 7,
            option_count: 4,
        };

        assert_eq!(
            err.to_string(),
            "choice 7 is out of range for a question with 4 options"
        );
    }

    #[test]
    fn test_out_of_range_message_names_index_and_size() {
        let err = QuizError::OutOfRange { index: 5, size: 5 };

        assert_eq!(
            err.to_string(),
            "question index 5 is out of range for a bank of 5"
        );
    }
}
