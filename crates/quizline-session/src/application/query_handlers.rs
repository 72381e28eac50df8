//! Query handlers for the quiz session.
//!
//! Read-only views the presentation layer renders from. None of them expose
//! the correct answer of a question that is still open.

use quizline_core::error::QuizError;
use serde::Serialize;

use crate::domain::aggregates::{QuizSession, SessionPhase};
use crate::domain::scoring::accuracy_percent;
use crate::domain::tiers::PerformanceTier;

/// Read-only view of the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionView<'a> {
    /// 1-based question number.
    pub number: usize,
    /// Number of questions in the quiz.
    pub total: usize,
    /// The question text.
    pub prompt: &'a str,
    /// The answer choices, in display order.
    pub options: &'a [String],
    /// Whether the question has been answered.
    pub answered: bool,
}

/// Final performance summary of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultsSummary {
    /// Points earned.
    pub score: u32,
    /// Questions answered correctly.
    pub correct_count: usize,
    /// Questions answered incorrectly.
    pub wrong_count: usize,
    /// `round(correct_count / total_questions * 100)`.
    pub accuracy: u32,
    /// Number of questions in the quiz.
    pub total_questions: usize,
    /// Tier for `accuracy`.
    pub tier: PerformanceTier,
}

/// Running statistics, available in every phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Number of questions in the quiz.
    pub total_questions: usize,
    /// 1-based number of the question on screen; 0 before the quiz starts.
    pub current_question: usize,
    /// Points earned so far.
    pub score: u32,
    /// Correct answers so far.
    pub correct_answers: usize,
    /// Incorrect answers so far.
    pub wrong_answers: usize,
    /// Accuracy over the questions answered so far; 0 when none are.
    pub accuracy: u32,
}

impl QuizSession {
    /// Returns the question the user is looking at.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::SessionNotStarted` before `start()` and
    /// `QuizError::SessionCompleted` once every question has been passed.
    pub fn current_question(&self) -> Result<QuestionView<'_>, QuizError> {
        match self.phase {
            SessionPhase::NotStarted => return Err(QuizError::SessionNotStarted),
            SessionPhase::Completed => return Err(QuizError::SessionCompleted),
            SessionPhase::InProgress => {}
        }
        let question = self.bank.at(self.current_index)?;

        Ok(QuestionView {
            number: self.current_index + 1,
            total: self.bank.size(),
            prompt: question.prompt(),
            options: question.options(),
            answered: self.answered,
        })
    }

    /// Returns the final summary.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotCompleted` before the session is completed.
    pub fn results(&self) -> Result<ResultsSummary, QuizError> {
        if self.phase != SessionPhase::Completed {
            return Err(QuizError::NotCompleted);
        }
        let accuracy = self.accuracy();

        Ok(ResultsSummary {
            score: self.score,
            correct_count: self.correct_count(),
            wrong_count: self.wrong_count(),
            accuracy,
            total_questions: self.total_questions(),
            tier: PerformanceTier::from_accuracy(accuracy),
        })
    }

    /// Fraction of the quiz reached, for a progress bar.
    ///
    /// `(current_index + 1) / total` while in progress, `0.0` before the quiz
    /// starts and `1.0` once it is completed.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> f64 {
        match self.phase {
            SessionPhase::NotStarted => 0.0,
            SessionPhase::Completed => 1.0,
            SessionPhase::InProgress => {
                let total = self.bank.size();
                if total == 0 {
                    return 0.0;
                }
                ((self.current_index + 1) as f64 / total as f64).min(1.0)
            }
        }
    }

    /// Whether the current question is the last one, so the advance control
    /// can read "View Results" instead of "Next Question".
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.phase == SessionPhase::InProgress && self.current_index + 1 == self.bank.size()
    }

    /// Running statistics.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        let correct_answers = self.correct_count();
        let wrong_answers = self.wrong_count();
        let current_question = match self.phase {
            SessionPhase::NotStarted => 0,
            SessionPhase::InProgress | SessionPhase::Completed => {
                (self.current_index + 1).min(self.bank.size())
            }
        };

        SessionStats {
            total_questions: self.bank.size(),
            current_question,
            score: self.score,
            correct_answers,
            wrong_answers,
            accuracy: accuracy_percent(correct_answers, correct_answers + wrong_answers),
        }
    }
}
