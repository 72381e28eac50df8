//! The ordered question bank.

use quizline_core::error::QuizError;
use quizline_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::question::Question;

/// An ordered, indexable collection of questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Creates an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a question to the end of the bank.
    pub fn append(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Reorders the bank into a uniformly random permutation (Fisher–Yates).
    ///
    /// Must only be called before a session over this bank starts; question
    /// indices already handed out become stale afterwards.
    pub fn shuffle(&mut self, rng: &mut dyn DeterministicRng) {
        for i in (1..self.questions.len()).rev() {
            let j = rng.next_index(i);
            self.questions.swap(i, j);
        }
        debug!(size = self.questions.len(), "question bank shuffled");
    }

    /// Number of questions in the bank.
    #[must_use]
    pub fn size(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank holds no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Returns the question at `index`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OutOfRange` if `index >= size()`.
    pub fn at(&self, index: usize) -> Result<&Question, QuizError> {
        self.questions.get(index).ok_or(QuizError::OutOfRange {
            index,
            size: self.questions.len(),
        })
    }

    /// All questions, in bank order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Iterates the questions in bank order.
    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl From<Vec<Question>> for QuestionBank {
    fn from(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

impl FromIterator<Question> for QuestionBank {
    fn from_iter<T: IntoIterator<Item = Question>>(iter: T) -> Self {
        Self {
            questions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
