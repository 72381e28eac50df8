//! Aggregate root for the quiz session.

use std::fmt;
use std::sync::Arc;

use quizline_bank::QuestionBank;
use quizline_core::aggregate::AggregateRoot;
use quizline_core::clock::Clock;
use quizline_core::error::QuizError;
use quizline_core::event::EventMetadata;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::events::{
    AnswerSubmitted, QuestionAdvanced, SessionCompleted, SessionEvent, SessionEventKind,
    SessionRestarted, SessionStarted,
};
use super::scoring::{POINTS_PER_CORRECT_ANSWER, accuracy_percent};

/// Session phase state machine.
///
/// `InProgress` covers both the unanswered and answered sub-states of the
/// current question; the `answered` flag on the session tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Created, `start()` not yet called.
    NotStarted,
    /// Walking through the questions.
    InProgress,
    /// Advanced past the last question. Terminal until `restart()`.
    Completed,
}

/// The outcome of one answered question. Never mutated once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Bank position of the answered question.
    pub question_index: usize,
    /// The option the user picked.
    pub chosen_index: usize,
    /// Whether the pick was correct.
    pub is_correct: bool,
}

/// Returned by [`QuizSession::submit_answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    /// Whether the pick was correct.
    pub is_correct: bool,
    /// The correct option, so it can be highlighted either way.
    pub correct_index: usize,
}

/// Returned by [`QuizSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advance {
    /// Whether that advance finished the quiz.
    pub completed: bool,
}

/// The aggregate root for one user's run through a question bank.
pub struct QuizSession {
    /// Aggregate identifier.
    pub(crate) id: Uuid,
    /// Number of events applied.
    pub(crate) version: i64,
    /// The questions, in the order they are asked.
    pub(crate) bank: QuestionBank,
    /// Source of event timestamps.
    clock: Arc<dyn Clock>,
    /// Current phase.
    pub(crate) phase: SessionPhase,
    /// 0-based position of the current question; equals the bank size once
    /// completed.
    pub(crate) current_index: usize,
    /// Accumulated points.
    pub(crate) score: u32,
    /// Whether the current question has been answered.
    pub(crate) answered: bool,
    /// One record per answered question, in question order.
    pub(crate) records: Vec<AnswerRecord>,
    /// Set by a restart until the quiz is started again or answered.
    awaiting_start: bool,
    /// Events produced since the last drain.
    uncommitted_events: Vec<SessionEvent>,
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("id", &self.id)
            .field("version", &self.version)
            .field("phase", &self.phase)
            .field("current_index", &self.current_index)
            .field("score", &self.score)
            .field("answered", &self.answered)
            .field("records", &self.records)
            .field("awaiting_start", &self.awaiting_start)
            .field("total_questions", &self.bank.size())
            .finish_non_exhaustive()
    }
}

impl QuizSession {
    /// Creates a session over `bank` in the `NotStarted` phase.
    #[must_use]
    pub fn new(id: Uuid, bank: QuestionBank, clock: Arc<dyn Clock>) -> Self {
        Self {
            id,
            version: 0,
            bank,
            clock,
            phase: SessionPhase::NotStarted,
            current_index: 0,
            score: 0,
            answered: false,
            records: Vec::new(),
            awaiting_start: false,
            uncommitted_events: Vec::new(),
        }
    }

    /// The session identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// 0-based position of the current question.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Accumulated points.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the current question has been answered.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// Answer records so far, in question order.
    #[must_use]
    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    /// Number of correct answers so far.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_correct).count()
    }

    /// Number of incorrect answers so far.
    #[must_use]
    pub fn wrong_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_correct).count()
    }

    /// Number of questions in the bank.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.bank.size()
    }

    /// Correct answers as a rounded percentage of all questions.
    #[must_use]
    pub fn accuracy(&self) -> u32 {
        accuracy_percent(self.correct_count(), self.total_questions())
    }

    /// The bank this session walks through.
    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Starts the quiz at the first question.
    ///
    /// Accepted from `NotStarted` and from the baseline that
    /// [`restart`](Self::restart) leaves behind, until its first answer.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyBank` if the bank has no questions, or
    /// `QuizError::AlreadyStarted` once a question has been answered or the
    /// quiz is completed.
    pub fn start(&mut self) -> Result<(), QuizError> {
        let startable = match self.phase {
            SessionPhase::NotStarted => true,
            SessionPhase::InProgress => self.awaiting_start,
            SessionPhase::Completed => false,
        };
        if !startable {
            warn!(session_id = %self.id, phase = ?self.phase, "start rejected: already started");
            return Err(QuizError::AlreadyStarted);
        }
        if self.bank.is_empty() {
            warn!(session_id = %self.id, "start rejected: empty question bank");
            return Err(QuizError::EmptyBank);
        }

        self.record(SessionEventKind::SessionStarted(SessionStarted {
            session_id: self.id,
            total_questions: self.bank.size(),
        }));
        info!(session_id = %self.id, total_questions = self.bank.size(), "quiz started");
        Ok(())
    }

    /// Submits the user's choice for the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadyAnswered` if the current question already
    /// has an answer, `QuizError::InvalidChoice` if `chosen_index` is not one
    /// of its options, and `QuizError::SessionNotStarted` /
    /// `QuizError::SessionCompleted` outside the `InProgress` phase.
    pub fn submit_answer(&mut self, chosen_index: usize) -> Result<AnswerOutcome, QuizError> {
        self.ensure_in_progress()?;
        if self.answered {
            warn!(
                session_id = %self.id,
                question_index = self.current_index,
                "answer rejected: already answered"
            );
            return Err(QuizError::AlreadyAnswered {
                question_index: self.current_index,
            });
        }

        let question = self.bank.at(self.current_index)?;
        let option_count = question.option_count();
        if chosen_index >= option_count {
            warn!(
                session_id = %self.id,
                chosen_index,
                option_count,
                "answer rejected: invalid choice"
            );
            return Err(QuizError::InvalidChoice {
                chosen_index,
                option_count,
            });
        }
        let is_correct = question.is_correct(chosen_index);
        let correct_index = question.correct_option_index();
        let points_awarded = if is_correct {
            POINTS_PER_CORRECT_ANSWER
        } else {
            0
        };

        self.record(SessionEventKind::AnswerSubmitted(AnswerSubmitted {
            session_id: self.id,
            question_index: self.current_index,
            chosen_index,
            correct_index,
            is_correct,
            points_awarded,
        }));
        debug!(
            session_id = %self.id,
            question_index = self.current_index,
            is_correct,
            score = self.score,
            "answer accepted"
        );

        Ok(AnswerOutcome {
            is_correct,
            correct_index,
        })
    }

    /// Moves past the answered current question.
    ///
    /// Advancing past the last question completes the session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotAnswered` if the current question has no answer
    /// yet, and `QuizError::SessionNotStarted` / `QuizError::SessionCompleted`
    /// outside the `InProgress` phase.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        self.ensure_in_progress()?;
        if !self.answered {
            warn!(
                session_id = %self.id,
                question_index = self.current_index,
                "advance rejected: not answered"
            );
            return Err(QuizError::NotAnswered {
                question_index: self.current_index,
            });
        }

        let next_index = self.current_index + 1;
        if next_index >= self.bank.size() {
            self.record(SessionEventKind::SessionCompleted(SessionCompleted {
                session_id: self.id,
                score: self.score,
                correct_count: self.correct_count(),
                wrong_count: self.wrong_count(),
                accuracy: self.accuracy(),
            }));
            info!(
                session_id = %self.id,
                score = self.score,
                accuracy = self.accuracy(),
                "quiz completed"
            );
            return Ok(Advance { completed: true });
        }

        self.record(SessionEventKind::QuestionAdvanced(QuestionAdvanced {
            session_id: self.id,
            from_index: self.current_index,
            to_index: next_index,
        }));
        debug!(session_id = %self.id, question_index = next_index, "advanced");
        Ok(Advance { completed: false })
    }

    /// Resets the session in place to the baseline `start()` produces,
    /// keeping the same bank in the same order. Always succeeds.
    ///
    /// With an empty bank there is no first question, so the session falls
    /// back to `NotStarted`.
    pub fn restart(&mut self) {
        self.record(SessionEventKind::SessionRestarted(SessionRestarted {
            session_id: self.id,
            total_questions: self.bank.size(),
        }));
        info!(session_id = %self.id, phase = ?self.phase, "quiz restarted");
    }

    /// Drains the events produced since the last call.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.uncommitted_events)
    }

    fn ensure_in_progress(&self) -> Result<(), QuizError> {
        match self.phase {
            SessionPhase::InProgress => Ok(()),
            SessionPhase::NotStarted => Err(QuizError::SessionNotStarted),
            SessionPhase::Completed => Err(QuizError::SessionCompleted),
        }
    }

    fn reset_progress(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.answered = false;
        self.records.clear();
    }

    /// Applies `kind` and queues it for observers.
    fn record(&mut self, kind: SessionEventKind) {
        let event = SessionEvent {
            metadata: EventMetadata {
                event_type: kind.event_type().to_owned(),
                aggregate_id: self.id,
                sequence_number: self.version + 1,
                occurred_at: self.clock.now(),
            },
            kind,
        };
        self.apply(&event);
        self.uncommitted_events.push(event);
    }
}

impl AggregateRoot for QuizSession {
    type Event = SessionEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            SessionEventKind::SessionStarted(_) => {
                self.reset_progress();
                self.awaiting_start = false;
                self.phase = SessionPhase::InProgress;
            }
            SessionEventKind::AnswerSubmitted(payload) => {
                self.records.push(AnswerRecord {
                    question_index: payload.question_index,
                    chosen_index: payload.chosen_index,
                    is_correct: payload.is_correct,
                });
                self.score += payload.points_awarded;
                self.answered = true;
                self.awaiting_start = false;
            }
            SessionEventKind::QuestionAdvanced(payload) => {
                self.current_index = payload.to_index;
                self.answered = false;
            }
            SessionEventKind::SessionCompleted(_) => {
                self.current_index = self.bank.size();
                self.answered = false;
                self.phase = SessionPhase::Completed;
            }
            SessionEventKind::SessionRestarted(_) => {
                self.reset_progress();
                self.awaiting_start = !self.bank.is_empty();
                self.phase = if self.bank.is_empty() {
                    SessionPhase::NotStarted
                } else {
                    SessionPhase::InProgress
                };
            }
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }
}
