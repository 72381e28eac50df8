//! Domain events for the quiz session.

use quizline_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Emitted when a session begins at its first question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStarted {
    /// The session identifier.
    pub session_id: Uuid,
    /// Number of questions in the bank.
    pub total_questions: usize,
}

/// Emitted when an answer is accepted for the current question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSubmitted {
    /// The session identifier.
    pub session_id: Uuid,
    /// The question that was answered.
    pub question_index: usize,
    /// The option the user picked.
    pub chosen_index: usize,
    /// The option that was correct.
    pub correct_index: usize,
    /// Whether the pick was correct.
    pub is_correct: bool,
    /// Points added to the score by this answer.
    pub points_awarded: u32,
}

/// Emitted when the session moves on to another question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAdvanced {
    /// The session identifier.
    pub session_id: Uuid,
    /// The question that was left.
    pub from_index: usize,
    /// The new current question.
    pub to_index: usize,
}

/// Emitted when the session advances past its last question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCompleted {
    /// The session identifier.
    pub session_id: Uuid,
    /// Final score.
    pub score: u32,
    /// Questions answered correctly.
    pub correct_count: usize,
    /// Questions answered incorrectly.
    pub wrong_count: usize,
    /// Final accuracy percentage.
    pub accuracy: u32,
}

/// Emitted when a session is reset to its starting baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRestarted {
    /// The session identifier.
    pub session_id: Uuid,
    /// Number of questions in the bank.
    pub total_questions: usize,
}

/// Event type identifier for [`SessionStarted`].
pub const SESSION_STARTED_EVENT_TYPE: &str = "session.started";

/// Event type identifier for [`AnswerSubmitted`].
pub const ANSWER_SUBMITTED_EVENT_TYPE: &str = "session.answer_submitted";

/// Event type identifier for [`QuestionAdvanced`].
pub const QUESTION_ADVANCED_EVENT_TYPE: &str = "session.question_advanced";

/// Event type identifier for [`SessionCompleted`].
pub const SESSION_COMPLETED_EVENT_TYPE: &str = "session.completed";

/// Event type identifier for [`SessionRestarted`].
pub const SESSION_RESTARTED_EVENT_TYPE: &str = "session.restarted";

/// Event payload variants for the quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEventKind {
    /// The session has started.
    SessionStarted(SessionStarted),
    /// An answer has been accepted.
    AnswerSubmitted(AnswerSubmitted),
    /// The session moved to the next question.
    QuestionAdvanced(QuestionAdvanced),
    /// The session reached its terminal state.
    SessionCompleted(SessionCompleted),
    /// The session was reset.
    SessionRestarted(SessionRestarted),
}

impl SessionEventKind {
    /// Returns the event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::SessionStarted(_) => SESSION_STARTED_EVENT_TYPE,
            Self::AnswerSubmitted(_) => ANSWER_SUBMITTED_EVENT_TYPE,
            Self::QuestionAdvanced(_) => QUESTION_ADVANCED_EVENT_TYPE,
            Self::SessionCompleted(_) => SESSION_COMPLETED_EVENT_TYPE,
            Self::SessionRestarted(_) => SESSION_RESTARTED_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: SessionEventKind,
}

impl DomainEvent for SessionEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Derived payloads have string keys only, so this never hits the default.
        serde_json::to_value(&self.kind).unwrap_or_default()
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
