//! Quizline — quiz session.
//!
//! Responsible for walking a question bank one question at a time,
//! accepting exactly one answer per question, keeping score, and
//! summarizing the attempt once the last question is passed.
//!
//! The session holds no reference to any presentation layer. Callers drive
//! it through its operations (or [`application::command_handlers::handle`])
//! and read its state and drained events back.

pub mod application;
pub mod domain;

pub use application::command_handlers::{CommandOutcome, HandledCommand, handle};
pub use application::query_handlers::{QuestionView, ResultsSummary, SessionStats};
pub use domain::aggregates::{Advance, AnswerOutcome, AnswerRecord, QuizSession, SessionPhase};
pub use domain::commands::SessionCommand;
pub use domain::events::{SessionEvent, SessionEventKind};
pub use domain::scoring::{POINTS_PER_CORRECT_ANSWER, accuracy_percent};
pub use domain::tiers::{PerformanceTier, performance_tier};
