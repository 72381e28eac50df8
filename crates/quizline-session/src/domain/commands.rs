//! Commands for the quiz session.

use quizline_core::command::Command;

/// A user intent forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Begin the quiz.
    Start,
    /// Answer the current question with the option at `chosen_index`.
    SubmitAnswer {
        /// 0-based option index.
        chosen_index: usize,
    },
    /// Move past the answered current question.
    Advance,
    /// Reset to the first question.
    Restart,
}

impl Command for SessionCommand {
    fn command_type(&self) -> &'static str {
        match self {
            Self::Start => "session.start",
            Self::SubmitAnswer { .. } => "session.submit_answer",
            Self::Advance => "session.advance",
            Self::Restart => "session.restart",
        }
    }
}
