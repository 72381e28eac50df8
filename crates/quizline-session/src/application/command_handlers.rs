//! Command handlers for the quiz session.
//!
//! The presentation layer turns user input into a [`SessionCommand`] and
//! hands it here: the command is executed against the session and the events
//! it produced are drained and returned alongside the outcome.

use quizline_core::command::Command;
use quizline_core::error::QuizError;
use tracing::instrument;

use crate::domain::aggregates::{Advance, AnswerOutcome, QuizSession};
use crate::domain::commands::SessionCommand;
use crate::domain::events::SessionEvent;

/// What a successfully handled command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The quiz is at its first question.
    Started,
    /// The answer was accepted.
    Answered(AnswerOutcome),
    /// The session moved on.
    Advanced(Advance),
    /// The session was reset.
    Restarted,
}

/// Result of a successfully handled command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandledCommand {
    /// The command's outcome.
    pub outcome: CommandOutcome,
    /// Events produced by the command, in order.
    pub events: Vec<SessionEvent>,
}

/// Executes `command` against `session`.
///
/// # Errors
///
/// Returns the `QuizError` of the underlying session operation. A rejected
/// command leaves the session unchanged and produces no events.
#[instrument(skip(session), fields(session_id = %session.id(), command_type = command.command_type()))]
pub fn handle(
    session: &mut QuizSession,
    command: SessionCommand,
) -> Result<HandledCommand, QuizError> {
    let outcome = match command {
        SessionCommand::Start => {
            session.start()?;
            CommandOutcome::Started
        }
        SessionCommand::SubmitAnswer { chosen_index } => {
            CommandOutcome::Answered(session.submit_answer(chosen_index)?)
        }
        SessionCommand::Advance => CommandOutcome::Advanced(session.advance()?),
        SessionCommand::Restart => {
            session.restart();
            CommandOutcome::Restarted
        }
    };

    Ok(HandledCommand {
        outcome,
        events: session.take_events(),
    })
}
