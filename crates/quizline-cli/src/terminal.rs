//! Line-oriented terminal front end.
//!
//! Each input line is parsed into a [`Key`], turned into a
//! [`SessionCommand`] for the current phase and handed to
//! [`quizline_session::handle`]. The screen is redrawn from the session's
//! read-only views after every accepted command; rejected commands print a
//! one-line notice and leave the screen as it was.

use std::io::{BufRead, Write};

use quizline_core::error::QuizError;
use quizline_core::event::DomainEvent;
use quizline_core::rng::DeterministicRng;
use quizline_session::{
    CommandOutcome, POINTS_PER_CORRECT_ANSWER, QuizSession, SessionCommand, SessionEvent,
    SessionPhase, handle,
};
use tracing::{debug, info, instrument, warn};

use crate::error::AppError;

const PROGRESS_BAR_WIDTH: usize = 20;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// An option number, already converted to a 0-based index.
    Choice(usize),
    /// Enter or `n`: start the quiz or move to the next question.
    Next,
    /// `r`: start over from the first question.
    Restart,
    /// `q`: leave the quiz.
    Quit,
    /// Anything else.
    Unknown,
}

impl Key {
    /// Parses a raw input line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim().to_ascii_lowercase();
        match line.as_str() {
            "" | "n" | "next" => Self::Next,
            "r" | "restart" => Self::Restart,
            "q" | "quit" | "exit" => Self::Quit,
            other => match other.parse::<usize>() {
                Ok(number) if number >= 1 => Self::Choice(number - 1),
                _ => Self::Unknown,
            },
        }
    }
}

/// Drives a [`QuizSession`] from a line reader and renders it to a writer.
pub struct TerminalAdapter<R, W> {
    session: QuizSession,
    rng: Box<dyn DeterministicRng>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalAdapter<R, W> {
    /// Creates an adapter. `rng` picks the results message.
    #[must_use]
    pub fn new(session: QuizSession, rng: Box<dyn DeterministicRng>, input: R, output: W) -> Self {
        Self {
            session,
            rng,
            input,
            output,
        }
    }

    /// The session being driven.
    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Consumes the adapter, returning the writer.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user quits or the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` when reading input or writing the screen fails.
    /// Rejected quiz commands are shown to the user, not returned.
    #[instrument(skip_all, fields(session_id = %self.session.id()))]
    pub fn run(&mut self) -> Result<(), AppError> {
        self.render_start()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed");
                break;
            }

            let key = Key::parse(&line);
            if key == Key::Quit {
                break;
            }
            self.on_key(key)?;
        }

        info!(score = self.session.score(), phase = ?self.session.phase(), "leaving quiz");
        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn on_key(&mut self, key: Key) -> Result<(), AppError> {
        let Some(command) = self.command_for(key) else {
            return self.render_hint();
        };

        match handle(&mut self.session, command) {
            Ok(handled) => {
                log_events(&handled.events);
                self.render_outcome(handled.outcome)
            }
            Err(err) => {
                warn!(error = %err, "command rejected");
                writeln!(self.output, "  {}", describe_rejection(&err))?;
                Ok(())
            }
        }
    }

    fn command_for(&self, key: Key) -> Option<SessionCommand> {
        match (self.session.phase(), key) {
            (_, Key::Restart) => Some(SessionCommand::Restart),
            (SessionPhase::NotStarted, Key::Next) => Some(SessionCommand::Start),
            (SessionPhase::InProgress, Key::Choice(chosen_index)) => {
                Some(SessionCommand::SubmitAnswer { chosen_index })
            }
            (SessionPhase::InProgress, Key::Next) => Some(SessionCommand::Advance),
            _ => None,
        }
    }

    fn render_outcome(&mut self, outcome: CommandOutcome) -> Result<(), AppError> {
        match outcome {
            CommandOutcome::Started | CommandOutcome::Restarted => {
                if self.session.phase() == SessionPhase::InProgress {
                    self.render_question()
                } else {
                    self.render_start()
                }
            }
            CommandOutcome::Answered(answer) => {
                self.render_feedback(answer.is_correct, answer.correct_index)
            }
            CommandOutcome::Advanced(advance) if advance.completed => self.render_results(),
            CommandOutcome::Advanced(_) => self.render_question(),
        }
    }

    fn render_start(&mut self) -> Result<(), AppError> {
        let total = self.session.total_questions();
        writeln!(self.output)?;
        writeln!(self.output, "=== Quizline ===")?;
        writeln!(
            self.output,
            "{total} questions, {POINTS_PER_CORRECT_ANSWER} points for each correct answer."
        )?;
        writeln!(self.output, "Press Enter to start, q to quit.")?;
        Ok(())
    }

    fn render_question(&mut self) -> Result<(), AppError> {
        let view = self.session.current_question()?;
        let filled = view.number * PROGRESS_BAR_WIDTH / view.total;

        writeln!(self.output)?;
        writeln!(
            self.output,
            "Question {} of {}  [{}{}]",
            view.number,
            view.total,
            "#".repeat(filled),
            "-".repeat(PROGRESS_BAR_WIDTH - filled)
        )?;
        writeln!(self.output, "Score: {}", self.session.score())?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", view.prompt)?;
        write_options(&mut self.output, view.options, |_| "")?;
        writeln!(
            self.output,
            "Answer with 1-{}, r to restart, q to quit.",
            view.options.len()
        )?;
        Ok(())
    }

    fn render_feedback(&mut self, is_correct: bool, correct_index: usize) -> Result<(), AppError> {
        let chosen_index = self
            .session
            .records()
            .last()
            .map_or(correct_index, |record| record.chosen_index);
        let is_last = self.session.is_last_question();
        let view = self.session.current_question()?;

        writeln!(self.output)?;
        if is_correct {
            writeln!(
                self.output,
                "Correct! +{POINTS_PER_CORRECT_ANSWER} points"
            )?;
        } else {
            writeln!(self.output, "Incorrect!")?;
        }
        write_options(&mut self.output, view.options, |index| {
            if index == correct_index {
                "  <- correct"
            } else if index == chosen_index {
                "  <- your answer"
            } else {
                ""
            }
        })?;
        writeln!(self.output, "Score: {}", self.session.score())?;
        let next = if is_last {
            "View Results"
        } else {
            "Next Question"
        };
        writeln!(self.output, "Press Enter for {next}.")?;
        Ok(())
    }

    fn render_results(&mut self) -> Result<(), AppError> {
        let results = self.session.results()?;
        let message = results.tier.message(self.rng.as_mut());

        writeln!(self.output)?;
        writeln!(self.output, "=== Results ===")?;
        writeln!(self.output, "{} {}", results.tier.icon(), results.tier.title())?;
        if results.tier.celebrates() {
            writeln!(self.output, "🎉 🎉 🎉")?;
        }
        writeln!(
            self.output,
            "Score: {} / {}",
            results.score,
            results.total_questions * POINTS_PER_CORRECT_ANSWER as usize
        )?;
        writeln!(
            self.output,
            "Correct: {}  Wrong: {}",
            results.correct_count, results.wrong_count
        )?;
        writeln!(self.output, "Accuracy: {}%", results.accuracy)?;
        writeln!(self.output, "{message}")?;
        writeln!(self.output, "Press r to play again, q to quit.")?;
        Ok(())
    }

    fn render_hint(&mut self) -> Result<(), AppError> {
        let hint = match self.session.phase() {
            SessionPhase::NotStarted => "Press Enter to start, q to quit.".to_owned(),
            SessionPhase::InProgress if self.session.is_answered() => {
                "Press Enter to continue, r to restart, q to quit.".to_owned()
            }
            SessionPhase::InProgress => {
                let option_count = self.session.current_question()?.options.len();
                format!("Answer with 1-{option_count}, r to restart, q to quit.")
            }
            SessionPhase::Completed => "Press r to play again, q to quit.".to_owned(),
        };
        writeln!(self.output, "  {hint}")?;
        Ok(())
    }
}

/// Writes the numbered option list, appending `mark(index)` to each line.
fn write_options<W, M>(output: &mut W, options: &[String], mark: M) -> std::io::Result<()>
where
    W: Write,
    M: Fn(usize) -> &'static str,
{
    for (index, option) in options.iter().enumerate() {
        writeln!(output, "  {}) {option}{}", index + 1, mark(index))?;
    }
    Ok(())
}

/// User-facing wording for a rejected command; option numbers are 1-based.
fn describe_rejection(err: &QuizError) -> String {
    match err {
        QuizError::InvalidChoice { option_count, .. } => {
            format!("Pick an option between 1 and {option_count}.")
        }
        QuizError::AlreadyAnswered { .. } => {
            "This question is already answered. Press Enter to continue.".to_owned()
        }
        QuizError::NotAnswered { .. } => "Answer the question before moving on.".to_owned(),
        other => other.to_string(),
    }
}

fn log_events(events: &[SessionEvent]) {
    for event in events {
        debug!(
            event_type = event.event_type(),
            sequence_number = event.metadata().sequence_number,
            payload = %event.to_payload(),
            "session event"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use quizline_bank::{QuestionBank, default_bank};
    use quizline_session::PerformanceTier;
    use quizline_core::rng::random_uuid;
    use quizline_test_support::{MockRng, fixed_clock};

    use super::*;

    fn run_with(bank: QuestionBank, input: &str) -> (QuizSession, String) {
        let session = QuizSession::new(random_uuid(&mut MockRng), bank, Arc::new(fixed_clock()));
        let mut adapter = TerminalAdapter::new(
            session,
            Box::new(MockRng),
            Cursor::new(input.to_owned()),
            Vec::new(),
        );
        adapter.run().unwrap();
        let TerminalAdapter {
            session, output, ..
        } = adapter;
        (session, String::from_utf8(output).unwrap())
    }

    // Default bank answer key, as typed by the user.
    const PERFECT_RUN: &str = "\n4\n\n1\n\n1\n\n2\n\n3\n\n";

    #[test]
    fn test_key_parse() {
        assert_eq!(Key::parse("\n"), Key::Next);
        assert_eq!(Key::parse("N\n"), Key::Next);
        assert_eq!(Key::parse(" r "), Key::Restart);
        assert_eq!(Key::parse("q"), Key::Quit);
        assert_eq!(Key::parse("3"), Key::Choice(2));
        assert_eq!(Key::parse("0"), Key::Unknown);
        assert_eq!(Key::parse("-1"), Key::Unknown);
        assert_eq!(Key::parse("maybe"), Key::Unknown);
    }

    #[test]
    fn test_perfect_run_shows_results() {
        let (session, output) = run_with(default_bank(), &format!("{PERFECT_RUN}q\n"));

        assert_eq!(session.phase(), SessionPhase::Completed);
        assert_eq!(session.score(), 50);
        assert_eq!(output.matches("Correct! +10 points").count(), 5);
        assert!(output.contains("Perfect Score!"));
        assert!(output.contains("🎉"));
        assert!(output.contains("Score: 50 / 50"));
        assert!(output.contains("Accuracy: 100%"));
        assert!(output.contains(PerformanceTier::Perfect.messages()[0]));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_wrong_answer_highlights_correct_option() {
        let (session, output) = run_with(default_bank(), "\n1\nq\n");

        assert_eq!(session.score(), 0);
        assert!(output.contains("Incorrect!"));
        assert!(output.contains("1) 13/90  <- your answer"));
        assert!(output.contains("4) 77/90  <- correct"));
    }

    #[test]
    fn test_second_answer_is_rejected() {
        let (session, output) = run_with(default_bank(), "\n4\n1\nq\n");

        assert_eq!(session.score(), 10);
        assert_eq!(session.records().len(), 1);
        assert!(output.contains("This question is already answered."));
    }

    #[test]
    fn test_advance_before_answer_is_rejected() {
        let (session, output) = run_with(default_bank(), "\n\nq\n");

        assert_eq!(session.current_index(), 0);
        assert!(output.contains("Answer the question before moving on."));
    }

    #[test]
    fn test_out_of_range_choice_is_rejected() {
        let (session, output) = run_with(default_bank(), "\n9\nq\n");

        assert!(!session.is_answered());
        assert!(output.contains("Pick an option between 1 and 4."));
    }

    #[test]
    fn test_last_question_offers_results() {
        let (_, output) = run_with(default_bank(), "\n4\n\n1\n\n1\n\n2\n\n3\nq\n");

        assert_eq!(output.matches("Press Enter for Next Question.").count(), 4);
        assert_eq!(output.matches("Press Enter for View Results.").count(), 1);
    }

    #[test]
    fn test_restart_after_results_starts_over() {
        let (session, output) = run_with(default_bank(), &format!("{PERFECT_RUN}r\nq\n"));

        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert_eq!(session.score(), 0);
        assert!(session.records().is_empty());
        assert_eq!(output.matches("Question 1 of 5").count(), 2);
    }

    #[test]
    fn test_unknown_input_prints_hint() {
        let (session, output) = run_with(default_bank(), "hello\n");

        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert!(output.contains("  Press Enter to start, q to quit."));
    }

    #[test]
    fn test_end_of_input_leaves_cleanly() {
        let (session, output) = run_with(default_bank(), "\n2\n");

        assert_eq!(session.records().len(), 1);
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_empty_bank_cannot_start() {
        let (session, output) = run_with(QuestionBank::new(), "\nq\n");

        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert!(output.contains("0 questions"));
        assert!(output.contains("cannot start a quiz with an empty question bank"));
    }
}
