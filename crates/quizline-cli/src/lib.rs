//! Quizline — terminal front end.
//!
//! Reads one command per line, forwards it to a [`QuizSession`] and redraws
//! the screen from the session's state. The binary wires it to stdin and
//! stdout.
//!
//! [`QuizSession`]: quizline_session::QuizSession

pub mod config;
pub mod error;
pub mod terminal;

pub use config::{Config, LogFormat};
pub use error::AppError;
pub use terminal::{Key, TerminalAdapter};
