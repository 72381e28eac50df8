//! Quizline terminal quiz entry point.

use std::error::Error;
use std::io;
use std::sync::Arc;

use quizline_bank::{default_bank, load_bank};
use quizline_cli::{Config, LogFormat, TerminalAdapter};
use quizline_core::clock::SystemClock;
use quizline_core::rng::{DeterministicRng, SeededRng, random_uuid};
use quizline_session::QuizSession;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Read configuration from environment.
    let config = Config::from_env()?;

    // Initialize tracing subscriber. Logs go to stderr, the quiz owns stdout.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr);
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.init(),
    }

    tracing::info!(?config, "Starting Quizline");

    let mut rng: Box<dyn DeterministicRng> = match config.seed {
        Some(seed) => Box::new(SeededRng::from_seed(seed)),
        None => Box::new(SeededRng::from_entropy()),
    };

    // Build the question bank.
    let mut bank = match &config.bank_path {
        Some(path) => load_bank(path)?,
        None => default_bank(),
    };
    if config.shuffle {
        bank.shuffle(rng.as_mut());
    }

    let session = QuizSession::new(random_uuid(rng.as_mut()), bank, Arc::new(SystemClock));
    tracing::info!(session_id = %session.id(), questions = session.total_questions(), "Session ready");

    let mut adapter = TerminalAdapter::new(session, rng, io::stdin().lock(), io::stdout().lock());
    adapter.run()?;

    Ok(())
}
