//! Loading question banks from YAML or JSON files.
//!
//! A bank file holds a top-level `questions` list:
//!
//! ```yaml
//! questions:
//!   - prompt: "Were you a bird, you ___ in the sky."
//!     options: ["would fly", "shall fly"]
//!     correct_option_index: 0
//! ```

use std::path::Path;

use quizline_core::error::QuizError;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domain::bank::QuestionBank;
use crate::domain::question::Question;

/// On-disk shape of a bank file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BankDocument {
    #[serde(default)]
    questions: Vec<Question>,
}

/// Supported bank file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl BankFormat {
    /// Picks the format from a file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Load` for a missing or unsupported extension.
    pub fn from_path(path: &Path) -> Result<Self, QuizError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(QuizError::Load(format!(
                "unsupported bank file extension: {}",
                path.display()
            ))),
        }
    }
}

/// Parses a bank from source text.
///
/// Every question is validated while parsing; an empty `questions` list is
/// accepted here and rejected later when a session is started.
///
/// # Errors
///
/// Returns `QuizError::Load` if the text is malformed or any question is
/// invalid.
pub fn parse_bank(source: &str, format: BankFormat) -> Result<QuestionBank, QuizError> {
    let document: BankDocument = match format {
        BankFormat::Yaml => serde_yaml::from_str(source)
            .map_err(|e| QuizError::Load(format!("invalid YAML bank: {e}")))?,
        BankFormat::Json => serde_json::from_str(source)
            .map_err(|e| QuizError::Load(format!("invalid JSON bank: {e}")))?,
    };

    Ok(QuestionBank::from(document.questions))
}

/// Reads and parses the bank file at `path`.
///
/// # Errors
///
/// Returns `QuizError::Load` if the file cannot be read, has an unsupported
/// extension, or fails to parse.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_bank(path: &Path) -> Result<QuestionBank, QuizError> {
    let format = BankFormat::from_path(path)?;
    let source = std::fs::read_to_string(path)
        .map_err(|e| QuizError::Load(format!("cannot read {}: {e}", path.display())))?;

    let bank = parse_bank(&source, format)?;
    info!(questions = bank.size(), "question bank loaded");
    Ok(bank)
}
