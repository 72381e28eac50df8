//! Runtime configuration read from the environment.

use std::path::PathBuf;

use crate::error::AppError;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Settings for one run of the quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// YAML or JSON question file; the built-in bank when unset.
    pub bank_path: Option<PathBuf>,
    /// Shuffle the bank before the session starts.
    pub shuffle: bool,
    /// Fixed RNG seed; seeded from the OS when unset.
    pub seed: Option<u64>,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bank_path = lookup("QUIZ_BANK_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let shuffle = match lookup("QUIZ_SHUFFLE") {
            None => false,
            Some(value) => parse_flag(&value).ok_or_else(|| {
                AppError::Config(format!("QUIZ_SHUFFLE must be true or false, got {value:?}"))
            })?,
        };

        let seed = lookup("QUIZ_SEED")
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| AppError::Config(format!("QUIZ_SEED must be a valid u64: {e}")))
            })
            .transpose()?;

        let log_format = match lookup("QUIZ_LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "QUIZ_LOG_FORMAT must be json or pretty, got {other:?}"
                )));
            }
        };

        Ok(Self {
            bank_path,
            shuffle,
            seed,
            log_format,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.shuffle);
    }

    #[test]
    fn test_all_variables_are_read() {
        let config = config_from(&[
            ("QUIZ_BANK_PATH", "questions.yaml"),
            ("QUIZ_SHUFFLE", "TRUE"),
            ("QUIZ_SEED", "42"),
            ("QUIZ_LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.bank_path, Some(PathBuf::from("questions.yaml")));
        assert!(config.shuffle);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_bank_path_falls_back_to_built_in_bank() {
        let config = config_from(&[("QUIZ_BANK_PATH", "  ")]).unwrap();

        assert_eq!(config.bank_path, None);
    }

    #[test]
    fn test_invalid_seed_is_a_config_error() {
        match config_from(&[("QUIZ_SEED", "-3")]) {
            Err(AppError::Config(msg)) => assert!(msg.contains("QUIZ_SEED")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_shuffle_flag_is_a_config_error() {
        match config_from(&[("QUIZ_SHUFFLE", "sometimes")]) {
            Err(AppError::Config(msg)) => assert!(msg.contains("QUIZ_SHUFFLE")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_log_format_is_a_config_error() {
        match config_from(&[("QUIZ_LOG_FORMAT", "xml")]) {
            Err(AppError::Config(msg)) => assert!(msg.contains("QUIZ_LOG_FORMAT")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}
