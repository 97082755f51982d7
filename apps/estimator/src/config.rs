//! Estimator configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. There is no config file and no command-line flag.
//!
//! | Variable                 | Default        | Meaning                        |
//! |--------------------------|----------------|--------------------------------|
//! | `ESTIMATOR_OUTPUT_DIR`   | (working dir)  | Where saved estimates go       |
//! | `ESTIMATOR_CLEAR_SCREEN` | `true`         | Clear the terminal between pages |
//!
//! Log verbosity is controlled separately by `RUST_LOG`.

use std::env;
use std::path::PathBuf;

/// Estimator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Directory saved estimates are written to.
    ///
    /// Empty means the current working directory, so the saved path reads
    /// as a bare `estimate_YYYYMMDD_HHMMSS.txt`.
    pub output_dir: PathBuf,

    /// Clear the terminal at start-up and before showing the estimate.
    pub clear_screen: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig {
            output_dir: PathBuf::new(),
            clear_screen: true,
        }
    }
}

impl EstimatorConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = EstimatorConfig::default();

        let output_dir = lookup("ESTIMATOR_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let clear_screen = match lookup("ESTIMATOR_CLEAR_SCREEN") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| ConfigError::InvalidValue("ESTIMATOR_CLEAR_SCREEN".to_string()))?,
            None => defaults.clear_screen,
        };

        Ok(EstimatorConfig {
            output_dir,
            clear_screen,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
