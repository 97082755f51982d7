//! # Application Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Estimator                          │
//! │                                                                         │
//! │  ValidationError (spray-core)                                          │
//! │       └──► printed inline by the Prompter, question asked again        │
//! │                                                                         │
//! │  SaveError                                                             │
//! │       └──► "Error saving estimate: ..." printed, session continues     │
//! │                                                                         │
//! │  CliError                                                              │
//! │       └──► session aborted, main() reports it and exits non-zero       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use spray_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the terminal or writing to it failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Standard input reached end-of-file while a question was pending.
    #[error("Input closed before the estimate was complete")]
    InputClosed,

    /// Environment configuration could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Parsed answers did not form a valid estimate.
    ///
    /// Guard only: the prompts apply the same rules as `EstimateInput::new`,
    /// so a session never produces this today.
    #[error("Invalid estimate: {0}")]
    Core(#[from] CoreError),
}

/// A saved estimate could not be written.
///
/// Never fatal: the session reports it and carries on.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
