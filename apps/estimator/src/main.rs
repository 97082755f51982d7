//! # Spray Texture Estimator Entry Point
//!
//! The actual setup is in lib.rs so the session can be tested without a
//! terminal.

use std::process::ExitCode;

use spray_estimator::error::CliError;

fn main() -> ExitCode {
    match spray_estimator::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::InputClosed) => {
            eprintln!("\nInput closed; no estimate produced.");
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!(error = %err, "Estimator failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
