//! # Error Types
//!
//! Domain-specific error types for spray-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  spray-core errors (this file)                                         │
//! │  ├── CoreError        - Estimate construction failures                 │
//! │  └── ValidationError  - A typed answer was not acceptable              │
//! │                                                                         │
//! │  spray-estimator errors (app crate)                                    │
//! │  ├── ConfigError      - Bad environment configuration                  │
//! │  ├── SaveError        - Estimate file could not be written             │
//! │  └── CliError         - Terminal I/O failed or input closed            │
//! │                                                                         │
//! │  ValidationError → shown inline, prompt repeats (never fatal)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Display` text of every `ValidationError` is exactly the line the
//! operator sees before the prompt is repeated.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while assembling an estimate.
///
/// `EstimateInput::new` re-checks the parsed numbers and reports through here.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced by the parsers in [`crate::validation`]; the prompter prints the
/// message and asks again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Text could not be read as a finite number.
    #[error("Please enter a valid number.")]
    NotANumber { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be greater than zero.")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative.")]
    MustNotBeNegative { field: String },

    /// Menu selection outside the numbered choices.
    ///
    /// ## User Workflow
    /// ```text
    /// Select a texture type (1-7): 8
    ///      │
    ///      ▼
    /// InvalidChoice { field: "texture type", min: 1, max: 7 }
    ///      │
    ///      ▼
    /// "Invalid choice. Please select a number between 1 and 7."
    ///      │
    ///      ▼
    /// Select a texture type (1-7): _
    /// ```
    #[error("Invalid choice. Please select a number between {min} and {max}.")]
    InvalidChoice { field: String, min: u8, max: u8 },
}

impl ValidationError {
    /// Name of the field that failed validation (for logging).
    pub fn field(&self) -> &str {
        match self {
            ValidationError::NotANumber { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::MustNotBeNegative { field }
            | ValidationError::InvalidChoice { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
