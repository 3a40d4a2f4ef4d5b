//! Custom error types for divvy
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::ExpenditureType;

/// The main error type for divvy operations
#[derive(Error, Debug)]
pub enum DivvyError {
    /// The budget document is malformed or incomplete
    #[error("Budget load error: {0}")]
    Load(String),

    /// The operator entered something that is not a decimal number
    ///
    /// Recovered locally by re-prompting; this variant never escapes the
    /// prompt loop.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input ended before a valid answer was read for a prompt
    #[error("Input ended before a value was provided for '{label}'")]
    InputExhausted { label: String },

    /// A sharable group's total planned budget is zero while a
    /// remaining-funds split was requested
    #[error("Sharable group '{expenditure_type}' has a zero total planned budget; cannot split remaining funds")]
    DivisionByZero { expenditure_type: ExpenditureType },

    /// File or console I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl DivvyError {
    /// Create a load error with a message
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load(message.into())
    }

    /// Create an invalid-input error for a raw answer
    pub fn invalid_input(answer: impl Into<String>) -> Self {
        Self::InvalidInput(answer.into())
    }

    /// Create an input-exhausted error for a prompt label
    pub fn input_exhausted(label: impl Into<String>) -> Self {
        Self::InputExhausted {
            label: label.into(),
        }
    }

    /// Check if this is a load error
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    /// Check if this is an invalid-input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<std::io::Error> for DivvyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for divvy operations
pub type DivvyResult<T> = Result<T, DivvyError>;
