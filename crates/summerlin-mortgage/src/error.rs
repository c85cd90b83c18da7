//! Error types for the amortization engine.

use summerlin_core::SummerlinError;
use thiserror::Error;

/// Error type for mortgage calculations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MortgageError {
    /// An input failed validation.
    #[error(transparent)]
    Input(#[from] SummerlinError),

    /// The schedule could not be produced.
    #[error("schedule generation failed: {0}")]
    ScheduleGeneration(String),
}

impl MortgageError {
    /// Returns true if the caller supplied bad input.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        match self {
            MortgageError::Input(e) => e.is_input_error(),
            MortgageError::ScheduleGeneration(_) => false,
        }
    }
}

/// Result type for mortgage calculations.
pub type MortgageResult<T> = Result<T, MortgageError>;
