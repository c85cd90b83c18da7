//! Error types for lead intake.

use thiserror::Error;

/// Error type for lead operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    /// A form field failed validation.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Field name as submitted
        field: String,
        /// What is wrong with it
        reason: String,
    },

    /// The sink could not accept the lead.
    #[error("lead sink error: {0}")]
    Sink(String),
}

impl LeadError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a sink error.
    #[must_use]
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink(message.into())
    }

    /// Returns true if the submitter can fix this by correcting the form.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type for lead operations.
pub type LeadResult<T> = Result<T, LeadError>;
