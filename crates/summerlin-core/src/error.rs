//! Error types for the Summerlin services.
//!
//! This module defines the error type shared by the library crates,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Summerlin operations.
pub type SummerlinResult<T> = Result<T, SummerlinError>;

/// The main error type for Summerlin operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummerlinError {
    /// A currency amount is out of range (negative, non-finite, too large).
    #[error("Invalid amount for {field}: {value} - {reason}")]
    InvalidAmount {
        /// Name of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid interest rate.
    #[error("Invalid interest rate: {value}% - {reason}")]
    InvalidRate {
        /// The rejected annual rate, in percent.
        value: f64,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid loan term.
    #[error("Invalid loan term: {years} years - {reason}")]
    InvalidTerm {
        /// The rejected term in years.
        years: u32,
        /// Reason for invalidity.
        reason: String,
    },

    /// Any other caller-supplied value that cannot be used.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the problem.
        reason: String,
    },

    /// Mathematical error (non-finite intermediate, overflow).
    #[error("Mathematical error: {reason}")]
    MathError {
        /// Description of the error.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    ConfigError {
        /// Description of the configuration error.
        reason: String,
    },
}

impl SummerlinError {
    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            field: field.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid rate error.
    #[must_use]
    pub fn invalid_rate(value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidRate {
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid term error.
    #[must_use]
    pub fn invalid_term(years: u32, reason: impl Into<String>) -> Self {
        Self::InvalidTerm {
            years,
            reason: reason.into(),
        }
    }

    /// Creates a generic invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a math error.
    #[must_use]
    pub fn math_error(reason: impl Into<String>) -> Self {
        Self::MathError {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config_error(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }

    /// Returns true if the error was caused by caller input rather than the engine.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount { .. }
                | Self::InvalidRate { .. }
                | Self::InvalidTerm { .. }
                | Self::InvalidInput { .. }
        )
    }
}
