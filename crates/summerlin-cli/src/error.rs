//! CLI error types.

use thiserror::Error;

use summerlin_core::SummerlinError;
use summerlin_listings::ListingError;
use summerlin_mortgage::MortgageError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid argument value.
    #[error("Invalid {name}: {reason}")]
    InvalidArgument {
        /// Flag name
        name: String,
        /// What is wrong
        reason: String,
    },

    /// Calculation error.
    #[error("Calculation error: {0}")]
    Calculation(#[from] MortgageError),

    /// Listing search error.
    #[error("Search error: {0}")]
    Search(#[from] ListingError),

    /// Domain value error.
    #[error(transparent)]
    Domain(#[from] SummerlinError),
}

impl CliError {
    /// Creates an invalid-argument error.
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
