//! Error types for listing lookups.

use summerlin_core::SummerlinError;
use thiserror::Error;

/// Error type for listing operations.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Requested listing not found
    #[error("listing not found: {0}")]
    NotFound(String),

    /// Filter bounds are inconsistent
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// A listing value could not be parsed
    #[error(transparent)]
    Input(#[from] SummerlinError),
}

/// Result type for listing operations.
pub type ListingResult<T> = Result<T, ListingError>;
