//! API error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use summerlin_leads::LeadError;
use summerlin_listings::ListingError;
use summerlin_mortgage::MortgageError;

/// Error returned by a handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed or failed validation
    #[error("{0}")]
    BadRequest(String),

    /// The requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Something failed on our side
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

impl From<MortgageError> for ApiError {
    fn from(e: MortgageError) -> Self {
        if e.is_input_error() {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

impl From<ListingError> for ApiError {
    fn from(e: ListingError) -> Self {
        match e {
            ListingError::NotFound(_) => ApiError::NotFound(e.to_string()),
            ListingError::InvalidFilter(_) | ListingError::Input(_) => {
                ApiError::BadRequest(e.to_string())
            }
        }
    }
}

impl From<LeadError> for ApiError {
    fn from(e: LeadError) -> Self {
        if e.is_validation() {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}
