//! Unified error types for the Pension Disbursement API
//!
//! This module defines error types for each layer:
//! - `LookupError`: upstream pensioner detail client errors
//! - `AppError`: application layer errors (mapped to HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Upstream pensioner detail client errors
///
/// These never cross the lookup port boundary; the adapter normalizes every
/// variant to absence after logging it.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    /// The request arrived without a readable JSON body.
    #[error("Missing request body")]
    MissingInput,

    /// No pensioner record could be fetched. Genuine absence and upstream
    /// failure are collapsed into this one outcome.
    #[error("Unable to fetch Pensioner detail.")]
    PensionerNotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingInput => StatusCode::BAD_REQUEST.into_response(),
            AppError::PensionerNotFound => {
                (StatusCode::BAD_REQUEST, "Unable to fetch Pensioner detail.").into_response()
            }
        }
    }
}
