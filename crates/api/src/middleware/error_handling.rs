//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the
//! CheckITS API. It maps domain-specific errors to appropriate HTTP
//! status codes and JSON error responses, ensuring a consistent error
//! handling experience across the entire API.
//!
//! The implementation is based on Axum's error handling mechanisms and
//! integrates with CheckITS's custom error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use checkits_core::errors::CheckItsError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific [`CheckItsError`] instances and
/// implements `IntoResponse` to convert them into HTTP responses with
/// appropriate status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub CheckItsError);

/// Converts application errors to HTTP responses.
///
/// This implementation maps each error type to the appropriate HTTP
/// status code and formats the error message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            CheckItsError::NotFound(_) => StatusCode::NOT_FOUND,
            CheckItsError::Validation(_) => StatusCode::BAD_REQUEST,
            CheckItsError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CheckItsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from CheckItsError to AppError.
///
/// This implementation allows using `?` operator with functions that
/// return `Result<T, CheckItsError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<CheckItsError> for AppError {
    fn from(err: CheckItsError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError.
///
/// This implementation allows using `?` operator with functions that
/// return `Result<T, eyre::Report>` in handler functions that return
/// `Result<T, AppError>`. It wraps the eyre error in a
/// `CheckItsError::Database` variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(CheckItsError::Database(err))
    }
}

/// Maps a CheckItsError to an HTTP response.
pub fn map_error(err: CheckItsError) -> Response {
    AppError(err).into_response()
}
