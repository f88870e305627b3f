//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant carries its exact client-facing message in the `#[error]`
/// attribute and maps to a specific HTTP status code.
///
/// # Error Categories
///
/// - **Auth errors** (401): missing, malformed, or mismatched bearer credential
/// - **Validation errors** (400): client-supplied data violates a field constraint;
///   the message identifies the first violated rule
/// - **Not-found errors** (400, reused code): the referenced product id does not exist
/// - **Internal errors** (500): unexpected fault while touching the store; generic
///   message, no detail leaked
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Authorization header is absent or the supplied token does not match.
    #[error("Unauthorized")]
    Unauthorized,

    /// Authorization header is present but not of the shape `Bearer <token>`.
    #[error("Unauthorized Authentication header format is Bearer <token>")]
    MalformedAuthHeader,

    /// A required field is missing from the request body.
    ///
    /// Create requires all four product fields; update requires at least one.
    #[error("Invalid data")]
    InvalidData,

    #[error("Name or type must not be empty")]
    EmptyNameOrType,

    #[error("Invalid data type for price or amount")]
    PriceOrAmountNotNumeric,

    #[error("Price or amount must be positive number")]
    PriceOrAmountNegative,

    /// The id path parameter is not numeric text.
    #[error("Invalid id")]
    InvalidId,

    /// No product in the collection has the requested id.
    #[error("Product not found")]
    ProductNotFound,

    #[error("Name must not be empty")]
    EmptyName,

    #[error("Type must not be empty")]
    EmptyType,

    #[error("Invalid data type for price")]
    PriceNotNumeric,

    #[error("Price must be positive number")]
    PriceNegative,

    #[error("Invalid data type for amount")]
    AmountNotNumeric,

    #[error("Amount must be positive number")]
    AmountNegative,

    /// Update accepts only whole-number amounts (create does not carry this
    /// restriction).
    #[error("Amount must be integer number")]
    AmountNotInteger,

    /// Unexpected fault while reading or mutating the store.
    #[error("Internal server error")]
    Internal,
}

/// A panic while a store lock was held poisons the lock; surface that as the
/// generic internal error instead of propagating the panic detail.
impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        AppError::Internal
    }
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "message": "Human-readable error message"
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Unauthorized | AppError::MalformedAuthHeader => StatusCode::UNAUTHORIZED,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };

        // Build JSON response body
        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}
