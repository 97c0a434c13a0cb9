//! Response types for the Rateio Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, FieldError};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Per-field problems, for record validation failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            field_errors: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            EngineError::EmptyInput
            | EngineError::InvalidFormat { .. }
            | EngineError::NonPositive { .. }
            | EngineError::NegativeAmount { .. }
            | EngineError::AmountOutOfRange { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_AMOUNT",
                    message,
                    "The settlement amount must be a positive number such as 5.632.494,99",
                ),
            ),
            EngineError::InvalidIdentifier { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_CPF", message),
            ),
            EngineError::InvalidDate { .. }
            | EngineError::RangeInverted { .. }
            | EngineError::OutsideWindow { .. }
            | EngineError::OutOfBounds { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_PERIOD", message),
            ),
            EngineError::NoWeights | EngineError::NonPositiveWeightSum => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "NOTHING_TO_APPORTION",
                    message,
                    "At least one claimant with months worked is required",
                ),
            ),
            EngineError::InvalidRecord { errors } => (
                StatusCode::BAD_REQUEST,
                ApiError {
                    field_errors: errors,
                    ..ApiError::validation_error(message)
                },
            ),
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
        };

        ApiErrorResponse { status, error }
    }
}
