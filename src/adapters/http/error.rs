//! Shared HTTP error body and status mapping.

use http::StatusCode;
use serde::Serialize;

use crate::domain::foundation::ErrorCode;

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }
}

/// Maps an engine error code to its HTTP status.
///
/// Conflicts and invalid transitions are business outcomes, reported
/// as 409 so clients can distinguish them from malformed input.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorCode::SlotNotFound
        | ErrorCode::RequestNotFound
        | ErrorCode::SessionNotFound
        | ErrorCode::EvaluationNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidTransition | ErrorCode::SchedulingConflict => StatusCode::CONFLICT,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
