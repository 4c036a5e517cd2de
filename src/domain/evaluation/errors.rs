//! Evaluation-specific error types.

use crate::domain::foundation::{
    DomainError, ErrorCode, EvaluationId, SessionId, ValidationError,
};

/// Errors surfaced by evaluation operations.
#[derive(Debug, Clone)]
pub enum EvaluationError {
    /// Evaluation was not found.
    NotFound(EvaluationId),
    /// The referenced session does not exist.
    SessionMissing(SessionId),
    /// Input failed validation (out-of-range score).
    InvalidInput(ValidationError),
    /// Storage failure.
    Infrastructure(String),
}

impl EvaluationError {
    pub fn not_found(id: EvaluationId) -> Self {
        EvaluationError::NotFound(id)
    }

    pub fn session_missing(id: SessionId) -> Self {
        EvaluationError::SessionMissing(id)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EvaluationError::NotFound(_) => ErrorCode::EvaluationNotFound,
            EvaluationError::SessionMissing(_) => ErrorCode::SessionNotFound,
            EvaluationError::InvalidInput(_) => ErrorCode::OutOfRange,
            EvaluationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            EvaluationError::NotFound(id) => format!("Evaluation not found: {}", id),
            EvaluationError::SessionMissing(id) => {
                format!("Cannot evaluate unknown session: {}", id)
            }
            EvaluationError::InvalidInput(err) => err.to_string(),
            EvaluationError::Infrastructure(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EvaluationError {}

impl From<ValidationError> for EvaluationError {
    fn from(err: ValidationError) -> Self {
        EvaluationError::InvalidInput(err)
    }
}

impl From<DomainError> for EvaluationError {
    fn from(err: DomainError) -> Self {
        EvaluationError::Infrastructure(err.to_string())
    }
}
