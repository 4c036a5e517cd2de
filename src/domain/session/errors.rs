//! Session-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, SessionStatus, ValidationError};

/// Errors surfaced by session lifecycle operations.
#[derive(Debug, Clone)]
pub enum SessionError {
    /// Session was not found.
    NotFound(SessionId),
    /// Input failed validation (malformed interval, duration mismatch).
    InvalidInput(ValidationError),
    /// Mutation attempted on a canceled or completed session.
    Terminal { id: SessionId, status: SessionStatus },
    /// Requested window overlaps an active session for the tutor or
    /// the student.
    Conflict { conflicting_session: SessionId },
    /// Storage failure.
    Infrastructure(String),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }

    pub fn conflict(conflicting_session: SessionId) -> Self {
        SessionError::Conflict {
            conflicting_session,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::InvalidInput(_) => ErrorCode::ValidationFailed,
            SessionError::Terminal { .. } => ErrorCode::InvalidTransition,
            SessionError::Conflict { .. } => ErrorCode::SchedulingConflict,
            SessionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(id) => format!("Session not found: {}", id),
            SessionError::InvalidInput(err) => err.to_string(),
            SessionError::Terminal { id, status } => {
                format!("Session {} is {} and cannot be modified", id, status)
            }
            SessionError::Conflict {
                conflicting_session,
            } => format!(
                "Requested time overlaps active session {}",
                conflicting_session
            ),
            SessionError::Infrastructure(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::InvalidInput(err)
    }
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        SessionError::Infrastructure(err.to_string())
    }
}
