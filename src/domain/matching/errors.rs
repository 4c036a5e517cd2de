//! Matching-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, MatchingStatus, RequestId};

/// Errors surfaced by matching operations.
#[derive(Debug, Clone)]
pub enum MatchingError {
    /// Request was not found.
    NotFound(RequestId),
    /// Request was already approved or rejected.
    AlreadyDecided {
        id: RequestId,
        status: MatchingStatus,
    },
    /// Storage failure.
    Infrastructure(String),
}

impl MatchingError {
    pub fn not_found(id: RequestId) -> Self {
        MatchingError::NotFound(id)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            MatchingError::NotFound(_) => ErrorCode::RequestNotFound,
            MatchingError::AlreadyDecided { .. } => ErrorCode::InvalidTransition,
            MatchingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            MatchingError::NotFound(id) => format!("Matching request not found: {}", id),
            MatchingError::AlreadyDecided { id, status } => {
                format!("Matching request {} was already decided: {}", id, status)
            }
            MatchingError::Infrastructure(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for MatchingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MatchingError {}

impl From<DomainError> for MatchingError {
    fn from(err: DomainError) -> Self {
        MatchingError::Infrastructure(err.to_string())
    }
}
