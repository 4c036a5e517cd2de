//! Availability-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SlotId, ValidationError};

/// Errors surfaced by availability operations.
#[derive(Debug, Clone)]
pub enum AvailabilityError {
    /// Slot was not found.
    NotFound(SlotId),
    /// Input failed validation (malformed interval, empty tutor id).
    InvalidInput(ValidationError),
    /// Storage failure.
    Infrastructure(String),
}

impl AvailabilityError {
    pub fn not_found(id: SlotId) -> Self {
        AvailabilityError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AvailabilityError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AvailabilityError::NotFound(_) => ErrorCode::SlotNotFound,
            AvailabilityError::InvalidInput(_) => ErrorCode::ValidationFailed,
            AvailabilityError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AvailabilityError::NotFound(id) => format!("Availability slot not found: {}", id),
            AvailabilityError::InvalidInput(err) => err.to_string(),
            AvailabilityError::Infrastructure(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for AvailabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AvailabilityError {}

impl From<ValidationError> for AvailabilityError {
    fn from(err: ValidationError) -> Self {
        AvailabilityError::InvalidInput(err)
    }
}

// Repository faults reach handlers as `DomainError`; by the time one
// escapes the storage layer it is an infrastructure problem (absence is
// reported as `Ok(None)`, not an error).
impl From<DomainError> for AvailabilityError {
    fn from(err: DomainError) -> Self {
        AvailabilityError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_slot_code() {
        let err = AvailabilityError::not_found(SlotId::new());
        assert_eq!(err.code(), ErrorCode::SlotNotFound);
    }

    #[test]
    fn invalid_input_keeps_validation_message() {
        let err: AvailabilityError =
            ValidationError::invalid_format("time_range", "start time must be before end time")
                .into();
        assert!(err.message().contains("time_range"));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
