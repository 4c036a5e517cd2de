//! Matching request repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RequestId, StudentId, TutorId};
use crate::domain::matching::MatchingRequest;

/// Storage capability for matching requests.
#[async_trait]
pub trait MatchingRequestRepository: Send + Sync {
    /// Persists a new request.
    async fn save(&self, request: &MatchingRequest) -> Result<(), DomainError>;

    /// Replaces an existing request.
    ///
    /// # Errors
    ///
    /// - `RequestNotFound` if the request doesn't exist
    async fn update(&self, request: &MatchingRequest) -> Result<(), DomainError>;

    /// Finds a request by its ID. Returns `None` when absent.
    async fn find_by_id(&self, id: &RequestId) -> Result<Option<MatchingRequest>, DomainError>;

    /// All requests raised by a student, in insertion order.
    async fn find_by_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<MatchingRequest>, DomainError>;

    /// All requests addressed to a tutor, in insertion order.
    async fn find_by_tutor(&self, tutor_id: &TutorId)
        -> Result<Vec<MatchingRequest>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn MatchingRequestRepository) {}
    }
}
