//! Matching request listings.

use std::sync::Arc;

use crate::domain::foundation::{StudentId, TutorId};
use crate::domain::matching::{MatchingError, MatchingRequest};
use crate::ports::MatchingRequestRepository;

/// Query for a student's requests.
#[derive(Debug, Clone)]
pub struct ListStudentRequestsQuery {
    pub student_id: StudentId,
}

/// Handler for the student-side listing.
pub struct ListStudentRequestsHandler {
    repository: Arc<dyn MatchingRequestRepository>,
}

impl ListStudentRequestsHandler {
    pub fn new(repository: Arc<dyn MatchingRequestRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListStudentRequestsQuery,
    ) -> Result<Vec<MatchingRequest>, MatchingError> {
        Ok(self.repository.find_by_student(&query.student_id).await?)
    }
}

/// Query for a tutor's requests.
#[derive(Debug, Clone)]
pub struct ListTutorRequestsQuery {
    pub tutor_id: TutorId,
}

/// Handler for the tutor-side listing.
pub struct ListTutorRequestsHandler {
    repository: Arc<dyn MatchingRequestRepository>,
}

impl ListTutorRequestsHandler {
    pub fn new(repository: Arc<dyn MatchingRequestRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListTutorRequestsQuery,
    ) -> Result<Vec<MatchingRequest>, MatchingError> {
        Ok(self.repository.find_by_tutor(&query.tutor_id).await?)
    }
}
