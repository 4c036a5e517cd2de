//! In-memory implementation of MatchingRequestRepository.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, RequestId, StudentId, TutorId};
use crate::domain::matching::MatchingRequest;
use crate::ports::MatchingRequestRepository;

/// Vec-backed request store; insertion order is the listing order.
#[derive(Default)]
pub struct InMemoryMatchingRequestRepository {
    requests: RwLock<Vec<MatchingRequest>>,
}

impl InMemoryMatchingRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MatchingRequestRepository for InMemoryMatchingRequestRepository {
    async fn save(&self, request: &MatchingRequest) -> Result<(), DomainError> {
        let mut requests = self.requests.write().expect("request store poisoned");
        if requests.iter().any(|r| r.id() == request.id()) {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Duplicate request id: {}", request.id()),
            ));
        }
        requests.push(request.clone());
        Ok(())
    }

    async fn update(&self, request: &MatchingRequest) -> Result<(), DomainError> {
        let mut requests = self.requests.write().expect("request store poisoned");
        match requests.iter().position(|r| r.id() == request.id()) {
            Some(pos) => {
                requests[pos] = request.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::RequestNotFound,
                format!("Matching request not found: {}", request.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &RequestId) -> Result<Option<MatchingRequest>, DomainError> {
        let requests = self.requests.read().expect("request store poisoned");
        Ok(requests.iter().find(|r| r.id() == id).cloned())
    }

    async fn find_by_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<MatchingRequest>, DomainError> {
        let requests = self.requests.read().expect("request store poisoned");
        Ok(requests
            .iter()
            .filter(|r| r.student_id() == student_id)
            .cloned()
            .collect())
    }

    async fn find_by_tutor(
        &self,
        tutor_id: &TutorId,
    ) -> Result<Vec<MatchingRequest>, DomainError> {
        let requests = self.requests.read().expect("request store poisoned");
        Ok(requests
            .iter()
            .filter(|r| r.tutor_id() == tutor_id)
            .cloned()
            .collect())
    }
}
