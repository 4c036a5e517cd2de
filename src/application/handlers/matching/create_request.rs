//! CreateMatchingRequestHandler - raises a pairing request.

use std::sync::Arc;

use crate::domain::foundation::{RequestId, StudentId, Timestamp, TutorId};
use crate::domain::matching::{MatchingError, MatchingRequest};
use crate::ports::{Clock, MatchingRequestRepository};

/// Command to raise a matching request.
///
/// Preference slots are advisory; creation never validates them
/// against the tutor's availability.
#[derive(Debug, Clone)]
pub struct CreateMatchingRequestCommand {
    pub student_id: StudentId,
    pub tutor_id: TutorId,
    pub subject: String,
    pub preferred_time_slots: Vec<Timestamp>,
}

/// Handler for request creation.
pub struct CreateMatchingRequestHandler {
    repository: Arc<dyn MatchingRequestRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateMatchingRequestHandler {
    pub fn new(repository: Arc<dyn MatchingRequestRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(
        &self,
        cmd: CreateMatchingRequestCommand,
    ) -> Result<MatchingRequest, MatchingError> {
        let request = MatchingRequest::new(
            RequestId::new(),
            cmd.student_id,
            cmd.tutor_id,
            cmd.subject,
            cmd.preferred_time_slots,
            self.clock.now(),
        );

        self.repository.save(&request).await?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryMatchingRequestRepository;
    use crate::domain::foundation::MatchingStatus;
    use crate::ports::FixedClock;

    #[tokio::test]
    async fn creates_pending_request_stamped_by_clock() {
        let repo = Arc::new(InMemoryMatchingRequestRepository::new());
        let instant = Timestamp::parse_rfc3339("2024-03-01T09:00:00Z").unwrap();
        let handler = CreateMatchingRequestHandler::new(repo.clone(), Arc::new(FixedClock(instant)));

        let request = handler
            .handle(CreateMatchingRequestCommand {
                student_id: StudentId::new("student-1").unwrap(),
                tutor_id: TutorId::new("tutor-1").unwrap(),
                subject: "geometry".to_string(),
                preferred_time_slots: vec![instant.plus_days(3)],
            })
            .await
            .unwrap();

        assert_eq!(request.status(), MatchingStatus::Pending);
        assert_eq!(request.created_date(), &instant);
        assert!(repo.find_by_id(request.id()).await.unwrap().is_some());
    }
}
