//! DecideMatchingRequestHandler - approves or rejects a pending request.
//!
//! The decision is a check-then-act sequence: read the request, verify
//! it is still pending, write the terminal status. It is serialized
//! per request id so concurrent approve+reject cannot both win; the
//! loser observes `AlreadyDecided`.

use std::sync::Arc;

use crate::application::locks::KeyedLocks;
use crate::domain::foundation::RequestId;
use crate::domain::matching::{MatchingError, MatchingRequest};
use crate::ports::MatchingRequestRepository;

/// Terminal decision for a matching request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchDecision {
    Approve,
    Reject,
}

/// Command to decide a request.
#[derive(Debug, Clone)]
pub struct DecideMatchingRequestCommand {
    pub request_id: RequestId,
    pub decision: MatchDecision,
}

/// Handler for match decisions.
pub struct DecideMatchingRequestHandler {
    repository: Arc<dyn MatchingRequestRepository>,
    locks: Arc<KeyedLocks>,
}

impl DecideMatchingRequestHandler {
    pub fn new(repository: Arc<dyn MatchingRequestRepository>, locks: Arc<KeyedLocks>) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(
        &self,
        cmd: DecideMatchingRequestCommand,
    ) -> Result<MatchingRequest, MatchingError> {
        let key = format!("request:{}", cmd.request_id);
        let _guard = self.locks.acquire(&key).await;

        let mut request = self
            .repository
            .find_by_id(&cmd.request_id)
            .await?
            .ok_or(MatchingError::NotFound(cmd.request_id))?;

        match cmd.decision {
            MatchDecision::Approve => request.approve()?,
            MatchDecision::Reject => request.reject()?,
        }

        self.repository.update(&request).await?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryMatchingRequestRepository;
    use crate::domain::foundation::{MatchingStatus, StudentId, Timestamp, TutorId};

    async fn seeded() -> (Arc<InMemoryMatchingRequestRepository>, RequestId) {
        let repo = Arc::new(InMemoryMatchingRequestRepository::new());
        let request = MatchingRequest::new(
            RequestId::new(),
            StudentId::new("student-1").unwrap(),
            TutorId::new("tutor-1").unwrap(),
            "chemistry".to_string(),
            Vec::new(),
            Timestamp::parse_rfc3339("2024-03-01T09:00:00Z").unwrap(),
        );
        repo.save(&request).await.unwrap();
        (repo, *request.id())
    }

    fn handler(repo: Arc<InMemoryMatchingRequestRepository>) -> DecideMatchingRequestHandler {
        DecideMatchingRequestHandler::new(repo, Arc::new(KeyedLocks::new()))
    }

    #[tokio::test]
    async fn approve_accepts_pending_request() {
        let (repo, request_id) = seeded().await;
        let handler = handler(repo.clone());

        let request = handler
            .handle(DecideMatchingRequestCommand {
                request_id,
                decision: MatchDecision::Approve,
            })
            .await
            .unwrap();

        assert_eq!(request.status(), MatchingStatus::Accepted);
        let stored = repo.find_by_id(&request_id).await.unwrap().unwrap();
        assert_eq!(stored.status(), MatchingStatus::Accepted);
    }

    #[tokio::test]
    async fn second_decision_fails_and_first_stands() {
        let (repo, request_id) = seeded().await;
        let handler = handler(repo.clone());

        handler
            .handle(DecideMatchingRequestCommand {
                request_id,
                decision: MatchDecision::Approve,
            })
            .await
            .unwrap();

        let result = handler
            .handle(DecideMatchingRequestCommand {
                request_id,
                decision: MatchDecision::Reject,
            })
            .await;

        assert!(matches!(result, Err(MatchingError::AlreadyDecided { .. })));
        let stored = repo.find_by_id(&request_id).await.unwrap().unwrap();
        assert_eq!(stored.status(), MatchingStatus::Accepted);
    }

    #[tokio::test]
    async fn unknown_request_fails_with_not_found() {
        let (repo, _) = seeded().await;
        let handler = handler(repo);

        let result = handler
            .handle(DecideMatchingRequestCommand {
                request_id: RequestId::new(),
                decision: MatchDecision::Approve,
            })
            .await;

        assert!(matches!(result, Err(MatchingError::NotFound(_))));
    }

    #[tokio::test]
    async fn concurrent_opposite_decisions_yield_one_winner() {
        let (repo, request_id) = seeded().await;
        let handler = Arc::new(handler(repo.clone()));

        let approve = {
            let handler = handler.clone();
            tokio::spawn(async move {
                handler
                    .handle(DecideMatchingRequestCommand {
                        request_id,
                        decision: MatchDecision::Approve,
                    })
                    .await
            })
        };
        let reject = {
            let handler = handler.clone();
            tokio::spawn(async move {
                handler
                    .handle(DecideMatchingRequestCommand {
                        request_id,
                        decision: MatchDecision::Reject,
                    })
                    .await
            })
        };

        let outcomes = [approve.await.unwrap(), reject.await.unwrap()];
        let wins = outcomes.iter().filter(|r| r.is_ok()).count();
        assert_eq!(wins, 1);

        let stored = repo.find_by_id(&request_id).await.unwrap().unwrap();
        assert!(stored.status().is_decided());
    }
}
