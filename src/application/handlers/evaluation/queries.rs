//! Evaluation read handlers - pure lookups, no side effects.

use std::sync::Arc;

use crate::domain::evaluation::{Evaluation, EvaluationError};
use crate::domain::foundation::{EvaluationId, SessionId, StudentId};
use crate::ports::EvaluationRepository;

/// Query for a single evaluation.
#[derive(Debug, Clone)]
pub struct GetEvaluationQuery {
    pub evaluation_id: EvaluationId,
}

/// Handler for single-evaluation lookup.
pub struct GetEvaluationHandler {
    repository: Arc<dyn EvaluationRepository>,
}

impl GetEvaluationHandler {
    pub fn new(repository: Arc<dyn EvaluationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetEvaluationQuery,
    ) -> Result<Option<Evaluation>, EvaluationError> {
        Ok(self.repository.find_by_id(&query.evaluation_id).await?)
    }
}

/// Query for a session's evaluations.
#[derive(Debug, Clone)]
pub struct ListSessionEvaluationsQuery {
    pub session_id: SessionId,
}

/// Handler for the session-side listing.
pub struct ListSessionEvaluationsHandler {
    repository: Arc<dyn EvaluationRepository>,
}

impl ListSessionEvaluationsHandler {
    pub fn new(repository: Arc<dyn EvaluationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListSessionEvaluationsQuery,
    ) -> Result<Vec<Evaluation>, EvaluationError> {
        Ok(self.repository.find_by_session(&query.session_id).await?)
    }
}

/// Query for a student's evaluations.
#[derive(Debug, Clone)]
pub struct ListStudentEvaluationsQuery {
    pub student_id: StudentId,
}

/// Handler for the student-side listing.
pub struct ListStudentEvaluationsHandler {
    repository: Arc<dyn EvaluationRepository>,
}

impl ListStudentEvaluationsHandler {
    pub fn new(repository: Arc<dyn EvaluationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListStudentEvaluationsQuery,
    ) -> Result<Vec<Evaluation>, EvaluationError> {
        Ok(self.repository.find_by_student(&query.student_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEvaluationRepository;
    use crate::domain::foundation::{Score, Timestamp};

    fn evaluation(session_id: SessionId, student: &str) -> Evaluation {
        Evaluation::new(
            EvaluationId::new(),
            session_id,
            StudentId::new(student).unwrap(),
            Score::try_new("rating_quality", 4).unwrap(),
            Score::try_new("satisfaction_level", 5).unwrap(),
            "solid".to_string(),
            Timestamp::parse_rfc3339("2024-03-01T12:00:00Z").unwrap(),
        )
    }

    #[tokio::test]
    async fn get_returns_stored_evaluation() {
        let repo = Arc::new(InMemoryEvaluationRepository::new());
        let stored = evaluation(SessionId::new(), "S1");
        repo.save(&stored).await.unwrap();

        let handler = GetEvaluationHandler::new(repo);
        let found = handler
            .handle(GetEvaluationQuery {
                evaluation_id: *stored.id(),
            })
            .await
            .unwrap();
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn student_listing_is_scoped() {
        let repo = Arc::new(InMemoryEvaluationRepository::new());
        repo.save(&evaluation(SessionId::new(), "S1")).await.unwrap();
        repo.save(&evaluation(SessionId::new(), "S2")).await.unwrap();
        repo.save(&evaluation(SessionId::new(), "S1")).await.unwrap();

        let handler = ListStudentEvaluationsHandler::new(repo);
        let listed = handler
            .handle(ListStudentEvaluationsQuery {
                student_id: StudentId::new("S1").unwrap(),
            })
            .await
            .unwrap();
        assert_eq!(listed.len(), 2);
    }
}
