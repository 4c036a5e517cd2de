//! In-memory implementation of EvaluationRepository.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::evaluation::Evaluation;
use crate::domain::foundation::{DomainError, ErrorCode, EvaluationId, SessionId, StudentId};
use crate::ports::EvaluationRepository;

/// Vec-backed evaluation store; insertion order is the listing order.
#[derive(Default)]
pub struct InMemoryEvaluationRepository {
    evaluations: RwLock<Vec<Evaluation>>,
}

impl InMemoryEvaluationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EvaluationRepository for InMemoryEvaluationRepository {
    async fn save(&self, evaluation: &Evaluation) -> Result<(), DomainError> {
        let mut evaluations = self.evaluations.write().expect("evaluation store poisoned");
        if evaluations.iter().any(|e| e.id() == evaluation.id()) {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Duplicate evaluation id: {}", evaluation.id()),
            ));
        }
        evaluations.push(evaluation.clone());
        Ok(())
    }

    async fn update(&self, evaluation: &Evaluation) -> Result<(), DomainError> {
        let mut evaluations = self.evaluations.write().expect("evaluation store poisoned");
        match evaluations.iter().position(|e| e.id() == evaluation.id()) {
            Some(pos) => {
                evaluations[pos] = evaluation.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::EvaluationNotFound,
                format!("Evaluation not found: {}", evaluation.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &EvaluationId) -> Result<Option<Evaluation>, DomainError> {
        let evaluations = self.evaluations.read().expect("evaluation store poisoned");
        Ok(evaluations.iter().find(|e| e.id() == id).cloned())
    }

    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<Evaluation>, DomainError> {
        let evaluations = self.evaluations.read().expect("evaluation store poisoned");
        Ok(evaluations
            .iter()
            .filter(|e| e.session_id() == session_id)
            .cloned()
            .collect())
    }

    async fn find_by_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<Evaluation>, DomainError> {
        let evaluations = self.evaluations.read().expect("evaluation store poisoned");
        Ok(evaluations
            .iter()
            .filter(|e| e.student_id() == student_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Score, Timestamp};

    fn evaluation(session_id: SessionId, rating: u8) -> Evaluation {
        Evaluation::new(
            EvaluationId::new(),
            session_id,
            StudentId::new("student-1").unwrap(),
            Score::try_new("rating_quality", rating).unwrap(),
            Score::try_new("satisfaction_level", rating).unwrap(),
            "fine".to_string(),
            Timestamp::parse_rfc3339("2024-03-01T12:00:00Z").unwrap(),
        )
    }

    #[tokio::test]
    async fn find_by_session_returns_matching_records() {
        let repo = InMemoryEvaluationRepository::new();
        let session_id = SessionId::new();
        let stored = evaluation(session_id, 4);
        repo.save(&stored).await.unwrap();
        repo.save(&evaluation(SessionId::new(), 2)).await.unwrap();

        let found = repo.find_by_session(&session_id).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), stored.id());
    }

    #[tokio::test]
    async fn update_missing_evaluation_fails() {
        let repo = InMemoryEvaluationRepository::new();
        let err = repo.update(&evaluation(SessionId::new(), 3)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EvaluationNotFound);
    }
}
