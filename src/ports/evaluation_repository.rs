//! Evaluation repository port.

use async_trait::async_trait;

use crate::domain::evaluation::Evaluation;
use crate::domain::foundation::{DomainError, EvaluationId, SessionId, StudentId};

/// Storage capability for evaluations.
///
/// Uniqueness per session is a ledger rule, not a storage rule: the
/// repository stores whatever it is given, and the submit handler is
/// responsible for never creating a second record for a session.
#[async_trait]
pub trait EvaluationRepository: Send + Sync {
    /// Persists a new evaluation.
    async fn save(&self, evaluation: &Evaluation) -> Result<(), DomainError>;

    /// Replaces an existing evaluation.
    ///
    /// # Errors
    ///
    /// - `EvaluationNotFound` if the evaluation doesn't exist
    async fn update(&self, evaluation: &Evaluation) -> Result<(), DomainError>;

    /// Finds an evaluation by its ID. Returns `None` when absent.
    async fn find_by_id(&self, id: &EvaluationId) -> Result<Option<Evaluation>, DomainError>;

    /// Evaluations recorded for a session (at most one when the ledger
    /// invariant holds).
    async fn find_by_session(&self, session_id: &SessionId)
        -> Result<Vec<Evaluation>, DomainError>;

    /// All evaluations submitted by a student, in insertion order.
    async fn find_by_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<Evaluation>, DomainError>;
}
