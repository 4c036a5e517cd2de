//! Session repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId, StudentId, TutorId};
use crate::domain::session::Session;

/// Storage capability for sessions.
///
/// The `find_active_*` queries feed the double-booking check: they
/// return only sessions whose status still counts toward conflicts
/// (scheduled or rescheduled).
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persists a new session.
    async fn save(&self, session: &Session) -> Result<(), DomainError>;

    /// Replaces an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    async fn update(&self, session: &Session) -> Result<(), DomainError>;

    /// Finds a session by its ID. Returns `None` when absent.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Checks whether a session exists.
    async fn exists(&self, id: &SessionId) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// All sessions for a student, regardless of status.
    async fn find_by_student(&self, student_id: &StudentId) -> Result<Vec<Session>, DomainError>;

    /// All sessions for a tutor, regardless of status.
    async fn find_by_tutor(&self, tutor_id: &TutorId) -> Result<Vec<Session>, DomainError>;

    /// Active sessions for a tutor (conflict-check input).
    async fn find_active_by_tutor(&self, tutor_id: &TutorId) -> Result<Vec<Session>, DomainError>;

    /// Active sessions for a student (conflict-check input).
    async fn find_active_by_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<Session>, DomainError>;

    /// Every session in the store.
    async fn find_all(&self) -> Result<Vec<Session>, DomainError>;
}
