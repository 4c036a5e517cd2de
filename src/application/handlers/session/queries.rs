//! Session read handlers - pure lookups, no side effects.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, StudentId, TutorId};
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Query for a single session.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for single-session lookup.
///
/// Absence is reported as `Ok(None)` so happy-path callers can stay
/// exception-free; the HTTP adapter turns `None` into a 404.
pub struct GetSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl GetSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<Option<Session>, SessionError> {
        Ok(self.repository.find_by_id(&query.session_id).await?)
    }
}

/// Query for a student's sessions.
#[derive(Debug, Clone)]
pub struct ListStudentSessionsQuery {
    pub student_id: StudentId,
}

/// Handler for the student-side listing.
pub struct ListStudentSessionsHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ListStudentSessionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListStudentSessionsQuery,
    ) -> Result<Vec<Session>, SessionError> {
        Ok(self.repository.find_by_student(&query.student_id).await?)
    }
}

/// Query for a tutor's sessions.
#[derive(Debug, Clone)]
pub struct ListTutorSessionsQuery {
    pub tutor_id: TutorId,
}

/// Handler for the tutor-side listing.
pub struct ListTutorSessionsHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ListTutorSessionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListTutorSessionsQuery) -> Result<Vec<Session>, SessionError> {
        Ok(self.repository.find_by_tutor(&query.tutor_id).await?)
    }
}

/// Handler for the unscoped listing (coordinator view).
pub struct ListAllSessionsHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ListAllSessionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Session>, SessionError> {
        Ok(self.repository.find_all().await?)
    }
}
