//! In-memory implementation of SessionRepository.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, StudentId, TutorId};
use crate::domain::session::Session;
use crate::ports::SessionRepository;

/// Vec-backed session store; insertion order is the listing order.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<Vec<Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().expect("session store poisoned");
        if sessions.iter().any(|s| s.id() == session.id()) {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Duplicate session id: {}", session.id()),
            ));
        }
        sessions.push(session.clone());
        Ok(())
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().expect("session store poisoned");
        match sessions.iter().position(|s| s.id() == session.id()) {
            Some(pos) => {
                sessions[pos] = session.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let sessions = self.sessions.read().expect("session store poisoned");
        Ok(sessions.iter().find(|s| s.id() == id).cloned())
    }

    async fn find_by_student(&self, student_id: &StudentId) -> Result<Vec<Session>, DomainError> {
        let sessions = self.sessions.read().expect("session store poisoned");
        Ok(sessions
            .iter()
            .filter(|s| s.student_id() == student_id)
            .cloned()
            .collect())
    }

    async fn find_by_tutor(&self, tutor_id: &TutorId) -> Result<Vec<Session>, DomainError> {
        let sessions = self.sessions.read().expect("session store poisoned");
        Ok(sessions
            .iter()
            .filter(|s| s.tutor_id() == tutor_id)
            .cloned()
            .collect())
    }

    async fn find_active_by_tutor(&self, tutor_id: &TutorId) -> Result<Vec<Session>, DomainError> {
        let sessions = self.sessions.read().expect("session store poisoned");
        Ok(sessions
            .iter()
            .filter(|s| s.tutor_id() == tutor_id && s.is_active())
            .cloned()
            .collect())
    }

    async fn find_active_by_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<Session>, DomainError> {
        let sessions = self.sessions.read().expect("session store poisoned");
        Ok(sessions
            .iter()
            .filter(|s| s.student_id() == student_id && s.is_active())
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Session>, DomainError> {
        let sessions = self.sessions.read().expect("session store poisoned");
        Ok(sessions.clone())
    }
}
