//! RescheduleSessionHandler - moves a session to a new window.
//!
//! Runs the same double-booking check as scheduling, excluding the
//! session being moved. The session is read once to learn its tutor
//! and student, then re-read after the locks are held: the first read
//! happens outside the critical section and may be stale.

use std::sync::Arc;

use crate::application::locks::KeyedLocks;
use crate::domain::foundation::{SessionId, TimeRange, Timestamp};
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

use super::conflicts::find_conflict;

/// Command to reschedule a session.
#[derive(Debug, Clone)]
pub struct RescheduleSessionCommand {
    pub session_id: SessionId,
    pub new_start_time: Timestamp,
    pub new_end_time: Timestamp,
}

/// Handler for session rescheduling.
pub struct RescheduleSessionHandler {
    repository: Arc<dyn SessionRepository>,
    locks: Arc<KeyedLocks>,
}

impl RescheduleSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, locks: Arc<KeyedLocks>) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(&self, cmd: RescheduleSessionCommand) -> Result<Session, SessionError> {
        let new_window = TimeRange::new(cmd.new_start_time, cmd.new_end_time)?;

        // Pre-read to learn which calendars to lock.
        let preview = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SessionError::NotFound(cmd.session_id))?;

        let tutor_key = format!("tutor:{}", preview.tutor_id());
        let student_key = format!("student:{}", preview.student_id());
        let _guards = self.locks.acquire_all(&[&tutor_key, &student_key]).await;

        // Authoritative read under the locks.
        let mut session = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SessionError::NotFound(cmd.session_id))?;

        if let Some(conflicting) = find_conflict(
            self.repository.as_ref(),
            session.tutor_id(),
            session.student_id(),
            &new_window,
            Some(session.id()),
        )
        .await?
        {
            return Err(SessionError::conflict(conflicting));
        }

        session.reschedule(new_window)?;
        self.repository.update(&session).await?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionRepository;
    use crate::domain::foundation::{SessionStatus, StudentId, TutorId};
    use crate::domain::session::SessionMode;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse_rfc3339(s).unwrap()
    }

    fn window(start: &str, end: &str) -> TimeRange {
        TimeRange::new(ts(start), ts(end)).unwrap()
    }

    async fn seed(repo: &InMemorySessionRepository, tutor: &str, student: &str, w: TimeRange) -> SessionId {
        let session = Session::schedule(
            SessionId::new(),
            StudentId::new(student).unwrap(),
            TutorId::new(tutor).unwrap(),
            "topic".to_string(),
            w,
            w.duration_minutes(),
            SessionMode::Online,
            None,
            None,
        )
        .unwrap();
        repo.save(&session).await.unwrap();
        *session.id()
    }

    fn handler(repo: Arc<InMemorySessionRepository>) -> RescheduleSessionHandler {
        RescheduleSessionHandler::new(repo, Arc::new(KeyedLocks::new()))
    }

    #[tokio::test]
    async fn moves_session_and_marks_rescheduled() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let id = seed(&repo, "T1", "S1", window("2024-03-01T10:00:00Z", "2024-03-01T11:00:00Z")).await;
        let handler = handler(repo.clone());

        let session = handler
            .handle(RescheduleSessionCommand {
                session_id: id,
                new_start_time: ts("2024-03-01T11:00:00Z"),
                new_end_time: ts("2024-03-01T12:00:00Z"),
            })
            .await
            .unwrap();

        assert_eq!(session.status(), SessionStatus::Rescheduled);
        assert_eq!(session.window(), &window("2024-03-01T11:00:00Z", "2024-03-01T12:00:00Z"));
        assert_eq!(session.duration_minutes(), 60);
    }

    #[tokio::test]
    async fn own_old_window_does_not_block_the_move() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let id = seed(&repo, "T1", "S1", window("2024-03-01T10:00:00Z", "2024-03-01T11:00:00Z")).await;
        let handler = handler(repo.clone());

        // Overlaps only the session's own current window.
        let result = handler
            .handle(RescheduleSessionCommand {
                session_id: id,
                new_start_time: ts("2024-03-01T10:30:00Z"),
                new_end_time: ts("2024-03-01T11:30:00Z"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn rejects_overlap_with_another_session() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let id = seed(&repo, "T1", "S1", window("2024-03-01T10:00:00Z", "2024-03-01T11:00:00Z")).await;
        let other = seed(&repo, "T1", "S2", window("2024-03-01T12:00:00Z", "2024-03-01T13:00:00Z")).await;
        let handler = handler(repo.clone());

        let result = handler
            .handle(RescheduleSessionCommand {
                session_id: id,
                new_start_time: ts("2024-03-01T12:30:00Z"),
                new_end_time: ts("2024-03-01T13:30:00Z"),
            })
            .await;

        match result {
            Err(SessionError::Conflict {
                conflicting_session,
            }) => assert_eq!(conflicting_session, other),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_session_fails_with_not_found() {
        let handler = handler(Arc::new(InMemorySessionRepository::new()));
        let result = handler
            .handle(RescheduleSessionCommand {
                session_id: SessionId::new(),
                new_start_time: ts("2024-03-01T10:00:00Z"),
                new_end_time: ts("2024-03-01T11:00:00Z"),
            })
            .await;
        assert!(matches!(result, Err(SessionError::NotFound(_))));
    }

    #[tokio::test]
    async fn canceled_session_cannot_be_rescheduled() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let id = seed(&repo, "T1", "S1", window("2024-03-01T10:00:00Z", "2024-03-01T11:00:00Z")).await;

        let mut session = repo.find_by_id(&id).await.unwrap().unwrap();
        session.cancel().unwrap();
        repo.update(&session).await.unwrap();

        let handler = handler(repo.clone());
        let result = handler
            .handle(RescheduleSessionCommand {
                session_id: id,
                new_start_time: ts("2024-03-01T14:00:00Z"),
                new_end_time: ts("2024-03-01T15:00:00Z"),
            })
            .await;

        assert!(matches!(result, Err(SessionError::Terminal { .. })));
    }
}
