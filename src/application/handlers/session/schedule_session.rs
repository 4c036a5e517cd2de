//! ScheduleSessionHandler - books a new session.
//!
//! The overlap check and the write form a check-then-act sequence, so
//! the handler holds the tutor and student locks (taken in sorted
//! order) across both steps. Two schedule calls touching the same
//! tutor or student can never interleave their check and write.

use std::sync::Arc;

use crate::application::locks::KeyedLocks;
use crate::domain::foundation::{SessionId, StudentId, TimeRange, Timestamp, TutorId};
use crate::domain::session::{Session, SessionError, SessionMode};
use crate::ports::SessionRepository;

use super::conflicts::find_conflict;

/// Command to schedule a session.
#[derive(Debug, Clone)]
pub struct ScheduleSessionCommand {
    pub student_id: StudentId,
    pub tutor_id: TutorId,
    pub topic: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub duration_minutes: i64,
    pub mode: SessionMode,
    pub meeting_link: Option<String>,
    pub location: Option<String>,
}

/// Handler for session scheduling.
pub struct ScheduleSessionHandler {
    repository: Arc<dyn SessionRepository>,
    locks: Arc<KeyedLocks>,
}

impl ScheduleSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, locks: Arc<KeyedLocks>) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(&self, cmd: ScheduleSessionCommand) -> Result<Session, SessionError> {
        let window = TimeRange::new(cmd.start_time, cmd.end_time)?;
        let session = Session::schedule(
            SessionId::new(),
            cmd.student_id,
            cmd.tutor_id,
            cmd.topic,
            window,
            cmd.duration_minutes,
            cmd.mode,
            cmd.meeting_link,
            cmd.location,
        )?;

        let tutor_key = format!("tutor:{}", session.tutor_id());
        let student_key = format!("student:{}", session.student_id());
        let _guards = self.locks.acquire_all(&[&tutor_key, &student_key]).await;

        if let Some(conflicting) = find_conflict(
            self.repository.as_ref(),
            session.tutor_id(),
            session.student_id(),
            session.window(),
            None,
        )
        .await?
        {
            return Err(SessionError::conflict(conflicting));
        }

        self.repository.save(&session).await?;
        Ok(session)
    }
}
