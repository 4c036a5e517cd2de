//! Session aggregate entity.
//!
//! A session is the scheduled engagement between one student and one
//! tutor. The aggregate enforces its own state machine and interval
//! consistency; the cross-session double-booking invariant is enforced
//! by the scheduling handlers, which consult every active session of
//! the tutor and the student before committing.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    SessionId, SessionStatus, StateMachine, StudentId, TimeRange, TutorId, ValidationError,
};

use super::{SessionError, SessionMode};

/// A scheduled tutoring session.
///
/// # Invariants
///
/// - `duration_minutes` always equals the window length
/// - `Canceled` and `Completed` sessions are frozen: no mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    student_id: StudentId,
    tutor_id: TutorId,
    topic: String,
    window: TimeRange,
    duration_minutes: i64,
    mode: SessionMode,
    meeting_link: Option<String>,
    location: Option<String>,
    status: SessionStatus,
}

impl Session {
    /// Creates a newly scheduled session.
    ///
    /// The declared duration is redundant with the window and must
    /// agree with it.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if `duration_minutes` disagrees with the window
    #[allow(clippy::too_many_arguments)]
    pub fn schedule(
        id: SessionId,
        student_id: StudentId,
        tutor_id: TutorId,
        topic: String,
        window: TimeRange,
        duration_minutes: i64,
        mode: SessionMode,
        meeting_link: Option<String>,
        location: Option<String>,
    ) -> Result<Self, ValidationError> {
        if duration_minutes != window.duration_minutes() {
            return Err(ValidationError::invalid_format(
                "duration_minutes",
                format!(
                    "declared duration {} does not match the {}-minute window",
                    duration_minutes,
                    window.duration_minutes()
                ),
            ));
        }

        Ok(Self {
            id,
            student_id,
            tutor_id,
            topic,
            window,
            duration_minutes,
            mode,
            meeting_link,
            location,
            status: SessionStatus::Scheduled,
        })
    }

    /// Reconstitute a session from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SessionId,
        student_id: StudentId,
        tutor_id: TutorId,
        topic: String,
        window: TimeRange,
        duration_minutes: i64,
        mode: SessionMode,
        meeting_link: Option<String>,
        location: Option<String>,
        status: SessionStatus,
    ) -> Self {
        Self {
            id,
            student_id,
            tutor_id,
            topic,
            window,
            duration_minutes,
            mode,
            meeting_link,
            location,
            status,
        }
    }

    // ─────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn tutor_id(&self) -> &TutorId {
        &self.tutor_id
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn window(&self) -> &TimeRange {
        &self.window
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration_minutes
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn meeting_link(&self) -> Option<&str> {
        self.meeting_link.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns true if the session counts toward conflict checks.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    // ─────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────

    /// Moves the session to a new window.
    ///
    /// The duration is recomputed from the new window. Logistics
    /// fields (meeting link, location) are left untouched.
    ///
    /// # Errors
    ///
    /// - `Terminal` if the session is canceled or completed
    pub fn reschedule(&mut self, new_window: TimeRange) -> Result<(), SessionError> {
        self.transition(SessionStatus::Rescheduled)?;
        self.window = new_window;
        self.duration_minutes = new_window.duration_minutes();
        Ok(())
    }

    /// Cancels the session. Terminal.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        self.transition(SessionStatus::Canceled)
    }

    /// Marks the session as held. Terminal.
    pub fn complete(&mut self) -> Result<(), SessionError> {
        self.transition(SessionStatus::Completed)
    }

    /// Updates the advisory logistics fields.
    ///
    /// # Errors
    ///
    /// - `Terminal` if the session is canceled or completed
    pub fn update_logistics(
        &mut self,
        meeting_link: Option<String>,
        location: Option<String>,
    ) -> Result<(), SessionError> {
        self.ensure_active()?;
        self.meeting_link = meeting_link;
        self.location = location;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────

    fn transition(&mut self, target: SessionStatus) -> Result<(), SessionError> {
        if !self.status.can_transition_to(&target) {
            return Err(SessionError::Terminal {
                id: self.id,
                status: self.status,
            });
        }
        self.status = target;
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        if self.is_active() {
            Ok(())
        } else {
            Err(SessionError::Terminal {
                id: self.id,
                status: self.status,
            })
        }
    }
}
