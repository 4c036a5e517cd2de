//! Double-booking check shared by schedule and reschedule.

use crate::domain::foundation::{DomainError, SessionId, StudentId, TimeRange, TutorId};
use crate::ports::SessionRepository;

/// Finds an active session that overlaps the candidate window for the
/// tutor or the student.
///
/// Both sides are checked; the tutor's calendar first. `exclude` skips
/// the session being moved during a reschedule. Returns the id of the
/// first offending session, or `None` when the window is free.
///
/// Callers must hold the tutor and student locks: the read performed
/// here and the subsequent write form one critical section.
pub(super) async fn find_conflict(
    repository: &dyn SessionRepository,
    tutor_id: &TutorId,
    student_id: &StudentId,
    window: &TimeRange,
    exclude: Option<&SessionId>,
) -> Result<Option<SessionId>, DomainError> {
    let tutor_sessions = repository.find_active_by_tutor(tutor_id).await?;
    if let Some(hit) = first_overlap(&tutor_sessions, window, exclude) {
        return Ok(Some(hit));
    }

    let student_sessions = repository.find_active_by_student(student_id).await?;
    Ok(first_overlap(&student_sessions, window, exclude))
}

fn first_overlap(
    sessions: &[crate::domain::session::Session],
    window: &TimeRange,
    exclude: Option<&SessionId>,
) -> Option<SessionId> {
    sessions
        .iter()
        .filter(|s| Some(s.id()) != exclude)
        .find(|s| s.window().overlaps(window))
        .map(|s| *s.id())
}
