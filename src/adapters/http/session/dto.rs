//! HTTP DTOs for session endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionStatus;
use crate::domain::session::{Session, SessionMode};

/// Request to schedule a session.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSessionRequest {
    pub student_id: String,
    pub tutor_id: String,
    pub topic: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub mode: SessionMode,
    #[serde(default)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Request to reschedule a session.
#[derive(Debug, Clone, Deserialize)]
pub struct RescheduleSessionRequest {
    pub new_start_time: DateTime<Utc>,
    pub new_end_time: DateTime<Utc>,
}

/// Request to replace a session's logistics fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLogisticsRequest {
    #[serde(default)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Session representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub student_id: String,
    pub tutor_id: String,
    pub topic: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i64,
    pub mode: SessionMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: SessionStatus,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            session_id: session.id().to_string(),
            student_id: session.student_id().to_string(),
            tutor_id: session.tutor_id().to_string(),
            topic: session.topic().to_string(),
            start_time: session.window().start().as_datetime().to_rfc3339(),
            end_time: session.window().end().as_datetime().to_rfc3339(),
            duration_minutes: session.duration_minutes(),
            mode: session.mode(),
            meeting_link: session.meeting_link().map(str::to_string),
            location: session.location().map(str::to_string),
            status: session.status(),
        }
    }
}
