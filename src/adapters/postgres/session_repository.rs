//! PostgreSQL implementation of SessionRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{
    DomainError, ErrorCode, SessionId, SessionStatus, StudentId, TimeRange, Timestamp, TutorId,
};
use crate::domain::session::{Session, SessionMode};
use crate::ports::SessionRepository;

use super::{db_err, get_col};

const SESSION_COLUMNS: &str = "id, student_id, tutor_id, topic, start_time, end_time, \
     duration_minutes, mode, meeting_link, location, status";

/// sqlx-backed session store.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                id, student_id, tutor_id, topic, start_time, end_time,
                duration_minutes, mode, meeting_link, location, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.student_id().as_str())
        .bind(session.tutor_id().as_str())
        .bind(session.topic())
        .bind(session.window().start().as_datetime())
        .bind(session.window().end().as_datetime())
        .bind(session.duration_minutes())
        .bind(session_mode_to_str(session.mode()))
        .bind(session.meeting_link())
        .bind(session.location())
        .bind(session_status_to_str(session.status()))
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to insert session", e))?;

        Ok(())
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE sessions SET
                start_time = $2,
                end_time = $3,
                duration_minutes = $4,
                meeting_link = $5,
                location = $6,
                status = $7
            WHERE id = $1
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.window().start().as_datetime())
        .bind(session.window().end().as_datetime())
        .bind(session.duration_minutes())
        .bind(session.meeting_link())
        .bind(session.location())
        .bind(session_status_to_str(session.status()))
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to update session", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM sessions WHERE id = $1",
            SESSION_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch session", e))?;

        row.map(|r| row_to_session(&r)).transpose()
    }

    async fn exists(&self, id: &SessionId) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sessions WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_err("Failed to check session existence", e))?;

        Ok(result.0 > 0)
    }

    async fn find_by_student(&self, student_id: &StudentId) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM sessions WHERE student_id = $1 ORDER BY created_seq",
            SESSION_COLUMNS
        ))
        .bind(student_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch sessions by student", e))?;

        rows.iter().map(row_to_session).collect()
    }

    async fn find_by_tutor(&self, tutor_id: &TutorId) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM sessions WHERE tutor_id = $1 ORDER BY created_seq",
            SESSION_COLUMNS
        ))
        .bind(tutor_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch sessions by tutor", e))?;

        rows.iter().map(row_to_session).collect()
    }

    async fn find_active_by_tutor(&self, tutor_id: &TutorId) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM sessions \
             WHERE tutor_id = $1 AND status IN ('scheduled', 'rescheduled') \
             ORDER BY created_seq",
            SESSION_COLUMNS
        ))
        .bind(tutor_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch active sessions by tutor", e))?;

        rows.iter().map(row_to_session).collect()
    }

    async fn find_active_by_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM sessions \
             WHERE student_id = $1 AND status IN ('scheduled', 'rescheduled') \
             ORDER BY created_seq",
            SESSION_COLUMNS
        ))
        .bind(student_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch active sessions by student", e))?;

        rows.iter().map(row_to_session).collect()
    }

    async fn find_all(&self) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM sessions ORDER BY created_seq",
            SESSION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch sessions", e))?;

        rows.iter().map(row_to_session).collect()
    }
}

fn session_status_to_str(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Scheduled => "scheduled",
        SessionStatus::Rescheduled => "rescheduled",
        SessionStatus::Canceled => "canceled",
        SessionStatus::Completed => "completed",
    }
}

fn str_to_session_status(s: &str) -> Result<SessionStatus, DomainError> {
    match s {
        "scheduled" => Ok(SessionStatus::Scheduled),
        "rescheduled" => Ok(SessionStatus::Rescheduled),
        "canceled" => Ok(SessionStatus::Canceled),
        "completed" => Ok(SessionStatus::Completed),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid session status: {}", s),
        )),
    }
}

fn session_mode_to_str(mode: SessionMode) -> &'static str {
    match mode {
        SessionMode::Online => "online",
        SessionMode::InPerson => "in_person",
    }
}

fn str_to_session_mode(s: &str) -> Result<SessionMode, DomainError> {
    match s {
        "online" => Ok(SessionMode::Online),
        "in_person" => Ok(SessionMode::InPerson),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid session mode: {}", s),
        )),
    }
}

fn row_to_session(row: &PgRow) -> Result<Session, DomainError> {
    let id: uuid::Uuid = get_col(row, "id")?;
    let student_id: String = get_col(row, "student_id")?;
    let tutor_id: String = get_col(row, "tutor_id")?;
    let topic: String = get_col(row, "topic")?;
    let start_time: chrono::DateTime<chrono::Utc> = get_col(row, "start_time")?;
    let end_time: chrono::DateTime<chrono::Utc> = get_col(row, "end_time")?;
    let duration_minutes: i64 = get_col(row, "duration_minutes")?;
    let mode_str: String = get_col(row, "mode")?;
    let meeting_link: Option<String> = get_col(row, "meeting_link")?;
    let location: Option<String> = get_col(row, "location")?;
    let status_str: String = get_col(row, "status")?;

    let window = TimeRange::new(
        Timestamp::from_datetime(start_time),
        Timestamp::from_datetime(end_time),
    )
    .map_err(|e| db_err("Stored session interval is invalid", e))?;

    Ok(Session::reconstitute(
        SessionId::from_uuid(id),
        StudentId::new(student_id).map_err(|e| db_err("Stored student id is invalid", e))?,
        TutorId::new(tutor_id).map_err(|e| db_err("Stored tutor id is invalid", e))?,
        topic,
        window,
        duration_minutes,
        str_to_session_mode(&mode_str)?,
        meeting_link,
        location,
        str_to_session_status(&status_str)?,
    ))
}
