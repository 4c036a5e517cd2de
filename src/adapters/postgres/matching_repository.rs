//! PostgreSQL implementation of MatchingRequestRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{
    DomainError, ErrorCode, MatchingStatus, RequestId, StudentId, Timestamp, TutorId,
};
use crate::domain::matching::MatchingRequest;
use crate::ports::MatchingRequestRepository;

use super::{db_err, get_col};

/// sqlx-backed matching request store.
#[derive(Clone)]
pub struct PostgresMatchingRequestRepository {
    pool: PgPool,
}

impl PostgresMatchingRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchingRequestRepository for PostgresMatchingRequestRepository {
    async fn save(&self, request: &MatchingRequest) -> Result<(), DomainError> {
        let slots: Vec<chrono::DateTime<chrono::Utc>> = request
            .preferred_time_slots()
            .iter()
            .map(|t| *t.as_datetime())
            .collect();

        sqlx::query(
            r#"
            INSERT INTO matching_requests (
                id, student_id, tutor_id, subject, preferred_time_slots, status, created_date
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(request.id().as_uuid())
        .bind(request.student_id().as_str())
        .bind(request.tutor_id().as_str())
        .bind(request.subject())
        .bind(&slots)
        .bind(matching_status_to_str(request.status()))
        .bind(request.created_date().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to insert matching request", e))?;

        Ok(())
    }

    async fn update(&self, request: &MatchingRequest) -> Result<(), DomainError> {
        // Only the status is mutable after creation.
        let result = sqlx::query(
            r#"
            UPDATE matching_requests SET status = $2 WHERE id = $1
            "#,
        )
        .bind(request.id().as_uuid())
        .bind(matching_status_to_str(request.status()))
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to update matching request", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::RequestNotFound,
                format!("Matching request not found: {}", request.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &RequestId) -> Result<Option<MatchingRequest>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, student_id, tutor_id, subject, preferred_time_slots, status, created_date
            FROM matching_requests
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch matching request", e))?;

        row.map(|r| row_to_request(&r)).transpose()
    }

    async fn find_by_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<MatchingRequest>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, student_id, tutor_id, subject, preferred_time_slots, status, created_date
            FROM matching_requests
            WHERE student_id = $1
            ORDER BY created_seq
            "#,
        )
        .bind(student_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch requests by student", e))?;

        rows.iter().map(row_to_request).collect()
    }

    async fn find_by_tutor(
        &self,
        tutor_id: &TutorId,
    ) -> Result<Vec<MatchingRequest>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, student_id, tutor_id, subject, preferred_time_slots, status, created_date
            FROM matching_requests
            WHERE tutor_id = $1
            ORDER BY created_seq
            "#,
        )
        .bind(tutor_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch requests by tutor", e))?;

        rows.iter().map(row_to_request).collect()
    }
}

fn matching_status_to_str(status: MatchingStatus) -> &'static str {
    match status {
        MatchingStatus::Pending => "pending",
        MatchingStatus::Accepted => "accepted",
        MatchingStatus::Rejected => "rejected",
    }
}

fn str_to_matching_status(s: &str) -> Result<MatchingStatus, DomainError> {
    match s {
        "pending" => Ok(MatchingStatus::Pending),
        "accepted" => Ok(MatchingStatus::Accepted),
        "rejected" => Ok(MatchingStatus::Rejected),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid matching status: {}", s),
        )),
    }
}

fn row_to_request(row: &PgRow) -> Result<MatchingRequest, DomainError> {
    let id: uuid::Uuid = get_col(row, "id")?;
    let student_id: String = get_col(row, "student_id")?;
    let tutor_id: String = get_col(row, "tutor_id")?;
    let subject: String = get_col(row, "subject")?;
    let slots: Vec<chrono::DateTime<chrono::Utc>> = get_col(row, "preferred_time_slots")?;
    let status_str: String = get_col(row, "status")?;
    let created_date: chrono::DateTime<chrono::Utc> = get_col(row, "created_date")?;

    Ok(MatchingRequest::reconstitute(
        RequestId::from_uuid(id),
        StudentId::new(student_id).map_err(|e| db_err("Stored student id is invalid", e))?,
        TutorId::new(tutor_id).map_err(|e| db_err("Stored tutor id is invalid", e))?,
        subject,
        slots.into_iter().map(Timestamp::from_datetime).collect(),
        str_to_matching_status(&status_str)?,
        Timestamp::from_datetime(created_date),
    ))
}
