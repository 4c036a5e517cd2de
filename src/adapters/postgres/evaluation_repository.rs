//! PostgreSQL implementation of EvaluationRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::evaluation::Evaluation;
use crate::domain::foundation::{
    DomainError, ErrorCode, EvaluationId, Score, SessionId, StudentId, Timestamp,
};
use crate::ports::EvaluationRepository;

use super::{db_err, get_col};

/// sqlx-backed evaluation store.
#[derive(Clone)]
pub struct PostgresEvaluationRepository {
    pool: PgPool,
}

impl PostgresEvaluationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EvaluationRepository for PostgresEvaluationRepository {
    async fn save(&self, evaluation: &Evaluation) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO evaluations (
                id, session_id, student_id, rating_quality, satisfaction_level,
                comment, submitted_date
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(evaluation.id().as_uuid())
        .bind(evaluation.session_id().as_uuid())
        .bind(evaluation.student_id().as_str())
        .bind(evaluation.rating_quality().value() as i16)
        .bind(evaluation.satisfaction_level().value() as i16)
        .bind(evaluation.comment())
        .bind(evaluation.submitted_date().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to insert evaluation", e))?;

        Ok(())
    }

    async fn update(&self, evaluation: &Evaluation) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE evaluations SET
                student_id = $2,
                rating_quality = $3,
                satisfaction_level = $4,
                comment = $5,
                submitted_date = $6
            WHERE id = $1
            "#,
        )
        .bind(evaluation.id().as_uuid())
        .bind(evaluation.student_id().as_str())
        .bind(evaluation.rating_quality().value() as i16)
        .bind(evaluation.satisfaction_level().value() as i16)
        .bind(evaluation.comment())
        .bind(evaluation.submitted_date().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to update evaluation", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::EvaluationNotFound,
                format!("Evaluation not found: {}", evaluation.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &EvaluationId) -> Result<Option<Evaluation>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, session_id, student_id, rating_quality, satisfaction_level,
                   comment, submitted_date
            FROM evaluations
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch evaluation", e))?;

        row.map(|r| row_to_evaluation(&r)).transpose()
    }

    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<Evaluation>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, student_id, rating_quality, satisfaction_level,
                   comment, submitted_date
            FROM evaluations
            WHERE session_id = $1
            ORDER BY created_seq
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch evaluations by session", e))?;

        rows.iter().map(row_to_evaluation).collect()
    }

    async fn find_by_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<Evaluation>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, student_id, rating_quality, satisfaction_level,
                   comment, submitted_date
            FROM evaluations
            WHERE student_id = $1
            ORDER BY created_seq
            "#,
        )
        .bind(student_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch evaluations by student", e))?;

        rows.iter().map(row_to_evaluation).collect()
    }
}

fn row_to_evaluation(row: &PgRow) -> Result<Evaluation, DomainError> {
    let id: uuid::Uuid = get_col(row, "id")?;
    let session_id: uuid::Uuid = get_col(row, "session_id")?;
    let student_id: String = get_col(row, "student_id")?;
    let rating_quality: i16 = get_col(row, "rating_quality")?;
    let satisfaction_level: i16 = get_col(row, "satisfaction_level")?;
    let comment: String = get_col(row, "comment")?;
    let submitted_date: chrono::DateTime<chrono::Utc> = get_col(row, "submitted_date")?;

    Ok(Evaluation::reconstitute(
        EvaluationId::from_uuid(id),
        SessionId::from_uuid(session_id),
        StudentId::new(student_id).map_err(|e| db_err("Stored student id is invalid", e))?,
        Score::try_new("rating_quality", rating_quality as u8)
            .map_err(|e| db_err("Stored rating is out of range", e))?,
        Score::try_new("satisfaction_level", satisfaction_level as u8)
            .map_err(|e| db_err("Stored satisfaction is out of range", e))?,
        comment,
        Timestamp::from_datetime(submitted_date),
    ))
}
