//! PostgreSQL implementation of AvailabilityRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::availability::AvailabilitySlot;
use crate::domain::foundation::{
    DomainError, ErrorCode, SlotId, SlotStatus, TimeRange, Timestamp, TutorId,
};
use crate::ports::AvailabilityRepository;

use super::{db_err, get_col};

/// sqlx-backed slot store.
#[derive(Clone)]
pub struct PostgresAvailabilityRepository {
    pool: PgPool,
}

impl PostgresAvailabilityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityRepository for PostgresAvailabilityRepository {
    async fn save(&self, slot: &AvailabilitySlot) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO availability_slots (
                id, tutor_id, start_time, end_time, is_recurring, status
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(slot.id().as_uuid())
        .bind(slot.tutor_id().as_str())
        .bind(slot.window().start().as_datetime())
        .bind(slot.window().end().as_datetime())
        .bind(slot.is_recurring())
        .bind(slot_status_to_str(slot.status()))
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to insert availability slot", e))?;

        Ok(())
    }

    async fn update(&self, slot: &AvailabilitySlot) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE availability_slots SET
                start_time = $2,
                end_time = $3,
                is_recurring = $4,
                status = $5
            WHERE id = $1
            "#,
        )
        .bind(slot.id().as_uuid())
        .bind(slot.window().start().as_datetime())
        .bind(slot.window().end().as_datetime())
        .bind(slot.is_recurring())
        .bind(slot_status_to_str(slot.status()))
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("Failed to update availability slot", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SlotNotFound,
                format!("Availability slot not found: {}", slot.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &SlotId) -> Result<Option<AvailabilitySlot>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, tutor_id, start_time, end_time, is_recurring, status
            FROM availability_slots
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch availability slot", e))?;

        row.map(|r| row_to_slot(&r)).transpose()
    }

    async fn find_by_tutor(
        &self,
        tutor_id: &TutorId,
    ) -> Result<Vec<AvailabilitySlot>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, tutor_id, start_time, end_time, is_recurring, status
            FROM availability_slots
            WHERE tutor_id = $1
            ORDER BY created_seq
            "#,
        )
        .bind(tutor_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch slots by tutor", e))?;

        rows.iter().map(row_to_slot).collect()
    }

    async fn delete(&self, id: &SlotId) -> Result<(), DomainError> {
        // Deletion is idempotent: zero affected rows is not an error.
        sqlx::query("DELETE FROM availability_slots WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("Failed to delete availability slot", e))?;

        Ok(())
    }
}

fn slot_status_to_str(status: SlotStatus) -> &'static str {
    match status {
        SlotStatus::Open => "open",
        SlotStatus::Booked => "booked",
        SlotStatus::Canceled => "canceled",
    }
}

fn str_to_slot_status(s: &str) -> Result<SlotStatus, DomainError> {
    match s {
        "open" => Ok(SlotStatus::Open),
        "booked" => Ok(SlotStatus::Booked),
        "canceled" => Ok(SlotStatus::Canceled),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid slot status: {}", s),
        )),
    }
}

fn row_to_slot(row: &PgRow) -> Result<AvailabilitySlot, DomainError> {
    let id: uuid::Uuid = get_col(row, "id")?;
    let tutor_id: String = get_col(row, "tutor_id")?;
    let start_time: chrono::DateTime<chrono::Utc> = get_col(row, "start_time")?;
    let end_time: chrono::DateTime<chrono::Utc> = get_col(row, "end_time")?;
    let is_recurring: bool = get_col(row, "is_recurring")?;
    let status_str: String = get_col(row, "status")?;

    let window = TimeRange::new(
        Timestamp::from_datetime(start_time),
        Timestamp::from_datetime(end_time),
    )
    .map_err(|e| db_err("Stored slot interval is invalid", e))?;

    Ok(AvailabilitySlot::reconstitute(
        SlotId::from_uuid(id),
        TutorId::new(tutor_id).map_err(|e| db_err("Stored tutor id is invalid", e))?,
        window,
        is_recurring,
        str_to_slot_status(&status_str)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrips_through_storage_strings() {
        for status in [SlotStatus::Open, SlotStatus::Booked, SlotStatus::Canceled] {
            assert_eq!(
                str_to_slot_status(slot_status_to_str(status)).unwrap(),
                status
            );
        }
    }

    #[test]
    fn unknown_status_string_is_rejected() {
        assert!(str_to_slot_status("paused").is_err());
    }
}
