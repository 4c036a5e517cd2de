//! PostgreSQL adapters.
//!
//! sqlx-backed implementations of the storage ports. Every adapter
//! converts driver errors into `DatabaseError` domain errors; row
//! decoding goes through [`get_col`] so a schema drift surfaces as a
//! typed error instead of a panic.

mod availability_repository;
mod evaluation_repository;
mod matching_repository;
mod session_repository;

pub use availability_repository::PostgresAvailabilityRepository;
pub use evaluation_repository::PostgresEvaluationRepository;
pub use matching_repository::PostgresMatchingRequestRepository;
pub use session_repository::PostgresSessionRepository;

use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Wraps a driver error as a `DatabaseError` with context.
pub(crate) fn db_err(context: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, err))
}

/// Decodes one column, converting decode failures into domain errors.
pub(crate) fn get_col<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| db_err(&format!("Failed to read column '{}'", name), e))
}
