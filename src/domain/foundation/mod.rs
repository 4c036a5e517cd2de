//! Foundation module - Shared domain primitives.
//!
//! Contains the identifiers, time value objects, bounded scales, status
//! machines, and error types that form the vocabulary of the Tutorlink
//! domain.

mod errors;
mod ids;
mod matching_status;
mod score;
mod session_status;
mod slot_status;
mod state_machine;
mod time_range;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{EvaluationId, RequestId, SessionId, SlotId, StudentId, TutorId};
pub use matching_status::MatchingStatus;
pub use score::Score;
pub use session_status::SessionStatus;
pub use slot_status::SlotStatus;
pub use state_machine::StateMachine;
pub use time_range::TimeRange;
pub use timestamp::Timestamp;
