//! In-memory adapters.
//!
//! Vec-backed repository implementations behind `RwLock`s. Insertion
//! order doubles as the listing order the ports promise. Used by the
//! integration tests and available for local runs without a database.

mod availability_repository;
mod evaluation_repository;
mod matching_repository;
mod session_repository;

pub use availability_repository::InMemoryAvailabilityRepository;
pub use evaluation_repository::InMemoryEvaluationRepository;
pub use matching_repository::InMemoryMatchingRequestRepository;
pub use session_repository::InMemorySessionRepository;
