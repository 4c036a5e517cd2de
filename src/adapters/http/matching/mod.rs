//! Matching HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use handlers::MatchingHandlers;
pub use routes::matching_routes;
