//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter (dto / handlers /
//! routes); `api_router` assembles them under the `/api` prefix.
//! Authorization is applied by the deployment boundary in front of
//! this router, not per-operation here.

pub mod availability;
pub mod error;
pub mod evaluation;
pub mod matching;
pub mod session;

use axum::{routing::get, Router};

pub use availability::AvailabilityHandlers;
pub use error::ErrorResponse;
pub use evaluation::EvaluationHandlers;
pub use matching::MatchingHandlers;
pub use session::SessionHandlers;

/// Builds the full API router.
pub fn api_router(
    availability: AvailabilityHandlers,
    matching: MatchingHandlers,
    sessions: SessionHandlers,
    evaluations: EvaluationHandlers,
) -> Router {
    let api = Router::new()
        .nest("/availability", availability::availability_routes(availability))
        .nest("/matching", matching::matching_routes(matching))
        .nest("/sessions", session::session_routes(sessions))
        .nest("/evaluations", evaluation::evaluation_routes(evaluations));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
}

async fn health() -> &'static str {
    "ok"
}
