//! HTTP routes for matching endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    approve_request, create_request, list_student_requests, list_tutor_requests, reject_request,
    MatchingHandlers,
};

/// Creates the matching router with all endpoints.
pub fn matching_routes(handlers: MatchingHandlers) -> Router {
    Router::new()
        .route("/request", post(create_request))
        .route("/approve/:request_id", post(approve_request))
        .route("/reject/:request_id", post(reject_request))
        .route("/student/:student_id", get(list_student_requests))
        .route("/tutor/:tutor_id", get(list_tutor_requests))
        .with_state(handlers)
}
