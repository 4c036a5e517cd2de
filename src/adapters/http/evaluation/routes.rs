//! HTTP routes for evaluation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_evaluation, list_session_evaluations, list_student_evaluations, submit_evaluation,
    EvaluationHandlers,
};

/// Creates the evaluation router with all endpoints.
pub fn evaluation_routes(handlers: EvaluationHandlers) -> Router {
    Router::new()
        .route("/", post(submit_evaluation))
        .route("/session/:session_id", get(list_session_evaluations))
        .route("/student/:student_id", get(list_student_evaluations))
        .route("/:evaluation_id", get(get_evaluation))
        .with_state(handlers)
}
