//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    cancel_session, complete_session, get_session, list_all_sessions, list_student_sessions,
    list_tutor_sessions, reschedule_session, schedule_session, update_logistics, SessionHandlers,
};

/// Creates the session router with all endpoints.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", get(list_all_sessions))
        .route("/schedule", post(schedule_session))
        .route("/reschedule/:session_id", post(reschedule_session))
        .route("/cancel/:session_id", post(cancel_session))
        .route("/complete/:session_id", post(complete_session))
        .route("/:session_id/logistics", put(update_logistics))
        .route("/:session_id", get(get_session))
        .route("/student/:student_id", get(list_student_sessions))
        .route("/tutor/:tutor_id", get(list_tutor_sessions))
        .with_state(handlers)
}
