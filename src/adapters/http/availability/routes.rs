//! HTTP routes for availability endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    create_slot, delete_slot, list_tutor_slots, update_slot, AvailabilityHandlers,
};

/// Creates the availability router with all endpoints.
pub fn availability_routes(handlers: AvailabilityHandlers) -> Router {
    Router::new()
        .route("/", post(create_slot))
        .route("/tutor/:tutor_id", get(list_tutor_slots))
        .route("/:slot_id", put(update_slot))
        .route("/:slot_id", delete(delete_slot))
        .with_state(handlers)
}
