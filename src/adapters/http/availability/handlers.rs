//! HTTP handlers for availability endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{status_for, ErrorResponse};
use crate::application::handlers::availability::{
    CreateSlotCommand, CreateSlotHandler, DeleteSlotCommand, DeleteSlotHandler,
    ListTutorSlotsHandler, ListTutorSlotsQuery, UpdateSlotCommand, UpdateSlotHandler,
};
use crate::domain::availability::AvailabilityError;
use crate::domain::foundation::{SlotId, Timestamp, TutorId};

use super::dto::{CreateSlotRequest, SlotResponse, UpdateSlotRequest};

/// Handler state for the availability routes.
#[derive(Clone)]
pub struct AvailabilityHandlers {
    create_handler: Arc<CreateSlotHandler>,
    update_handler: Arc<UpdateSlotHandler>,
    delete_handler: Arc<DeleteSlotHandler>,
    list_handler: Arc<ListTutorSlotsHandler>,
}

impl AvailabilityHandlers {
    pub fn new(
        create_handler: Arc<CreateSlotHandler>,
        update_handler: Arc<UpdateSlotHandler>,
        delete_handler: Arc<DeleteSlotHandler>,
        list_handler: Arc<ListTutorSlotsHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            delete_handler,
            list_handler,
        }
    }
}

/// POST /api/availability - publish a slot
pub async fn create_slot(
    State(handlers): State<AvailabilityHandlers>,
    Json(req): Json<CreateSlotRequest>,
) -> Response {
    let tutor_id = match TutorId::new(req.tutor_id) {
        Ok(id) => id,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(e.to_string())))
                .into_response()
        }
    };

    let cmd = CreateSlotCommand {
        tutor_id,
        start_time: Timestamp::from_datetime(req.start_time),
        end_time: Timestamp::from_datetime(req.end_time),
        is_recurring: req.is_recurring,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(slot) => (StatusCode::CREATED, Json(SlotResponse::from(slot))).into_response(),
        Err(e) => availability_error(e),
    }
}

/// GET /api/availability/tutor/:tutor_id - list a tutor's slots
pub async fn list_tutor_slots(
    State(handlers): State<AvailabilityHandlers>,
    Path(tutor_id): Path<String>,
) -> Response {
    let tutor_id = match TutorId::new(tutor_id) {
        Ok(id) => id,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(e.to_string())))
                .into_response()
        }
    };

    match handlers
        .list_handler
        .handle(ListTutorSlotsQuery { tutor_id })
        .await
    {
        Ok(slots) => {
            let body: Vec<SlotResponse> = slots.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => availability_error(e),
    }
}

/// PUT /api/availability/:slot_id - replace a slot
pub async fn update_slot(
    State(handlers): State<AvailabilityHandlers>,
    Path(slot_id): Path<String>,
    Json(req): Json<UpdateSlotRequest>,
) -> Response {
    let slot_id = match slot_id.parse::<SlotId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid slot ID")),
            )
                .into_response()
        }
    };

    let cmd = UpdateSlotCommand {
        slot_id,
        start_time: Timestamp::from_datetime(req.start_time),
        end_time: Timestamp::from_datetime(req.end_time),
        is_recurring: req.is_recurring,
        status: req.status,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(slot) => (StatusCode::OK, Json(SlotResponse::from(slot))).into_response(),
        Err(e) => availability_error(e),
    }
}

/// DELETE /api/availability/:slot_id - withdraw a slot
pub async fn delete_slot(
    State(handlers): State<AvailabilityHandlers>,
    Path(slot_id): Path<String>,
) -> Response {
    let slot_id = match slot_id.parse::<SlotId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid slot ID")),
            )
                .into_response()
        }
    };

    match handlers.delete_handler.handle(DeleteSlotCommand { slot_id }).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => availability_error(e),
    }
}

fn availability_error(error: AvailabilityError) -> Response {
    let code = error.code();
    (
        status_for(code),
        Json(ErrorResponse::new(code, error.message())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SlotId;

    #[test]
    fn not_found_maps_to_404() {
        let response = availability_error(AvailabilityError::not_found(SlotId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = availability_error(AvailabilityError::infrastructure("db down"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
