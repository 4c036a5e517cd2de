//! HTTP handlers for matching endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{status_for, ErrorResponse};
use crate::application::handlers::matching::{
    CreateMatchingRequestCommand, CreateMatchingRequestHandler, DecideMatchingRequestCommand,
    DecideMatchingRequestHandler, ListStudentRequestsHandler, ListStudentRequestsQuery,
    ListTutorRequestsHandler, ListTutorRequestsQuery, MatchDecision,
};
use crate::domain::foundation::{RequestId, StudentId, Timestamp, TutorId};
use crate::domain::matching::MatchingError;

use super::dto::{CreateRequestRequest, MatchingRequestResponse};

/// Handler state for the matching routes.
#[derive(Clone)]
pub struct MatchingHandlers {
    create_handler: Arc<CreateMatchingRequestHandler>,
    decide_handler: Arc<DecideMatchingRequestHandler>,
    student_list_handler: Arc<ListStudentRequestsHandler>,
    tutor_list_handler: Arc<ListTutorRequestsHandler>,
}

impl MatchingHandlers {
    pub fn new(
        create_handler: Arc<CreateMatchingRequestHandler>,
        decide_handler: Arc<DecideMatchingRequestHandler>,
        student_list_handler: Arc<ListStudentRequestsHandler>,
        tutor_list_handler: Arc<ListTutorRequestsHandler>,
    ) -> Self {
        Self {
            create_handler,
            decide_handler,
            student_list_handler,
            tutor_list_handler,
        }
    }
}

/// POST /api/matching/request - raise a pairing request
pub async fn create_request(
    State(handlers): State<MatchingHandlers>,
    Json(req): Json<CreateRequestRequest>,
) -> Response {
    let (student_id, tutor_id) = match (StudentId::new(req.student_id), TutorId::new(req.tutor_id))
    {
        (Ok(s), Ok(t)) => (s, t),
        (Err(e), _) | (_, Err(e)) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(e.to_string())))
                .into_response()
        }
    };

    let cmd = CreateMatchingRequestCommand {
        student_id,
        tutor_id,
        subject: req.subject,
        preferred_time_slots: req
            .preferred_time_slots
            .into_iter()
            .map(Timestamp::from_datetime)
            .collect(),
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(request) => {
            (StatusCode::CREATED, Json(MatchingRequestResponse::from(request))).into_response()
        }
        Err(e) => matching_error(e),
    }
}

/// POST /api/matching/approve/:request_id - approve a request
pub async fn approve_request(
    State(handlers): State<MatchingHandlers>,
    Path(request_id): Path<String>,
) -> Response {
    decide(handlers, request_id, MatchDecision::Approve).await
}

/// POST /api/matching/reject/:request_id - reject a request
pub async fn reject_request(
    State(handlers): State<MatchingHandlers>,
    Path(request_id): Path<String>,
) -> Response {
    decide(handlers, request_id, MatchDecision::Reject).await
}

async fn decide(handlers: MatchingHandlers, request_id: String, decision: MatchDecision) -> Response {
    let request_id = match request_id.parse::<RequestId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid request ID")),
            )
                .into_response()
        }
    };

    match handlers
        .decide_handler
        .handle(DecideMatchingRequestCommand {
            request_id,
            decision,
        })
        .await
    {
        Ok(request) => (StatusCode::OK, Json(MatchingRequestResponse::from(request))).into_response(),
        Err(e) => matching_error(e),
    }
}

/// GET /api/matching/student/:student_id - list a student's requests
pub async fn list_student_requests(
    State(handlers): State<MatchingHandlers>,
    Path(student_id): Path<String>,
) -> Response {
    let student_id = match StudentId::new(student_id) {
        Ok(id) => id,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(e.to_string())))
                .into_response()
        }
    };

    match handlers
        .student_list_handler
        .handle(ListStudentRequestsQuery { student_id })
        .await
    {
        Ok(requests) => {
            let body: Vec<MatchingRequestResponse> = requests.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => matching_error(e),
    }
}

/// GET /api/matching/tutor/:tutor_id - list a tutor's requests
pub async fn list_tutor_requests(
    State(handlers): State<MatchingHandlers>,
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
        .tutor_list_handler
        .handle(ListTutorRequestsQuery { tutor_id })
        .await
    {
        Ok(requests) => {
            let body: Vec<MatchingRequestResponse> = requests.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => matching_error(e),
    }
}

fn matching_error(error: MatchingError) -> Response {
    let code = error.code();
    (
        status_for(code),
        Json(ErrorResponse::new(code, error.message())),
    )
        .into_response()
}
