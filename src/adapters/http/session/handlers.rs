//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{status_for, ErrorResponse};
use crate::application::handlers::session::{
    CancelSessionCommand, CancelSessionHandler, CompleteSessionCommand, CompleteSessionHandler,
    GetSessionHandler, GetSessionQuery, ListAllSessionsHandler, ListStudentSessionsHandler,
    ListStudentSessionsQuery, ListTutorSessionsHandler, ListTutorSessionsQuery,
    RescheduleSessionCommand, RescheduleSessionHandler, ScheduleSessionCommand,
    ScheduleSessionHandler, UpdateLogisticsCommand, UpdateLogisticsHandler,
};
use crate::domain::foundation::{SessionId, StudentId, Timestamp, TutorId};
use crate::domain::session::SessionError;

use super::dto::{
    RescheduleSessionRequest, ScheduleSessionRequest, SessionResponse, UpdateLogisticsRequest,
};

/// Handler state for the session routes.
#[derive(Clone)]
pub struct SessionHandlers {
    schedule_handler: Arc<ScheduleSessionHandler>,
    reschedule_handler: Arc<RescheduleSessionHandler>,
    cancel_handler: Arc<CancelSessionHandler>,
    complete_handler: Arc<CompleteSessionHandler>,
    logistics_handler: Arc<UpdateLogisticsHandler>,
    get_handler: Arc<GetSessionHandler>,
    student_list_handler: Arc<ListStudentSessionsHandler>,
    tutor_list_handler: Arc<ListTutorSessionsHandler>,
    list_all_handler: Arc<ListAllSessionsHandler>,
}

impl SessionHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        schedule_handler: Arc<ScheduleSessionHandler>,
        reschedule_handler: Arc<RescheduleSessionHandler>,
        cancel_handler: Arc<CancelSessionHandler>,
        complete_handler: Arc<CompleteSessionHandler>,
        logistics_handler: Arc<UpdateLogisticsHandler>,
        get_handler: Arc<GetSessionHandler>,
        student_list_handler: Arc<ListStudentSessionsHandler>,
        tutor_list_handler: Arc<ListTutorSessionsHandler>,
        list_all_handler: Arc<ListAllSessionsHandler>,
    ) -> Self {
        Self {
            schedule_handler,
            reschedule_handler,
            cancel_handler,
            complete_handler,
            logistics_handler,
            get_handler,
            student_list_handler,
            tutor_list_handler,
            list_all_handler,
        }
    }
}

/// POST /api/sessions/schedule - book a session
pub async fn schedule_session(
    State(handlers): State<SessionHandlers>,
    Json(req): Json<ScheduleSessionRequest>,
) -> Response {
    let (student_id, tutor_id) = match (StudentId::new(req.student_id), TutorId::new(req.tutor_id))
    {
        (Ok(s), Ok(t)) => (s, t),
        (Err(e), _) | (_, Err(e)) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(e.to_string())))
                .into_response()
        }
    };

    let cmd = ScheduleSessionCommand {
        student_id,
        tutor_id,
        topic: req.topic,
        start_time: Timestamp::from_datetime(req.start_time),
        end_time: Timestamp::from_datetime(req.end_time),
        duration_minutes: req.duration_minutes,
        mode: req.mode,
        meeting_link: req.meeting_link,
        location: req.location,
    };

    match handlers.schedule_handler.handle(cmd).await {
        Ok(session) => (StatusCode::CREATED, Json(SessionResponse::from(session))).into_response(),
        Err(e) => session_error(e),
    }
}

/// POST /api/sessions/reschedule/:session_id - move a session
pub async fn reschedule_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<RescheduleSessionRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = RescheduleSessionCommand {
        session_id,
        new_start_time: Timestamp::from_datetime(req.new_start_time),
        new_end_time: Timestamp::from_datetime(req.new_end_time),
    };

    match handlers.reschedule_handler.handle(cmd).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(session))).into_response(),
        Err(e) => session_error(e),
    }
}

/// POST /api/sessions/cancel/:session_id - cancel a session
pub async fn cancel_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .cancel_handler
        .handle(CancelSessionCommand { session_id })
        .await
    {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(session))).into_response(),
        Err(e) => session_error(e),
    }
}

/// POST /api/sessions/complete/:session_id - mark a session held
pub async fn complete_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .complete_handler
        .handle(CompleteSessionCommand { session_id })
        .await
    {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(session))).into_response(),
        Err(e) => session_error(e),
    }
}

/// PUT /api/sessions/:session_id/logistics - update link/location
pub async fn update_logistics(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<UpdateLogisticsRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateLogisticsCommand {
        session_id,
        meeting_link: req.meeting_link,
        location: req.location,
    };

    match handlers.logistics_handler.handle(cmd).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(session))).into_response(),
        Err(e) => session_error(e),
    }
}

/// GET /api/sessions/:session_id - fetch one session
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(Some(session)) => (StatusCode::OK, Json(SessionResponse::from(session))).into_response(),
        Ok(None) => session_error(SessionError::not_found(session_id)),
        Err(e) => session_error(e),
    }
}

/// GET /api/sessions - list every session
pub async fn list_all_sessions(State(handlers): State<SessionHandlers>) -> Response {
    match handlers.list_all_handler.handle().await {
        Ok(sessions) => {
            let body: Vec<SessionResponse> = sessions.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => session_error(e),
    }
}

/// GET /api/sessions/student/:student_id - list a student's sessions
pub async fn list_student_sessions(
    State(handlers): State<SessionHandlers>,
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
        .handle(ListStudentSessionsQuery { student_id })
        .await
    {
        Ok(sessions) => {
            let body: Vec<SessionResponse> = sessions.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => session_error(e),
    }
}

/// GET /api/sessions/tutor/:tutor_id - list a tutor's sessions
pub async fn list_tutor_sessions(
    State(handlers): State<SessionHandlers>,
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
        .handle(ListTutorSessionsQuery { tutor_id })
        .await
    {
        Ok(sessions) => {
            let body: Vec<SessionResponse> = sessions.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => session_error(e),
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

fn session_error(error: SessionError) -> Response {
    let code = error.code();
    (
        status_for(code),
        Json(ErrorResponse::new(code, error.message())),
    )
        .into_response()
}
