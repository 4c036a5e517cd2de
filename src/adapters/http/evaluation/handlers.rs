//! HTTP handlers for evaluation endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{status_for, ErrorResponse};
use crate::application::handlers::evaluation::{
    GetEvaluationHandler, GetEvaluationQuery, ListSessionEvaluationsHandler,
    ListSessionEvaluationsQuery, ListStudentEvaluationsHandler, ListStudentEvaluationsQuery,
    SubmitEvaluationCommand, SubmitEvaluationHandler,
};
use crate::domain::evaluation::EvaluationError;
use crate::domain::foundation::{EvaluationId, SessionId, StudentId};

use super::dto::{EvaluationResponse, SubmitEvaluationRequest};

/// Handler state for the evaluation routes.
#[derive(Clone)]
pub struct EvaluationHandlers {
    submit_handler: Arc<SubmitEvaluationHandler>,
    get_handler: Arc<GetEvaluationHandler>,
    session_list_handler: Arc<ListSessionEvaluationsHandler>,
    student_list_handler: Arc<ListStudentEvaluationsHandler>,
}

impl EvaluationHandlers {
    pub fn new(
        submit_handler: Arc<SubmitEvaluationHandler>,
        get_handler: Arc<GetEvaluationHandler>,
        session_list_handler: Arc<ListSessionEvaluationsHandler>,
        student_list_handler: Arc<ListStudentEvaluationsHandler>,
    ) -> Self {
        Self {
            submit_handler,
            get_handler,
            session_list_handler,
            student_list_handler,
        }
    }
}

/// POST /api/evaluations - submit or revise an evaluation
pub async fn submit_evaluation(
    State(handlers): State<EvaluationHandlers>,
    Json(req): Json<SubmitEvaluationRequest>,
) -> Response {
    let session_id = match req.session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid session ID")),
            )
                .into_response()
        }
    };
    let student_id = match StudentId::new(req.student_id) {
        Ok(id) => id,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(e.to_string())))
                .into_response()
        }
    };

    let cmd = SubmitEvaluationCommand {
        session_id,
        student_id,
        rating_quality: req.rating_quality,
        satisfaction_level: req.satisfaction_level,
        comment: req.comment,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(evaluation) => {
            (StatusCode::OK, Json(EvaluationResponse::from(evaluation))).into_response()
        }
        Err(e) => evaluation_error(e),
    }
}

/// GET /api/evaluations/:evaluation_id - fetch one evaluation
pub async fn get_evaluation(
    State(handlers): State<EvaluationHandlers>,
    Path(evaluation_id): Path<String>,
) -> Response {
    let evaluation_id = match evaluation_id.parse::<EvaluationId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid evaluation ID")),
            )
                .into_response()
        }
    };

    match handlers
        .get_handler
        .handle(GetEvaluationQuery { evaluation_id })
        .await
    {
        Ok(Some(evaluation)) => {
            (StatusCode::OK, Json(EvaluationResponse::from(evaluation))).into_response()
        }
        Ok(None) => evaluation_error(EvaluationError::not_found(evaluation_id)),
        Err(e) => evaluation_error(e),
    }
}

/// GET /api/evaluations/session/:session_id - list a session's evaluations
pub async fn list_session_evaluations(
    State(handlers): State<EvaluationHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid session ID")),
            )
                .into_response()
        }
    };

    match handlers
        .session_list_handler
        .handle(ListSessionEvaluationsQuery { session_id })
        .await
    {
        Ok(evaluations) => {
            let body: Vec<EvaluationResponse> = evaluations.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => evaluation_error(e),
    }
}

/// GET /api/evaluations/student/:student_id - list a student's evaluations
pub async fn list_student_evaluations(
    State(handlers): State<EvaluationHandlers>,
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
        .handle(ListStudentEvaluationsQuery { student_id })
        .await
    {
        Ok(evaluations) => {
            let body: Vec<EvaluationResponse> = evaluations.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => evaluation_error(e),
    }
}

fn evaluation_error(error: EvaluationError) -> Response {
    let code = error.code();
    (
        status_for(code),
        Json(ErrorResponse::new(code, error.message())),
    )
        .into_response()
}
