//! HTTP DTOs for evaluation endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::evaluation::Evaluation;

/// Request to submit (or revise) an evaluation.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitEvaluationRequest {
    pub session_id: String,
    pub student_id: String,
    pub rating_quality: u8,
    pub satisfaction_level: u8,
    #[serde(default)]
    pub comment: String,
}

/// Evaluation representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResponse {
    pub evaluation_id: String,
    pub session_id: String,
    pub student_id: String,
    pub rating_quality: u8,
    pub satisfaction_level: u8,
    pub comment: String,
    pub submitted_date: String,
}

impl From<Evaluation> for EvaluationResponse {
    fn from(evaluation: Evaluation) -> Self {
        Self {
            evaluation_id: evaluation.id().to_string(),
            session_id: evaluation.session_id().to_string(),
            student_id: evaluation.student_id().to_string(),
            rating_quality: evaluation.rating_quality().value(),
            satisfaction_level: evaluation.satisfaction_level().value(),
            comment: evaluation.comment().to_string(),
            submitted_date: evaluation.submitted_date().as_datetime().to_rfc3339(),
        }
    }
}
