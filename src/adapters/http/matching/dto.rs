//! HTTP DTOs for matching endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::MatchingStatus;
use crate::domain::matching::MatchingRequest;

/// Request to raise a matching request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequestRequest {
    pub student_id: String,
    pub tutor_id: String,
    pub subject: String,
    /// Candidate start instants in preference order.
    #[serde(default)]
    pub preferred_time_slots: Vec<DateTime<Utc>>,
}

/// Matching request representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct MatchingRequestResponse {
    pub request_id: String,
    pub student_id: String,
    pub tutor_id: String,
    pub subject: String,
    pub preferred_time_slots: Vec<String>,
    pub status: MatchingStatus,
    pub created_date: String,
}

impl From<MatchingRequest> for MatchingRequestResponse {
    fn from(request: MatchingRequest) -> Self {
        Self {
            request_id: request.id().to_string(),
            student_id: request.student_id().to_string(),
            tutor_id: request.tutor_id().to_string(),
            subject: request.subject().to_string(),
            preferred_time_slots: request
                .preferred_time_slots()
                .iter()
                .map(|t| t.as_datetime().to_rfc3339())
                .collect(),
            status: request.status(),
            created_date: request.created_date().as_datetime().to_rfc3339(),
        }
    }
}
