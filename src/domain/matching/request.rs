//! MatchingRequest aggregate.
//!
//! A student asks to be paired with a tutor for a subject. The request
//! is decided exactly once: approved or rejected, both terminal.
//! Approval deliberately does NOT create a session; scheduling is a
//! separate command issued by the caller afterward.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    MatchingStatus, RequestId, StateMachine, StudentId, Timestamp, TutorId,
};

use super::MatchingError;

/// A pairing request from a student to a tutor.
///
/// # Invariants
///
/// - `status` moves Pending -> Accepted | Rejected exactly once
/// - `preferred_time_slots` order is the student's preference rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingRequest {
    id: RequestId,
    student_id: StudentId,
    tutor_id: TutorId,
    subject: String,
    preferred_time_slots: Vec<Timestamp>,
    status: MatchingStatus,
    created_date: Timestamp,
}

impl MatchingRequest {
    /// Creates a new pending request.
    ///
    /// Creation always succeeds: preference slots are advisory and are
    /// not validated against availability.
    pub fn new(
        id: RequestId,
        student_id: StudentId,
        tutor_id: TutorId,
        subject: String,
        preferred_time_slots: Vec<Timestamp>,
        created_date: Timestamp,
    ) -> Self {
        Self {
            id,
            student_id,
            tutor_id,
            subject,
            preferred_time_slots,
            status: MatchingStatus::Pending,
            created_date,
        }
    }

    /// Reconstitute a request from persistence (no validation).
    pub fn reconstitute(
        id: RequestId,
        student_id: StudentId,
        tutor_id: TutorId,
        subject: String,
        preferred_time_slots: Vec<Timestamp>,
        status: MatchingStatus,
        created_date: Timestamp,
    ) -> Self {
        Self {
            id,
            student_id,
            tutor_id,
            subject,
            preferred_time_slots,
            status,
            created_date,
        }
    }

    pub fn id(&self) -> &RequestId {
        &self.id
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn tutor_id(&self) -> &TutorId {
        &self.tutor_id
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn preferred_time_slots(&self) -> &[Timestamp] {
        &self.preferred_time_slots
    }

    pub fn status(&self) -> MatchingStatus {
        self.status
    }

    pub fn created_date(&self) -> &Timestamp {
        &self.created_date
    }

    /// Approves the request.
    ///
    /// # Errors
    ///
    /// `AlreadyDecided` unless the request is still pending.
    pub fn approve(&mut self) -> Result<(), MatchingError> {
        self.decide(MatchingStatus::Accepted)
    }

    /// Rejects the request.
    ///
    /// # Errors
    ///
    /// `AlreadyDecided` unless the request is still pending.
    pub fn reject(&mut self) -> Result<(), MatchingError> {
        self.decide(MatchingStatus::Rejected)
    }

    fn decide(&mut self, target: MatchingStatus) -> Result<(), MatchingError> {
        if !self.status.can_transition_to(&target) {
            return Err(MatchingError::AlreadyDecided {
                id: self.id,
                status: self.status,
            });
        }
        self.status = target;
        Ok(())
    }
}
