//! Evaluation aggregate.
//!
//! At most one live evaluation exists per session. A second submission
//! for the same session revises the existing record in place:
//! last-write-wins on content, first-write-wins on identity. The
//! uniqueness rule is enforced by the ledger, not by a storage index.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EvaluationId, Score, SessionId, StudentId, Timestamp};

/// A student's evaluation of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    id: EvaluationId,
    session_id: SessionId,
    student_id: StudentId,
    rating_quality: Score,
    satisfaction_level: Score,
    comment: String,
    submitted_date: Timestamp,
}

impl Evaluation {
    /// Creates the first evaluation for a session.
    ///
    /// Scores arrive already validated (`Score` cannot hold an
    /// out-of-range value).
    pub fn new(
        id: EvaluationId,
        session_id: SessionId,
        student_id: StudentId,
        rating_quality: Score,
        satisfaction_level: Score,
        comment: String,
        submitted_date: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            student_id,
            rating_quality,
            satisfaction_level,
            comment,
            submitted_date,
        }
    }

    /// Reconstitute an evaluation from persistence (no validation).
    pub fn reconstitute(
        id: EvaluationId,
        session_id: SessionId,
        student_id: StudentId,
        rating_quality: Score,
        satisfaction_level: Score,
        comment: String,
        submitted_date: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            student_id,
            rating_quality,
            satisfaction_level,
            comment,
            submitted_date,
        }
    }

    pub fn id(&self) -> &EvaluationId {
        &self.id
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn rating_quality(&self) -> Score {
        self.rating_quality
    }

    pub fn satisfaction_level(&self) -> Score {
        self.satisfaction_level
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn submitted_date(&self) -> &Timestamp {
        &self.submitted_date
    }

    /// Overwrites the mutable fields with a later submission.
    ///
    /// Identity and session linkage are preserved; everything else,
    /// including the submitting student and the submission date, takes
    /// the new value.
    pub fn revise(
        &mut self,
        student_id: StudentId,
        rating_quality: Score,
        satisfaction_level: Score,
        comment: String,
        submitted_date: Timestamp,
    ) {
        self.student_id = student_id;
        self.rating_quality = rating_quality;
        self.satisfaction_level = satisfaction_level;
        self.comment = comment;
        self.submitted_date = submitted_date;
    }
}
