//! SubmitEvaluationHandler - create-or-revise an evaluation.
//!
//! The find-existing-or-create sequence is serialized per session id,
//! so concurrent submissions for one session collapse into a single
//! record: the first creates it, later ones revise it in place.

use std::sync::Arc;

use crate::application::locks::KeyedLocks;
use crate::domain::evaluation::{Evaluation, EvaluationError};
use crate::domain::foundation::{EvaluationId, Score, SessionId, StudentId};
use crate::ports::{Clock, EvaluationRepository, SessionRepository};

/// Command to submit an evaluation for a session.
#[derive(Debug, Clone)]
pub struct SubmitEvaluationCommand {
    pub session_id: SessionId,
    pub student_id: StudentId,
    pub rating_quality: u8,
    pub satisfaction_level: u8,
    pub comment: String,
}

/// Handler for evaluation submission.
///
/// Consults the session store only to confirm the referenced session
/// exists; session status is deliberately not checked.
pub struct SubmitEvaluationHandler {
    evaluations: Arc<dyn EvaluationRepository>,
    sessions: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
    locks: Arc<KeyedLocks>,
}

impl SubmitEvaluationHandler {
    pub fn new(
        evaluations: Arc<dyn EvaluationRepository>,
        sessions: Arc<dyn SessionRepository>,
        clock: Arc<dyn Clock>,
        locks: Arc<KeyedLocks>,
    ) -> Self {
        Self {
            evaluations,
            sessions,
            clock,
            locks,
        }
    }

    pub async fn handle(&self, cmd: SubmitEvaluationCommand) -> Result<Evaluation, EvaluationError> {
        let rating_quality = Score::try_new("rating_quality", cmd.rating_quality)?;
        let satisfaction_level = Score::try_new("satisfaction_level", cmd.satisfaction_level)?;

        if !self.sessions.exists(&cmd.session_id).await? {
            return Err(EvaluationError::SessionMissing(cmd.session_id));
        }

        let key = format!("evaluation:{}", cmd.session_id);
        let _guard = self.locks.acquire(&key).await;

        let submitted_date = self.clock.now();
        let existing = self.evaluations.find_by_session(&cmd.session_id).await?;

        match existing.into_iter().next() {
            Some(mut evaluation) => {
                evaluation.revise(
                    cmd.student_id,
                    rating_quality,
                    satisfaction_level,
                    cmd.comment,
                    submitted_date,
                );
                self.evaluations.update(&evaluation).await?;
                Ok(evaluation)
            }
            None => {
                let evaluation = Evaluation::new(
                    EvaluationId::new(),
                    cmd.session_id,
                    cmd.student_id,
                    rating_quality,
                    satisfaction_level,
                    cmd.comment,
                    submitted_date,
                );
                self.evaluations.save(&evaluation).await?;
                Ok(evaluation)
            }
        }
    }
}
