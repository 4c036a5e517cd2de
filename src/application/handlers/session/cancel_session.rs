//! CancelSessionHandler - cancels a session.
//!
//! Cancellation only shrinks the set of active sessions, so it takes
//! no calendar locks: a concurrent schedule that misses the
//! cancellation merely sees a conflict that is about to disappear.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Command to cancel a session.
#[derive(Debug, Clone)]
pub struct CancelSessionCommand {
    pub session_id: SessionId,
}

/// Handler for session cancellation.
pub struct CancelSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CancelSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CancelSessionCommand) -> Result<Session, SessionError> {
        let mut session = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SessionError::NotFound(cmd.session_id))?;

        session.cancel()?;
        self.repository.update(&session).await?;
        Ok(session)
    }
}
