//! UpdateLogisticsHandler - updates meeting link and location.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Command to replace a session's logistics fields.
#[derive(Debug, Clone)]
pub struct UpdateLogisticsCommand {
    pub session_id: SessionId,
    pub meeting_link: Option<String>,
    pub location: Option<String>,
}

/// Handler for logistics updates. The fields are advisory, so no
/// calendar locks are involved.
pub struct UpdateLogisticsHandler {
    repository: Arc<dyn SessionRepository>,
}

impl UpdateLogisticsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateLogisticsCommand) -> Result<Session, SessionError> {
        let mut session = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SessionError::NotFound(cmd.session_id))?;

        session.update_logistics(cmd.meeting_link, cmd.location)?;
        self.repository.update(&session).await?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionRepository;
    use crate::domain::foundation::{StudentId, TimeRange, Timestamp, TutorId};
    use crate::domain::session::SessionMode;

    async fn seeded() -> (Arc<InMemorySessionRepository>, SessionId) {
        let repo = Arc::new(InMemorySessionRepository::new());
        let window = TimeRange::new(
            Timestamp::parse_rfc3339("2024-03-01T10:00:00Z").unwrap(),
            Timestamp::parse_rfc3339("2024-03-01T11:00:00Z").unwrap(),
        )
        .unwrap();
        let session = Session::schedule(
            SessionId::new(),
            StudentId::new("S1").unwrap(),
            TutorId::new("T1").unwrap(),
            "topic".to_string(),
            window,
            60,
            SessionMode::Online,
            Some("https://meet.example/old".to_string()),
            None,
        )
        .unwrap();
        repo.save(&session).await.unwrap();
        (repo, *session.id())
    }

    #[tokio::test]
    async fn replaces_logistics_fields() {
        let (repo, id) = seeded().await;
        let handler = UpdateLogisticsHandler::new(repo.clone());

        let session = handler
            .handle(UpdateLogisticsCommand {
                session_id: id,
                meeting_link: Some("https://meet.example/new".to_string()),
                location: None,
            })
            .await
            .unwrap();

        assert_eq!(session.meeting_link(), Some("https://meet.example/new"));
    }

    #[tokio::test]
    async fn fails_on_terminal_session() {
        let (repo, id) = seeded().await;
        let mut stored = repo.find_by_id(&id).await.unwrap().unwrap();
        stored.complete().unwrap();
        repo.update(&stored).await.unwrap();

        let handler = UpdateLogisticsHandler::new(repo);
        let result = handler
            .handle(UpdateLogisticsCommand {
                session_id: id,
                meeting_link: None,
                location: Some("Room 5".to_string()),
            })
            .await;

        assert!(matches!(result, Err(SessionError::Terminal { .. })));
    }
}
