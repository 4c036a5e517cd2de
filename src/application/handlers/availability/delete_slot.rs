//! DeleteSlotHandler - withdraws an availability window.

use std::sync::Arc;

use crate::domain::availability::AvailabilityError;
use crate::domain::foundation::SlotId;
use crate::ports::AvailabilityRepository;

/// Command to delete a slot.
#[derive(Debug, Clone)]
pub struct DeleteSlotCommand {
    pub slot_id: SlotId,
}

/// Handler for slot deletion. Deletion is idempotent: removing an
/// absent slot succeeds silently.
pub struct DeleteSlotHandler {
    repository: Arc<dyn AvailabilityRepository>,
}

impl DeleteSlotHandler {
    pub fn new(repository: Arc<dyn AvailabilityRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteSlotCommand) -> Result<(), AvailabilityError> {
        self.repository.delete(&cmd.slot_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAvailabilityRepository;
    use crate::domain::availability::AvailabilitySlot;
    use crate::domain::foundation::{TimeRange, Timestamp, TutorId};

    #[tokio::test]
    async fn deletes_existing_slot() {
        let repo = Arc::new(InMemoryAvailabilityRepository::new());
        let slot = AvailabilitySlot::new(
            SlotId::new(),
            TutorId::new("tutor-1").unwrap(),
            TimeRange::new(
                Timestamp::parse_rfc3339("2024-03-01T10:00:00Z").unwrap(),
                Timestamp::parse_rfc3339("2024-03-01T12:00:00Z").unwrap(),
            )
            .unwrap(),
            false,
        );
        repo.save(&slot).await.unwrap();

        let handler = DeleteSlotHandler::new(repo.clone());
        handler
            .handle(DeleteSlotCommand { slot_id: *slot.id() })
            .await
            .unwrap();

        assert!(repo.find_by_id(slot.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleting_absent_slot_succeeds() {
        let handler = DeleteSlotHandler::new(Arc::new(InMemoryAvailabilityRepository::new()));
        let result = handler
            .handle(DeleteSlotCommand {
                slot_id: SlotId::new(),
            })
            .await;
        assert!(result.is_ok());
    }
}
