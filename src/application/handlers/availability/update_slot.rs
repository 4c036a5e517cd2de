//! UpdateSlotHandler - replaces a slot's window, recurrence, and status.

use std::sync::Arc;

use crate::domain::availability::{AvailabilityError, AvailabilitySlot};
use crate::domain::foundation::{SlotId, SlotStatus, TimeRange, Timestamp};
use crate::ports::AvailabilityRepository;

/// Command to update a slot. All fields are replaced atomically.
#[derive(Debug, Clone)]
pub struct UpdateSlotCommand {
    pub slot_id: SlotId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub is_recurring: bool,
    pub status: SlotStatus,
}

/// Handler for slot updates.
pub struct UpdateSlotHandler {
    repository: Arc<dyn AvailabilityRepository>,
}

impl UpdateSlotHandler {
    pub fn new(repository: Arc<dyn AvailabilityRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateSlotCommand) -> Result<AvailabilitySlot, AvailabilityError> {
        let window = TimeRange::new(cmd.start_time, cmd.end_time)?;

        let mut slot = self
            .repository
            .find_by_id(&cmd.slot_id)
            .await?
            .ok_or(AvailabilityError::NotFound(cmd.slot_id))?;

        slot.replace(window, cmd.is_recurring, cmd.status);
        self.repository.update(&slot).await?;
        Ok(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAvailabilityRepository;
    use crate::domain::foundation::TutorId;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse_rfc3339(s).unwrap()
    }

    async fn seeded_repo() -> (Arc<InMemoryAvailabilityRepository>, SlotId) {
        let repo = Arc::new(InMemoryAvailabilityRepository::new());
        let slot = AvailabilitySlot::new(
            SlotId::new(),
            TutorId::new("tutor-1").unwrap(),
            TimeRange::new(ts("2024-03-01T10:00:00Z"), ts("2024-03-01T12:00:00Z")).unwrap(),
            false,
        );
        repo.save(&slot).await.unwrap();
        (repo, *slot.id())
    }

    #[tokio::test]
    async fn replaces_all_fields() {
        let (repo, slot_id) = seeded_repo().await;
        let handler = UpdateSlotHandler::new(repo.clone());

        let updated = handler
            .handle(UpdateSlotCommand {
                slot_id,
                start_time: ts("2024-03-02T09:00:00Z"),
                end_time: ts("2024-03-02T11:00:00Z"),
                is_recurring: true,
                status: SlotStatus::Booked,
            })
            .await
            .unwrap();

        assert_eq!(updated.status(), SlotStatus::Booked);
        assert!(updated.is_recurring());

        let stored = repo.find_by_id(&slot_id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn missing_slot_fails_with_not_found() {
        let handler = UpdateSlotHandler::new(Arc::new(InMemoryAvailabilityRepository::new()));

        let result = handler
            .handle(UpdateSlotCommand {
                slot_id: SlotId::new(),
                start_time: ts("2024-03-02T09:00:00Z"),
                end_time: ts("2024-03-02T11:00:00Z"),
                is_recurring: false,
                status: SlotStatus::Open,
            })
            .await;

        assert!(matches!(result, Err(AvailabilityError::NotFound(_))));
    }

    #[tokio::test]
    async fn invalid_interval_leaves_slot_untouched() {
        let (repo, slot_id) = seeded_repo().await;
        let handler = UpdateSlotHandler::new(repo.clone());

        let result = handler
            .handle(UpdateSlotCommand {
                slot_id,
                start_time: ts("2024-03-02T11:00:00Z"),
                end_time: ts("2024-03-02T09:00:00Z"),
                is_recurring: true,
                status: SlotStatus::Canceled,
            })
            .await;
        assert!(result.is_err());

        let stored = repo.find_by_id(&slot_id).await.unwrap().unwrap();
        assert_eq!(stored.status(), SlotStatus::Open);
        assert!(!stored.is_recurring());
    }
}
