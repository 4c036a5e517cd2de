//! CreateSlotHandler - publishes a new availability window.

use std::sync::Arc;

use crate::domain::availability::{AvailabilityError, AvailabilitySlot};
use crate::domain::foundation::{SlotId, TimeRange, Timestamp, TutorId};
use crate::ports::AvailabilityRepository;

/// Command to publish an availability slot.
#[derive(Debug, Clone)]
pub struct CreateSlotCommand {
    pub tutor_id: TutorId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub is_recurring: bool,
}

/// Handler for slot creation.
pub struct CreateSlotHandler {
    repository: Arc<dyn AvailabilityRepository>,
}

impl CreateSlotHandler {
    pub fn new(repository: Arc<dyn AvailabilityRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateSlotCommand) -> Result<AvailabilitySlot, AvailabilityError> {
        let window = TimeRange::new(cmd.start_time, cmd.end_time)?;
        let slot = AvailabilitySlot::new(SlotId::new(), cmd.tutor_id, window, cmd.is_recurring);

        self.repository.save(&slot).await?;
        Ok(slot)
    }
}
