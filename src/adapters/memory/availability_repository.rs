//! In-memory implementation of AvailabilityRepository.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::availability::AvailabilitySlot;
use crate::domain::foundation::{DomainError, ErrorCode, SlotId, TutorId};
use crate::ports::AvailabilityRepository;

/// Vec-backed slot store; insertion order is the listing order.
#[derive(Default)]
pub struct InMemoryAvailabilityRepository {
    slots: RwLock<Vec<AvailabilitySlot>>,
}

impl InMemoryAvailabilityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AvailabilityRepository for InMemoryAvailabilityRepository {
    async fn save(&self, slot: &AvailabilitySlot) -> Result<(), DomainError> {
        let mut slots = self.slots.write().expect("slot store poisoned");
        if slots.iter().any(|s| s.id() == slot.id()) {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Duplicate slot id: {}", slot.id()),
            ));
        }
        slots.push(slot.clone());
        Ok(())
    }

    async fn update(&self, slot: &AvailabilitySlot) -> Result<(), DomainError> {
        let mut slots = self.slots.write().expect("slot store poisoned");
        match slots.iter().position(|s| s.id() == slot.id()) {
            Some(pos) => {
                slots[pos] = slot.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SlotNotFound,
                format!("Availability slot not found: {}", slot.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &SlotId) -> Result<Option<AvailabilitySlot>, DomainError> {
        let slots = self.slots.read().expect("slot store poisoned");
        Ok(slots.iter().find(|s| s.id() == id).cloned())
    }

    async fn find_by_tutor(
        &self,
        tutor_id: &TutorId,
    ) -> Result<Vec<AvailabilitySlot>, DomainError> {
        let slots = self.slots.read().expect("slot store poisoned");
        Ok(slots
            .iter()
            .filter(|s| s.tutor_id() == tutor_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &SlotId) -> Result<(), DomainError> {
        // Idempotent: deleting an absent slot is a no-op.
        let mut slots = self.slots.write().expect("slot store poisoned");
        slots.retain(|s| s.id() != id);
        Ok(())
    }
}
