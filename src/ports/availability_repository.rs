//! Availability slot repository port.

use async_trait::async_trait;

use crate::domain::availability::AvailabilitySlot;
use crate::domain::foundation::{DomainError, SlotId, TutorId};

/// Storage capability for availability slots.
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Persists a new slot.
    async fn save(&self, slot: &AvailabilitySlot) -> Result<(), DomainError>;

    /// Replaces an existing slot.
    ///
    /// # Errors
    ///
    /// - `SlotNotFound` if the slot doesn't exist
    async fn update(&self, slot: &AvailabilitySlot) -> Result<(), DomainError>;

    /// Finds a slot by its ID. Returns `None` when absent.
    async fn find_by_id(&self, id: &SlotId) -> Result<Option<AvailabilitySlot>, DomainError>;

    /// All slots published by a tutor, in insertion order.
    async fn find_by_tutor(&self, tutor_id: &TutorId)
        -> Result<Vec<AvailabilitySlot>, DomainError>;

    /// Removes a slot. Deleting an absent slot is a no-op.
    async fn delete(&self, id: &SlotId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AvailabilityRepository) {}
    }
}
