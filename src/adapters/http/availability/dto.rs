//! HTTP DTOs for availability endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::availability::AvailabilitySlot;
use crate::domain::foundation::SlotStatus;

/// Request to publish an availability slot.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSlotRequest {
    pub tutor_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub is_recurring: bool,
}

/// Request to update a slot. All fields are required; the update
/// replaces the slot wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSlotRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_recurring: bool,
    pub status: SlotStatus,
}

/// Slot representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SlotResponse {
    pub slot_id: String,
    pub tutor_id: String,
    pub start_time: String,
    pub end_time: String,
    pub is_recurring: bool,
    pub status: SlotStatus,
}

impl From<AvailabilitySlot> for SlotResponse {
    fn from(slot: AvailabilitySlot) -> Self {
        Self {
            slot_id: slot.id().to_string(),
            tutor_id: slot.tutor_id().to_string(),
            start_time: slot.window().start().as_datetime().to_rfc3339(),
            end_time: slot.window().end().as_datetime().to_rfc3339(),
            is_recurring: slot.is_recurring(),
            status: slot.status(),
        }
    }
}
