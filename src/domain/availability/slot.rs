//! AvailabilitySlot aggregate.
//!
//! Slots are advisory windows a tutor publishes. They carry no
//! scheduling authority: the binding conflict check runs against
//! sessions, and a tutor may publish overlapping windows freely.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SlotId, SlotStatus, TimeRange, TutorId};

/// A tutor's published availability window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    id: SlotId,
    tutor_id: TutorId,
    window: TimeRange,
    is_recurring: bool,
    status: SlotStatus,
}

impl AvailabilitySlot {
    /// Creates a new open slot.
    ///
    /// The window is already validated (`TimeRange` cannot be empty or
    /// inverted), so construction cannot fail.
    pub fn new(id: SlotId, tutor_id: TutorId, window: TimeRange, is_recurring: bool) -> Self {
        Self {
            id,
            tutor_id,
            window,
            is_recurring,
            status: SlotStatus::Open,
        }
    }

    /// Reconstitute a slot from persistence (no validation).
    pub fn reconstitute(
        id: SlotId,
        tutor_id: TutorId,
        window: TimeRange,
        is_recurring: bool,
        status: SlotStatus,
    ) -> Self {
        Self {
            id,
            tutor_id,
            window,
            is_recurring,
            status,
        }
    }

    pub fn id(&self) -> &SlotId {
        &self.id
    }

    pub fn tutor_id(&self) -> &TutorId {
        &self.tutor_id
    }

    pub fn window(&self) -> &TimeRange {
        &self.window
    }

    pub fn is_recurring(&self) -> bool {
        self.is_recurring
    }

    pub fn status(&self) -> SlotStatus {
        self.status
    }

    /// Replaces window, recurrence, and status in one step.
    ///
    /// Updates are all-or-nothing: callers never observe a slot with
    /// half of an update applied.
    pub fn replace(&mut self, window: TimeRange, is_recurring: bool, status: SlotStatus) {
        self.window = window;
        self.is_recurring = is_recurring;
        self.status = status;
    }
}
