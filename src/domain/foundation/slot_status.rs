//! SlotStatus enum for availability slot bookkeeping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an availability slot.
///
/// Slots are advisory; their status carries no scheduling authority.
/// A slot becomes `Booked` when an integration links it to a session
/// and `Canceled` when the tutor withdraws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    #[default]
    Open,
    Booked,
    Canceled,
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SlotStatus::Open => "Open",
            SlotStatus::Booked => "Booked",
            SlotStatus::Canceled => "Canceled",
        };
        write!(f, "{}", s)
    }
}
