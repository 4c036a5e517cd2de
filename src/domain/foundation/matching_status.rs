//! MatchingStatus enum for the matching-request state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Status of a matching request.
///
/// Requests start `Pending` and are decided exactly once; both
/// decisions are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchingStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl MatchingStatus {
    /// Returns true once the request has been approved or rejected.
    pub fn is_decided(&self) -> bool {
        !matches!(self, MatchingStatus::Pending)
    }
}

impl StateMachine for MatchingStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use MatchingStatus::*;
        matches!((self, target), (Pending, Accepted) | (Pending, Rejected))
    }

    fn is_terminal(&self) -> bool {
        self.is_decided()
    }
}

impl fmt::Display for MatchingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchingStatus::Pending => "Pending",
            MatchingStatus::Accepted => "Accepted",
            MatchingStatus::Rejected => "Rejected",
        };
        write!(f, "{}", s)
    }
}
