//! SessionStatus enum for the session lifecycle state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a tutoring session.
///
/// `Scheduled` and `Rescheduled` are the active states that count
/// toward double-booking checks. `Canceled` and `Completed` are
/// terminal: no field mutation is permitted afterward, and the
/// session no longer blocks its time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Scheduled,
    Rescheduled,
    Canceled,
    Completed,
}

impl SessionStatus {
    /// Returns true if the session counts toward conflict checks.
    pub fn is_active(&self) -> bool {
        matches!(self, SessionStatus::Scheduled | SessionStatus::Rescheduled)
    }
}

impl StateMachine for SessionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        // A rescheduled session may be rescheduled again.
        matches!(
            (self, target),
            (Scheduled, Rescheduled)
                | (Scheduled, Canceled)
                | (Scheduled, Completed)
                | (Rescheduled, Rescheduled)
                | (Rescheduled, Canceled)
                | (Rescheduled, Completed)
        )
    }

    fn is_terminal(&self) -> bool {
        !self.is_active()
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Scheduled => "Scheduled",
            SessionStatus::Rescheduled => "Rescheduled",
            SessionStatus::Canceled => "Canceled",
            SessionStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_scheduled() {
        assert_eq!(SessionStatus::default(), SessionStatus::Scheduled);
    }

    #[test]
    fn active_states_count_toward_conflicts() {
        assert!(SessionStatus::Scheduled.is_active());
        assert!(SessionStatus::Rescheduled.is_active());
        assert!(!SessionStatus::Canceled.is_active());
        assert!(!SessionStatus::Completed.is_active());
    }

    #[test]
    fn scheduled_can_move_to_every_other_state() {
        let from = SessionStatus::Scheduled;
        assert!(from.can_transition_to(&SessionStatus::Rescheduled));
        assert!(from.can_transition_to(&SessionStatus::Canceled));
        assert!(from.can_transition_to(&SessionStatus::Completed));
    }

    #[test]
    fn rescheduled_can_be_rescheduled_again() {
        assert!(SessionStatus::Rescheduled.can_transition_to(&SessionStatus::Rescheduled));
    }

    #[test]
    fn terminal_states_permit_nothing() {
        for terminal in [SessionStatus::Canceled, SessionStatus::Completed] {
            assert!(terminal.is_terminal());
            for target in [
                SessionStatus::Scheduled,
                SessionStatus::Rescheduled,
                SessionStatus::Canceled,
                SessionStatus::Completed,
            ] {
                assert!(!terminal.can_transition_to(&target));
            }
        }
    }

    #[test]
    fn scheduled_cannot_return_to_scheduled() {
        assert!(!SessionStatus::Scheduled.can_transition_to(&SessionStatus::Scheduled));
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Rescheduled).unwrap(),
            "\"rescheduled\""
        );
        let status: SessionStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, SessionStatus::Completed);
    }
}
