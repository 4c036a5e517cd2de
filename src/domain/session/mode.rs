//! Delivery mode for a tutoring session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a session is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    Online,
    InPerson,
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionMode::Online => "Online",
            SessionMode::InPerson => "In person",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&SessionMode::InPerson).unwrap(),
            "\"in_person\""
        );
        let mode: SessionMode = serde_json::from_str("\"online\"").unwrap();
        assert_eq!(mode, SessionMode::Online);
    }
}
