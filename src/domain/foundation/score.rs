//! Score value object for evaluation scales (1 to 5).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Bounded integer scale used for `rating_quality` and
/// `satisfaction_level`: 1 (lowest) to 5 (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a Score, returning error if outside 1..=5.
    pub fn try_new(field: &str, value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                field,
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_whole_scale() {
        for v in 1..=5 {
            assert_eq!(Score::try_new("rating_quality", v).unwrap().value(), v);
        }
    }

    #[test]
    fn rejects_zero() {
        assert!(Score::try_new("rating_quality", 0).is_err());
    }

    #[test]
    fn rejects_above_max() {
        assert!(Score::try_new("satisfaction_level", 6).is_err());
        assert!(Score::try_new("satisfaction_level", 200).is_err());
    }

    #[test]
    fn error_names_the_field() {
        let err = Score::try_new("satisfaction_level", 9).unwrap_err();
        assert!(err.to_string().contains("satisfaction_level"));
    }

    #[test]
    fn serializes_as_bare_number() {
        let score = Score::try_new("rating_quality", 4).unwrap();
        assert_eq!(serde_json::to_string(&score).unwrap(), "4");
    }

    #[test]
    fn scores_are_ordered() {
        let low = Score::try_new("rating_quality", 2).unwrap();
        let high = Score::try_new("rating_quality", 5).unwrap();
        assert!(low < high);
    }
}
