//! Half-open time interval value object.
//!
//! Every scheduled window in the engine is a `[start, end)` interval.
//! The overlap relation here is the single source of truth for
//! double-booking checks.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Timestamp, ValidationError};

/// Half-open interval `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    start: Timestamp,
    end: Timestamp,
}

impl TimeRange {
    /// Creates a validated time range.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` when `start >= end` (empty or inverted interval).
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, ValidationError> {
        if !start.is_before(&end) {
            return Err(ValidationError::invalid_format(
                "time_range",
                "start time must be before end time",
            ));
        }
        Ok(Self { start, end })
    }

    /// Returns the inclusive start instant.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Returns the exclusive end instant.
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Standard half-open overlap test: `s1 < e2 && s2 < e1`.
    ///
    /// Touching intervals (`[10,11)` and `[11,12)`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start.is_before(&other.end) && other.start.is_before(&self.end)
    }

    /// Interval length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        self.end.minutes_since(&self.start)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse_rfc3339(s).unwrap()
    }

    fn range(start: &str, end: &str) -> TimeRange {
        TimeRange::new(ts(start), ts(end)).unwrap()
    }

    #[test]
    fn new_rejects_inverted_interval() {
        let result = TimeRange::new(ts("2024-03-01T11:00:00Z"), ts("2024-03-01T10:00:00Z"));
        assert!(result.is_err());
    }

    #[test]
    fn new_rejects_empty_interval() {
        let t = ts("2024-03-01T10:00:00Z");
        assert!(TimeRange::new(t, t).is_err());
    }

    #[test]
    fn overlapping_intervals_overlap() {
        let a = range("2024-03-01T10:00:00Z", "2024-03-01T11:00:00Z");
        let b = range("2024-03-01T10:30:00Z", "2024-03-01T11:30:00Z");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        let a = range("2024-03-01T10:00:00Z", "2024-03-01T11:00:00Z");
        let b = range("2024-03-01T11:00:00Z", "2024-03-01T12:00:00Z");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn contained_interval_overlaps() {
        let outer = range("2024-03-01T09:00:00Z", "2024-03-01T12:00:00Z");
        let inner = range("2024-03-01T10:00:00Z", "2024-03-01T10:30:00Z");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn disjoint_intervals_do_not_overlap() {
        let a = range("2024-03-01T08:00:00Z", "2024-03-01T09:00:00Z");
        let b = range("2024-03-01T11:00:00Z", "2024-03-01T12:00:00Z");
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn duration_is_in_minutes() {
        let a = range("2024-03-01T10:00:00Z", "2024-03-01T11:30:00Z");
        assert_eq!(a.duration_minutes(), 90);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        // Offsets in minutes from a fixed origin keep the generated
        // intervals well inside chrono's representable range.
        fn origin() -> Timestamp {
            ts("2024-01-01T00:00:00Z")
        }

        fn interval(start_off: i64, len: i64) -> TimeRange {
            let start = origin().plus_minutes(start_off);
            TimeRange::new(start, start.plus_minutes(len)).unwrap()
        }

        proptest! {
            #[test]
            fn overlap_is_symmetric(
                s1 in 0i64..10_000, l1 in 1i64..500,
                s2 in 0i64..10_000, l2 in 1i64..500,
            ) {
                let a = interval(s1, l1);
                let b = interval(s2, l2);
                prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            }

            #[test]
            fn interval_overlaps_itself(s in 0i64..10_000, l in 1i64..500) {
                let a = interval(s, l);
                prop_assert!(a.overlaps(&a));
            }

            #[test]
            fn adjacent_intervals_never_overlap(s in 0i64..10_000, l1 in 1i64..500, l2 in 1i64..500) {
                let a = interval(s, l1);
                let b = interval(s + l1, l2);
                prop_assert!(!a.overlaps(&b));
                prop_assert!(!b.overlaps(&a));
            }

            #[test]
            fn overlap_matches_arithmetic_definition(
                s1 in 0i64..10_000, l1 in 1i64..500,
                s2 in 0i64..10_000, l2 in 1i64..500,
            ) {
                let a = interval(s1, l1);
                let b = interval(s2, l2);
                let expected = s1 < s2 + l2 && s2 < s1 + l1;
                prop_assert_eq!(a.overlaps(&b), expected);
            }
        }
    }
}
