//! A closed integer interval, as produced and merged by `problems::intervals`.

use crate::traits::BucketKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable `(start, end)` pair.
///
/// `start <= end` is not validated; an inverted pair is passed through the
/// merge as-is.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Closed-interval overlap: touching endpoints count.
    pub fn overlaps(&self, later: &Interval) -> bool {
        later.start <= self.end
    }
}

impl From<(i64, i64)> for Interval {
    fn from((start, end): (i64, i64)) -> Self {
        Self::new(start, end)
    }
}

/// Intervals are bucketed by their `start`.
impl BucketKey for Interval {
    fn bucket_key(&self) -> Option<u64> {
        self.start.bucket_key()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_intervals_overlap() {
        let a = Interval::new(1, 4);
        assert!(a.overlaps(&Interval::new(4, 5)));
        assert!(!a.overlaps(&Interval::new(5, 6)));
    }

    #[test]
    fn test_bucket_key_uses_start() {
        assert_eq!(Interval::new(3, 1).bucket_key(), Some(3));
        assert_eq!(Interval::new(-1, 1).bucket_key(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::from((8, 10)).to_string(), "(8, 10)");
    }
}
