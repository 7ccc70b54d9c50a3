//! Merging of closed intervals given as a flat list of `start, end` pairs.
//!
//! Intervals are ordered by `start` with a counting-sort style bucketing (one
//! bucket per start value, arrival order kept inside a bucket), then merged in
//! a single sweep. Touching endpoints overlap.

use crate::error::PrepError;
use crate::sorting::counting::table_size;
use crate::traits::{collect_max_key, BucketKey};
use crate::types::Interval;

/// Pairs consecutive values into intervals and merges the overlapping ones.
///
/// Empty input yields no intervals. `start <= end` is not checked.
///
/// # Errors
/// `PrepError::OddLength` for an odd number of values, and the key errors of
/// [`merge_intervals`].
pub fn merge_ranges(values: &[i64]) -> Result<Vec<Interval>, PrepError> {
    if values.len() % 2 != 0 {
        return Err(PrepError::OddLength(values.len()));
    }
    let intervals: Vec<Interval> = values
        .chunks_exact(2)
        .map(|pair| Interval::new(pair[0], pair[1]))
        .collect();
    merge_intervals(&intervals)
}

/// Orders `intervals` by start and merges overlapping ones.
///
/// # Errors
/// `PrepError::NegativeValue` if a start is negative and
/// `PrepError::KeyRangeTooLarge` if the largest start is too big to bucket.
pub fn merge_intervals(intervals: &[Interval]) -> Result<Vec<Interval>, PrepError> {
    let Some(max_start) = collect_max_key(intervals)? else {
        return Ok(Vec::new());
    };

    let mut buckets: Vec<Vec<Interval>> = vec![Vec::new(); table_size(max_start)?];
    for &interval in intervals {
        if let Some(key) = interval.bucket_key() {
            buckets[key as usize].push(interval);
        }
    }

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in buckets.into_iter().flatten() {
        if let Some(last) = merged.last_mut() {
            if last.overlaps(&interval) {
                *last = Interval::new(last.start, last.end.max(interval.end));
                continue;
            }
        }
        merged.push(interval);
    }

    log::debug!("merged {} intervals into {}", intervals.len(), merged.len());
    Ok(merged)
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(intervals: &[Interval]) -> Vec<(i64, i64)> {
        intervals.iter().map(|i| (i.start, i.end)).collect()
    }

    #[test]
    fn test_merge_ranges_classic() {
        let merged = merge_ranges(&[1, 3, 2, 6, 8, 10, 15, 18]).unwrap();
        assert_eq!(pairs(&merged), vec![(1, 6), (8, 10), (15, 18)]);
    }

    #[test]
    fn test_touching_intervals_merge() {
        let merged = merge_ranges(&[1, 4, 4, 5]).unwrap();
        assert_eq!(pairs(&merged), vec![(1, 5)]);
    }

    #[test]
    fn test_unsorted_input_and_containment() {
        // (3, 5) arrives first but starts later; (1, 10) contains everything.
        let merged = merge_ranges(&[3, 5, 1, 10, 12, 13, 0, 1]).unwrap();
        assert_eq!(pairs(&merged), vec![(0, 10), (12, 13)]);
    }

    #[test]
    fn test_same_start_keeps_arrival_order() {
        let merged = merge_intervals(&[Interval::new(2, 3), Interval::new(2, 8)]).unwrap();
        assert_eq!(pairs(&merged), vec![(2, 8)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_ranges(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_odd_length_is_precondition_violation() {
        let err = merge_ranges(&[1, 3, 5]).unwrap_err();
        assert!(matches!(err, PrepError::OddLength(3)));
    }

    #[test]
    fn test_negative_start_is_rejected() {
        let err = merge_ranges(&[-1, 3, 5, 6]).unwrap_err();
        assert!(matches!(err, PrepError::NegativeValue { index: 0, .. }));
    }

    #[test]
    fn test_negative_end_is_passed_through() {
        let merged = merge_ranges(&[2, -1]).unwrap();
        assert_eq!(pairs(&merged), vec![(2, -1)]);
    }
}
