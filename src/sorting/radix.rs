//! LSD radix sort, base 10, over non-negative integers.
//!
//! Every digit pass distributes the current sequence into ten buckets by
//! `(key / 10^d) % 10`, preserving arrival order inside each bucket, and
//! flattens them into a brand new sequence. Passes stop once `10^d` exceeds
//! the largest key.

use std::fmt::Debug;

use crate::error::PrepError;
use crate::traits::{collect_max_key, BucketKey};

const RADIX: u64 = 10;

/// Distributes `values` into ten buckets by the digit at `place`.
fn get_buckets<T: BucketKey + Copy>(values: &[T], place: u64) -> [Vec<T>; 10] {
    let mut buckets: [Vec<T>; 10] = Default::default();
    for &value in values {
        // Keys were validated by the caller.
        let key = value.bucket_key().unwrap_or(0);
        buckets[((key / place) % RADIX) as usize].push(value);
    }
    buckets
}

/// Returns a new vector holding `values` sorted ascending.
///
/// Empty and all-zero inputs need no pass and come back unchanged.
///
/// # Errors
/// `PrepError::NegativeValue` if any element is negative.
pub fn radix_sort<T>(values: &[T]) -> Result<Vec<T>, PrepError>
where
    T: BucketKey + Copy + Debug,
{
    let max_key = collect_max_key(values)?.unwrap_or(0);

    let mut current = values.to_vec();
    let mut place: u64 = 1;
    let mut passes = 0;
    while place <= max_key {
        current = get_buckets(&current, place).into_iter().flatten().collect();
        passes += 1;
        match place.checked_mul(RADIX) {
            Some(next) => place = next,
            None => break,
        }
    }

    log::debug!("radix sort: {} values in {} passes", current.len(), passes);
    Ok(current)
}
