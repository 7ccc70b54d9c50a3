//! Counting sort over non-negative integers.
//!
//! Builds a frequency table indexed by value (size `max + 1`), then writes the
//! values back in ascending key order. The table size is bounded by
//! [`MAX_COUNTING_KEYS`] so a single large value cannot trigger a huge
//! allocation.

use num_traits::NumCast;
use std::fmt::Debug;

use crate::error::PrepError;
use crate::traits::{collect_max_key, BucketKey};

/// Upper bound on the size of a counting/bucketing table (`max + 1`).
pub const MAX_COUNTING_KEYS: u64 = 1 << 24;

/// Checks a key range against [`MAX_COUNTING_KEYS`] and returns the table size.
pub(crate) fn table_size(max_key: u64) -> Result<usize, PrepError> {
    if max_key >= MAX_COUNTING_KEYS {
        return Err(PrepError::KeyRangeTooLarge {
            max_key,
            limit: MAX_COUNTING_KEYS - 1,
        });
    }
    usize::try_from(max_key + 1)
        .map_err(|_| PrepError::InternalError(format!("table size {} exceeds usize", max_key + 1)))
}

/// Sorts `values` ascending in place.
///
/// # Errors
/// `PrepError::NegativeValue` if any element is negative and
/// `PrepError::KeyRangeTooLarge` if the largest element is too big for the
/// frequency table. Both are detected before `values` is modified.
pub fn counting_sort<T>(values: &mut [T]) -> Result<(), PrepError>
where
    T: BucketKey + NumCast + Copy + Debug,
{
    let Some(max_key) = collect_max_key(values)? else {
        return Ok(());
    };
    let mut counts = vec![0usize; table_size(max_key)?];

    for value in values.iter() {
        // Keys were validated by `collect_max_key`.
        if let Some(key) = value.bucket_key() {
            counts[key as usize] += 1;
        }
    }

    let mut write_idx = 0;
    for (key, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let item: T = NumCast::from(key).ok_or_else(|| {
            PrepError::InternalError(format!("key {} does not fit the element type", key))
        })?;
        values[write_idx..write_idx + count].fill(item);
        write_idx += count;
    }

    log::debug!("counting sort: {} values over {} keys", values.len(), counts.len());
    Ok(())
}
