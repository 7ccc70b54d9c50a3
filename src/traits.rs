//! This module defines shared traits used across the key-based algorithms.

use crate::error::PrepError;

/// A value that can be placed into a bucket by a non-negative integer key.
///
/// Counting sort, radix sort and interval bucketing all index a table by this
/// key. Negative values have no key and are reported by [`collect_max_key`]
/// as a precondition violation.
pub trait BucketKey {
    fn bucket_key(&self) -> Option<u64>;
}

// Implement the trait for all primitive integer types.
macro_rules! impl_bucket_key {
    ($($T:ty),+ $(,)?) => {
        $(
            impl BucketKey for $T {
                #[inline]
                fn bucket_key(&self) -> Option<u64> {
                    u64::try_from(*self).ok()
                }
            }
        )+
    };
}

impl_bucket_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Validates that every element has a key and returns the largest one.
///
/// Returns `Ok(None)` for an empty slice. The scan happens before any caller
/// touches its buffer, so a rejected call leaves the input unmodified.
pub fn collect_max_key<T>(values: &[T]) -> Result<Option<u64>, PrepError>
where
    T: BucketKey + std::fmt::Debug,
{
    let mut max_key: Option<u64> = None;
    for (index, value) in values.iter().enumerate() {
        let key = value.bucket_key().ok_or_else(|| PrepError::NegativeValue {
            index,
            value: format!("{:?}", value),
        })?;
        max_key = Some(max_key.map_or(key, |m| m.max(key)));
    }
    Ok(max_key)
}
