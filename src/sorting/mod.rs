//! This module serves as the public API and dispatcher for the sorting engine.
//!
//! It declares all sort sub-modules and provides a single `sort` function that
//! takes a `SortMethod` and an owned vector. The comparison sorts (selection,
//! insertion, heap) are total; the key-based sorts (counting, radix) require
//! non-negative integers and reject anything else before touching the input.

use num_traits::NumCast;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::error::PrepError;
use crate::traits::BucketKey;

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Comparison sorts: O(n^2)
pub mod insertion;
pub mod selection;

/// Comparison sort: O(n log n)
pub mod heap;

/// Key-based sorts over non-negative integers
pub mod counting;
pub mod radix;

pub use counting::{counting_sort, MAX_COUNTING_KEYS};
pub use heap::{heap_sort, heap_sort_observed};
pub use insertion::insertion_sort;
pub use radix::radix_sort;
pub use selection::selection_sort;

//==================================================================================
// 2. Public API (Unified Dispatcher)
//==================================================================================

/// The five sorting algorithms.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortMethod {
    Selection,
    Insertion,
    Heap,
    Counting,
    Radix,
}

/// Sorts `values` ascending with the chosen method.
///
/// Radix sort is not in place; its rebuilt vector replaces `values`. On error
/// `values` is left exactly as it was passed in.
pub fn sort<T>(method: SortMethod, values: &mut Vec<T>) -> Result<(), PrepError>
where
    T: Ord + Copy + Debug + BucketKey + NumCast,
{
    match method {
        SortMethod::Selection => selection_sort(values),
        SortMethod::Insertion => insertion_sort(values),
        SortMethod::Heap => heap_sort(values),
        SortMethod::Counting => counting_sort(values)?,
        SortMethod::Radix => *values = radix_sort(values)?,
    }
    Ok(())
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    const ALL_METHODS: [SortMethod; 5] = [
        SortMethod::Selection,
        SortMethod::Insertion,
        SortMethod::Heap,
        SortMethod::Counting,
        SortMethod::Radix,
    ];

    #[test]
    fn test_every_method_agrees_with_std_sort() {
        let original: Vec<i64> = vec![31, 4, 159, 26, 5, 35, 89, 79, 3, 23, 84, 62, 64, 3, 0];
        let mut expected = original.clone();
        expected.sort();

        for method in ALL_METHODS {
            let mut values = original.clone();
            sort(method, &mut values).unwrap();
            assert_eq!(values, expected, "method {:?}", method);
        }
    }

    #[test]
    fn test_every_method_handles_empty_input() {
        for method in ALL_METHODS {
            let mut values: Vec<i64> = vec![];
            sort(method, &mut values).unwrap();
            assert!(values.is_empty());
        }
    }

    #[test]
    fn test_key_based_methods_reject_negative_without_mutating() {
        for method in [SortMethod::Counting, SortMethod::Radix] {
            let mut values: Vec<i64> = vec![5, -1, 3];
            let result = sort(method, &mut values);
            assert!(matches!(result, Err(PrepError::NegativeValue { index: 1, .. })));
            assert_eq!(values, vec![5, -1, 3]);
        }
    }

    #[test]
    fn test_comparison_methods_accept_negative() {
        for method in [SortMethod::Selection, SortMethod::Insertion, SortMethod::Heap] {
            let mut values: Vec<i64> = vec![0, -5, 12, -5, 7];
            sort(method, &mut values).unwrap();
            assert_eq!(values, vec![-5, -5, 0, 7, 12]);
        }
    }
}
