//! Binary search over an unsorted sequence whose last element is the needle.
//!
//! The probe returns as soon as it lands on a matching value. With duplicates
//! this is neither the leftmost nor the rightmost match, only the first one the
//! halving sequence happens to hit.

use crate::error::PrepError;
use crate::sorting::radix_sort;

/// The result of [`binary_search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The value searched for; `None` when the input had fewer than two elements.
    pub needle: Option<i64>,
    /// The haystack after sorting.
    pub sorted: Vec<i64>,
    /// Position of the needle within `sorted`.
    pub index: Option<usize>,
}

impl SearchOutcome {
    /// The index as a signed value, `-1` meaning "not found".
    pub fn index_or_sentinel(&self) -> isize {
        self.index.map_or(-1, |i| i as isize)
    }
}

/// Probes an ascending slice for `needle`, narrowing exclusive `floor`/`ceiling`
/// bounds and stopping at the first equal element it visits.
pub fn probe_sorted<T: Ord>(sorted: &[T], needle: &T) -> Option<usize> {
    // `floor` starts one before the slice, `ceiling` one past it.
    let mut floor: isize = -1;
    let mut ceiling: isize = sorted.len() as isize;

    while floor + 1 < ceiling {
        let guess = floor + (ceiling - floor) / 2;
        let candidate = &sorted[guess as usize];
        if candidate == needle {
            return Some(guess as usize);
        } else if candidate < needle {
            floor = guess;
        } else {
            ceiling = guess;
        }
    }
    None
}

/// Splits the needle off the end of `values`, radix sorts the rest and probes it.
///
/// Inputs of length 0 or 1 have nothing to search and return no needle and no
/// index.
///
/// # Errors
/// `PrepError::NegativeValue` if the haystack holds a negative value, since it
/// is sorted with radix sort.
pub fn binary_search(values: &[i64]) -> Result<SearchOutcome, PrepError> {
    let Some((&needle, haystack)) = values.split_last().filter(|_| values.len() > 1) else {
        return Ok(SearchOutcome {
            needle: None,
            sorted: Vec::new(),
            index: None,
        });
    };

    let sorted = radix_sort(haystack)?;
    let index = probe_sorted(&sorted, &needle);
    log::debug!("binary search for {} over {} values: {:?}", needle, sorted.len(), index);

    Ok(SearchOutcome {
        needle: Some(needle),
        sorted,
        index,
    })
}
