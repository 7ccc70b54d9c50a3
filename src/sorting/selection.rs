//! Selection sort.
//!
//! Each step finds the minimum of the unsorted suffix and moves it to the front
//! of that suffix by rotating it into place (remove-and-reinsert), so equal
//! elements keep their relative order.

/// Sorts `values` ascending in place. O(n^2) comparisons.
pub fn selection_sort<T: Ord>(values: &mut [T]) {
    for i in 0..values.len() {
        let mut min_idx = i;
        for j in (i + 1)..values.len() {
            if values[j] < values[min_idx] {
                min_idx = j;
            }
        }
        values[i..=min_idx].rotate_right(1);
    }
}
