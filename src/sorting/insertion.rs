//! Insertion sort by adjacent swaps. Stable; linear on already-sorted input.

pub fn insertion_sort<T: Ord>(values: &mut [T]) {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j] < values[j - 1] {
            values.swap(j, j - 1);
            j -= 1;
        }
    }
}
