//! In-place heap sort over a zero-indexed implicit max-heap.
//!
//! The build phase inserts elements one at a time and sifts each up while it is
//! strictly greater than its parent. The extraction phase swaps the root with
//! the last unsorted element, shrinks the heap bound and sifts the new root
//! down. During sift-down the right child is only chosen when it is strictly
//! greater than the left one, so a tie between children always goes left.
//!
//! The swap order is observable through [`heap_sort_observed`].

/// Sorts `values` ascending in place. O(n log n) worst case.
pub fn heap_sort<T: Ord>(values: &mut [T]) {
    heap_sort_observed(values, |_, _| {});
}

/// Heap sort that reports every swap, in execution order, as `(a, b)` indices.
pub fn heap_sort_observed<T, F>(values: &mut [T], mut on_swap: F)
where
    T: Ord,
    F: FnMut(usize, usize),
{
    if values.len() <= 1 {
        return;
    }

    // --- Build: sift each new element up ---
    for i in 1..values.len() {
        let mut node = i;
        while node > 0 {
            let parent = (node - 1) >> 1;
            if values[node] <= values[parent] {
                break;
            }
            values.swap(node, parent);
            on_swap(node, parent);
            node = parent;
        }
    }

    // --- Extract: move the root behind the heap bound, then restore ---
    let mut last = values.len() - 1;
    while last > 0 {
        values.swap(0, last);
        on_swap(0, last);
        last -= 1;

        let mut current = 0;
        let mut child = max_child(values, current, last);
        while child <= last && values[current] < values[child] {
            values.swap(current, child);
            on_swap(current, child);
            current = child;
            child = max_child(values, current, last);
        }
    }
}

/// Index of the larger child of `parent` within `[0, last]`; left wins ties.
///
/// May return an index past `last` when `parent` is a leaf; callers bound-check.
#[inline]
fn max_child<T: Ord>(values: &[T], parent: usize, last: usize) -> usize {
    let left = (parent << 1) + 1;
    let right = left + 1;
    if right <= last && values[right] > values[left] {
        right
    } else {
        left
    }
}
