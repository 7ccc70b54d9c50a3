//! Rotation-point detection on a cyclically rotated ascending sequence.
//!
//! Precondition: the input was sorted ascending with all-unique elements and
//! then rotated. Duplicate-containing or unrotated inputs are not detected and
//! produce an unspecified index (an unrotated input of length >= 2 reports its
//! last index).

/// Returns the index of the minimum element, or `0` for inputs of length <= 1.
///
/// Each probe is compared against the first element: a probe at least as large
/// still belongs to the upper run, so the rotation lies to its right.
pub fn rotation_point<T: Ord>(values: &[T]) -> usize {
    if values.len() <= 1 {
        return 0;
    }

    let first = &values[0];
    let mut floor = 0;
    let mut ceiling = values.len() - 1;
    while floor + 1 < ceiling {
        let guess = floor + (ceiling - floor) / 2;
        if values[guess] >= *first {
            floor = guess;
        } else {
            ceiling = guess;
        }
    }
    ceiling
}
