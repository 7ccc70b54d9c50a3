//! Fisher–Yates (Knuth) shuffle.
//!
//! Position `i` is swapped with a uniformly drawn position in `[i, n)`.
//! `Rng::random_range` samples without modulo bias, so all `n!` orderings are
//! equally likely.

use rand::Rng;

/// Shuffles `values` in place using `rng`.
pub fn shuffle<T, R: Rng + ?Sized>(values: &mut [T], rng: &mut R) {
    let n = values.len();
    if n <= 1 {
        return;
    }
    for i in 0..n {
        let j = rng.random_range(i..n);
        if j != i {
            values.swap(i, j);
        }
    }
}
