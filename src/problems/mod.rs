//! This module collects the finite-array transformation problems.
//!
//! Each sub-module is an independent, stateless algorithm with its own
//! preconditions. All precondition checks run before any work, so a rejected
//! call leaves the caller's data untouched.

/// Single-pass greedy products
pub mod product;
pub mod triple;

/// Deck and permutation problems
pub mod riffle;
pub mod shuffle;

/// Closed-interval merging
pub mod intervals;

pub use intervals::{merge_intervals, merge_ranges};
pub use product::product_of_others;
pub use riffle::{is_single_riffle, DECK_SIZE};
pub use shuffle::shuffle;
pub use triple::highest_product_of_three;
