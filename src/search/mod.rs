//! Search & rotation routines.
//!
//! Both are binary-search variants: `binary_search` sorts the raw input (minus
//! the trailing needle) with radix sort and probes it, while `rotation_point`
//! narrows in on the minimum of a rotated ascending sequence.

pub mod binary;
pub mod rotation;

pub use binary::{binary_search, probe_sorted, SearchOutcome};
pub use rotation::rotation_point;
