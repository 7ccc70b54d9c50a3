//! This module defines the core, strongly-typed data representations shared by
//! the algorithm engine, the registry and the command-line driver.
//!
//! It includes the canonical `Algorithm` enum, which replaces name-based lookup
//! of functions with a closed set of identifiers, the `Interval` pair used by
//! range merging, and the `Input`/`Outcome` envelopes that flow through the
//! registry.

pub mod algorithm;
pub mod interval;
pub mod outcome;

// Re-export the main types for easier access.
pub use algorithm::Algorithm;
pub use interval::Interval;
pub use outcome::{Input, Outcome};
