//! This file is the root of the `arrayprep` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`sorting`, `search`,
//!     `problems`, etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the handful of types a caller needs to drive the engine.
//!
//! The algorithm engine is synchronous and stateless. Every routine works on a
//! sequence owned by the caller for the duration of the call, so independent
//! calls on disjoint sequences may run on different threads without locking.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod config;
pub mod error;
pub mod generator;
pub mod problems;
pub mod registry;
pub mod search;
pub mod sorting;
pub mod strings;
pub mod traits;
pub mod types;

//==================================================================================
// 2. Re-exports
//==================================================================================
pub use config::PrepConfig;
pub use error::PrepError;
pub use registry::Registry;
pub use types::{Algorithm, Input, Interval, Outcome};
