// In: src/error.rs

//! This module defines the single, unified error type for the entire arrayprep library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    // =========================================================================
    // === Precondition Violations (input breaks a routine's documented contract)
    // =========================================================================
    #[error("Need at least {required} values, got {actual}")]
    InsufficientValues { required: usize, actual: usize },

    #[error("Negative value {value} at index {index}: this operation requires non-negative integers")]
    NegativeValue { index: usize, value: String },

    #[error("Invalid ranges! List length must be a multiple of 2, got {0}")]
    OddLength(usize),

    #[error("Improper deck length. A full deck is 52 cards, got {0}")]
    DeckLength(usize),

    #[error("Key range too large for bucketing: max key {max_key} exceeds limit {limit}")]
    KeyRangeTooLarge { max_key: u64, limit: u64 },

    #[error("String is not a C string. Please input a valid C-string.")]
    NotCString,

    #[error("Unsupported input for '{algorithm}': {reason}")]
    UnsupportedInput { algorithm: String, reason: String },

    // =========================================================================
    // === Numeric Errors
    // =========================================================================
    #[error("Arithmetic overflow while computing {0}")]
    ArithmeticOverflow(&'static str),

    // =========================================================================
    // === Driver / Configuration Errors
    // =========================================================================
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g. a missing config file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while reading a config file.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl PrepError {
    /// Returns `true` when the error reports an input that broke a documented
    /// precondition, as opposed to a driver, numeric or I/O failure.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            PrepError::InsufficientValues { .. }
                | PrepError::NegativeValue { .. }
                | PrepError::OddLength(_)
                | PrepError::DeckLength(_)
                | PrepError::KeyRangeTooLarge { .. }
                | PrepError::NotCString
                | PrepError::UnsupportedInput { .. }
        )
    }
}
