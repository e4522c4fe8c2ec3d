//! Typed errors for sequence and statistics operations
//!
//! Argument errors fail fast with a typed variant instead of being logged
//! and papered over with a default value, so misuse surfaces at the call
//! site where it can actually be fixed.

use thiserror::Error;

/// Errors produced by the sequence utilities and the bias harness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A swap index was outside the sequence bounds.
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A destination sequence did not match the reference length.
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// An element was required from an empty sequence.
    #[error("{op} requires a non-empty sequence")]
    EmptySequence { op: &'static str },

    /// A probability was computed against a zero denominator.
    #[error("probability denominator must be positive")]
    ZeroDenominator,

    /// The harness was asked to run zero trials.
    #[error("trial count must be at least 1")]
    ZeroTrials,

    /// The harness input is too short to measure pair statistics.
    #[error("harness input needs at least 2 characters, got {len}")]
    InputTooShort { len: usize },
}

/// Convenience alias for fallible library operations.
pub type Result<T> = std::result::Result<T, Error>;
