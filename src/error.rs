//! Error type shared by the container and text helpers.

use thiserror::Error;

/// Errors raised synchronously to the immediate caller.
///
/// Lookup misses are not errors: a missing locale reads as empty text and
/// goes through the fallback policy instead.
#[derive(Error, Debug)]
pub enum TextError {
    /// The string is not a well-formed language/region code
    #[error("Invalid locale code: '{0}'")]
    InvalidLocale(String),
    /// Usage counters cannot go below zero
    #[error("Counter cannot be negative: {0}")]
    NegativeCounter(i64),
    /// `nth` must be non-zero; its sign picks the search direction
    #[error("Search direction cannot be zero")]
    ZeroDirection,
    /// A start index lies past the end of the string
    #[error("Index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    /// Structured decoding of a serialized container failed
    #[error("Failed to decode localized text: {0}")]
    Json(#[from] serde_json::Error),
}
