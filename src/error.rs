//! Error types for authentication vector generation

use thiserror::Error;

/// Errors surfaced while generating an authentication vector.
///
/// The cipher itself cannot fail: keys and blocks are fixed-size
/// arrays, so invalid key or block lengths are unrepresentable past
/// the hex-decoding boundary.
#[derive(Debug, Error)]
pub enum MilenageError {
    /// Input field is not valid hexadecimal.
    #[error("{field} is not valid hex: {source}")]
    InvalidHex {
        /// Name of the offending input field
        field: &'static str,
        /// Underlying decode error
        source: hex::FromHexError,
    },

    /// Input field decoded to the wrong number of bytes.
    #[error("{field} must be {expected} bytes, got {actual}")]
    InvalidLength {
        /// Name of the offending input field
        field: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Decoded length in bytes
        actual: usize,
    },

    /// The secure random source could not supply bytes.
    #[error("secure random source unavailable: {0}")]
    RandomUnavailable(String),
}

/// Result type for authentication vector operations
pub type MilenageResult<T> = Result<T, MilenageError>;
