//! Shared error definitions for descriptor primitives.

use thiserror::Error;

/// Result alias used throughout the descriptor crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing primitive types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The supplied string is not a CSS length.
    #[error("invalid css length `{value}`: {reason}")]
    InvalidCssLength {
        /// The offending input string.
        value: String,
        /// Human-readable reason for rejection.
        reason: String,
    },
}
