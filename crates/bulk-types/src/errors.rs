//! Error types for command validation.

use thiserror::Error;

/// Errors raised while constructing a [`crate::Command`].
///
/// Validation happens before any buffering, so a failed construction never
/// leaves a partially-mutated batch behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Command text exceeds the maximum allowed length.
    #[error("command too long: {len} characters, maximum is {max}")]
    TooLong {
        /// Actual length in characters.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },
}
