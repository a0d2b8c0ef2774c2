//! Error types for the bulk handler.

use bulk_bus::SinkError;
use bulk_types::CommandError;
use thiserror::Error;

/// Result type alias for handler operations.
pub type Result<T> = std::result::Result<T, HandlerError>;

/// Errors that can occur while feeding the handler.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Command text failed validation; nothing was buffered.
    #[error("invalid command: {0}")]
    InvalidCommand(#[from] CommandError),

    /// A command was pushed before the static batch size was configured.
    #[error("batch size not configured")]
    SizeNotSet,

    /// The batch size must be greater than zero.
    #[error("invalid batch size: must be greater than zero")]
    InvalidSize,

    /// The batch size cannot change while a static batch is partially filled.
    #[error("batch size locked: {buffered} command(s) already buffered")]
    SizeLocked {
        /// Commands currently buffered outside a block.
        buffered: usize,
    },

    /// A sink failed while the flushed bulk was being fanned out.
    #[error("sink delivery failed: {0}")]
    Delivery(#[from] SinkError),
}

impl HandlerError {
    /// Check if the error rejects the input itself (caller may retry with
    /// corrected input).
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidCommand(_))
    }

    /// Check if the error reports an operation invalid in the current state.
    #[must_use]
    pub fn is_state(&self) -> bool {
        matches!(
            self,
            Self::SizeNotSet | Self::InvalidSize | Self::SizeLocked { .. }
        )
    }
}
