//! The [`BulkHandler`] state machine.
//!
//! One handler per logical session. Commands are pushed in one at a time;
//! the handler buffers them, tracks `{`/`}` nesting, and flushes completed
//! bulks through its [`BulkSubject`] inline, on the caller's thread.

use crate::config::{DanglingBlockPolicy, HandlerConfig};
use crate::error::{HandlerError, Result};
use bulk_bus::BulkSubject;
use bulk_types::{Bulk, Command};
use tracing::{debug, warn};

/// Command text that opens a dynamic block.
pub const OPEN_BLOCK: &str = "{";

/// Command text that closes a dynamic block.
pub const CLOSE_BLOCK: &str = "}";

/// Accumulates commands into bulks and notifies subscribed sinks.
///
/// Single-threaded by design: every operation runs to completion on the
/// caller's thread, including the fan-out a flush triggers. Callers using
/// the handler from multiple threads must serialize access externally.
pub struct BulkHandler {
    /// Fan-out point sinks subscribe to.
    subject: BulkSubject,

    /// Commands buffered since the last flush.
    pending: Vec<Command>,

    /// Static batch size N. `None` until configured.
    batch_size: Option<usize>,

    /// Dynamic block nesting depth. 0 = outside any block.
    depth: usize,

    /// Policy for a block left open at `stop()`.
    dangling_block: DanglingBlockPolicy,
}

impl BulkHandler {
    /// Creates a handler with default configuration (no preset size,
    /// dangling blocks discarded).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HandlerConfig::default())
    }

    /// Creates a handler from a [`HandlerConfig`].
    ///
    /// A preset `batch_size` of zero is treated as unset rather than an
    /// error, so a zeroed config file degrades to "configure before use".
    #[must_use]
    pub fn with_config(config: HandlerConfig) -> Self {
        Self {
            subject: BulkSubject::new(),
            pending: Vec::new(),
            batch_size: config.batch_size.filter(|n| *n > 0),
            depth: 0,
            dangling_block: config.dangling_block,
        }
    }

    /// Returns the subject sinks subscribe to.
    pub fn subject_mut(&mut self) -> &mut BulkSubject {
        &mut self.subject
    }

    /// Returns the configured static batch size, if set.
    #[must_use]
    pub fn batch_size(&self) -> Option<usize> {
        self.batch_size
    }

    /// Returns the current dynamic block nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the number of commands buffered since the last flush.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.pending.len()
    }

    /// Configures the static batch size N.
    ///
    /// # Errors
    ///
    /// - [`HandlerError::InvalidSize`] if `n` is zero.
    /// - [`HandlerError::SizeLocked`] if a static batch is partially filled
    ///   (depth 0, buffer non-empty). Inside a block the size is not in use,
    ///   so changing it there is allowed.
    ///
    /// No notification is emitted and no state changes on error.
    pub fn set_size(&mut self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(HandlerError::InvalidSize);
        }
        if self.depth == 0 && !self.pending.is_empty() {
            return Err(HandlerError::SizeLocked {
                buffered: self.pending.len(),
            });
        }
        self.batch_size = Some(n);
        debug!(batch_size = n, "Static batch size configured");
        Ok(())
    }

    /// Pushes one command into the handler.
    ///
    /// `"{"` and `"}"` are block markers and are never stored. Any other
    /// text, the empty string included, is a literal command.
    ///
    /// # Errors
    ///
    /// - [`HandlerError::SizeNotSet`] if N was never configured (markers
    ///   included).
    /// - [`HandlerError::InvalidCommand`] if the text exceeds the maximum
    ///   command length; nothing is buffered.
    /// - [`HandlerError::Delivery`] if this command completed a bulk and a
    ///   sink failed during the fan-out.
    pub fn add_command(&mut self, text: &str) -> Result<()> {
        let size = self.batch_size.ok_or(HandlerError::SizeNotSet)?;

        match text {
            OPEN_BLOCK => {
                if self.depth == 0 {
                    // Commands queued before the block become their own bulk
                    self.flush()?;
                }
                self.depth += 1;
                debug!(depth = self.depth, "Block opened");
            }
            CLOSE_BLOCK => {
                if self.depth == 0 {
                    debug!("Unmatched closing marker ignored");
                    return Ok(());
                }
                self.depth -= 1;
                debug!(depth = self.depth, "Block closed");
                if self.depth == 0 {
                    // Blocks flush on closure regardless of N
                    self.flush()?;
                }
            }
            _ => {
                let command = Command::new(text)?;
                self.pending.push(command);
                if self.depth == 0 && self.pending.len() >= size {
                    self.flush()?;
                }
            }
        }
        Ok(())
    }

    /// Finalizes the current session.
    ///
    /// Outside a block, any partial static batch is flushed. Inside a block
    /// the [`DanglingBlockPolicy`] applies; either way the depth resets and
    /// the handler stays usable for a new session.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Delivery`] if a sink fails during the final
    /// fan-out.
    pub fn stop(&mut self) -> Result<()> {
        if self.depth > 0 {
            match self.dangling_block {
                DanglingBlockPolicy::Discard => {
                    warn!(
                        depth = self.depth,
                        discarded = self.pending.len(),
                        "Unterminated block discarded at stop"
                    );
                    self.pending.clear();
                }
                DanglingBlockPolicy::Flush => {
                    self.flush()?;
                }
            }
            self.depth = 0;
            return Ok(());
        }
        self.flush()
    }

    /// Flushes the buffered commands as one bulk, if any.
    ///
    /// Never mutates N or the block depth. An empty buffer is a no-op: empty
    /// bulks are never emitted.
    fn flush(&mut self) -> Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let bulk = Bulk::new(std::mem::take(&mut self.pending));
        self.subject.notify(&bulk)?;
        Ok(())
    }
}

impl Default for BulkHandler {
    fn default() -> Self {
        Self::new()
    }
}
