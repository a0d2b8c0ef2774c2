//! Console sink.

use bulk_bus::{BulkSink, SinkError};
use bulk_types::Bulk;
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::debug;

/// Writes each bulk to a `Write` stream, one line per bulk.
///
/// The stream sits behind a `Mutex` because delivery takes `&self`; the
/// pipeline itself is single-threaded, so the lock is never contended.
pub struct ConsoleSink<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleSink<io::Stdout> {
    /// Creates a sink writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    /// Creates a sink writing to the given stream.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consumes the sink and returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> BulkSink for ConsoleSink<W> {
    fn on_bulk(&self, bulk: &Bulk) -> Result<(), SinkError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| SinkError::Failed("console stream lock poisoned".into()))?;
        writeln!(out, "{bulk}")?;
        debug!(commands = bulk.len(), "Bulk written to console");
        Ok(())
    }
}
