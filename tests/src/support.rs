//! Shared test fixtures.

use bulk_bus::{BulkSink, SinkError};
use bulk_types::Bulk;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Sink that records every rendered bulk it receives.
pub struct RecordingSink {
    seen: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Creates an owned handle ready to subscribe.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            seen: Mutex::new(Vec::new()),
        })
    }

    /// Returns the rendered bulks in delivery order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl BulkSink for RecordingSink {
    fn on_bulk(&self, bulk: &Bulk) -> Result<(), SinkError> {
        self.seen.lock().unwrap().push(bulk.to_string());
        Ok(())
    }
}

/// Sink that fails every delivery, for fan-out abort tests.
pub struct FailingSink;

impl BulkSink for FailingSink {
    fn on_bulk(&self, _bulk: &Bulk) -> Result<(), SinkError> {
        Err(SinkError::Failed("injected failure".into()))
    }
}

/// Cloneable byte buffer implementing `Write`, standing in for stdout so a
/// test can read back what a `ConsoleSink` wrote.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    /// Returns everything written so far as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
