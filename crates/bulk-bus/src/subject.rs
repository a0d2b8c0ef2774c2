//! The [`BulkSubject`] notifier.
//!
//! Keeps the set of subscribed sinks and fans each completed bulk out to all
//! of them, synchronously, in subscription order.

use crate::sink::{BulkSink, SinkError};
use bulk_types::Bulk;
use std::sync::Weak;
use tracing::{debug, warn};

/// Fan-out point for completed bulks.
///
/// Holds non-owning handles only: a sink whose owner released it is skipped
/// silently and pruned on the next delivery. The subject itself performs no
/// I/O and never retries.
#[derive(Default)]
pub struct BulkSubject {
    /// Subscribed sinks, in subscription order.
    sinks: Vec<Weak<dyn BulkSink>>,

    /// Total bulks delivered to at least one sink.
    bulks_delivered: u64,
}

impl BulkSubject {
    /// Creates an empty subject.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a sink handle.
    ///
    /// Handles are kept in subscription order; duplicates are allowed and
    /// each entry is one delivery slot.
    pub fn attach(&mut self, sink: Weak<dyn BulkSink>) {
        self.sinks.push(sink);
        debug!(sinks = self.sinks.len(), "Sink subscribed");
    }

    /// Returns the number of currently live subscriptions.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.iter().filter(|s| s.strong_count() > 0).count()
    }

    /// Returns the total number of bulks delivered so far.
    #[must_use]
    pub fn bulks_delivered(&self) -> u64 {
        self.bulks_delivered
    }

    /// Delivers one bulk to every live sink, in subscription order.
    ///
    /// Expired handles are pruned first, so a dropped sink never sees a
    /// delivery attempt and never causes one to fail.
    ///
    /// # Errors
    ///
    /// The first sink error aborts the fan-out and is returned; sinks later
    /// in the order are skipped for this bulk.
    ///
    /// # Returns
    ///
    /// The number of sinks that received the bulk.
    pub fn notify(&mut self, bulk: &Bulk) -> Result<usize, SinkError> {
        self.sinks.retain(|sink| sink.strong_count() > 0);

        if self.sinks.is_empty() {
            warn!(commands = bulk.len(), "Bulk dropped (no subscribers)");
            return Ok(0);
        }

        let mut delivered = 0;
        for sink in &self.sinks {
            // Pruned above; a handle can only expire mid-loop if a sink
            // drops another sink's owner, which the contract forbids.
            if let Some(sink) = sink.upgrade() {
                sink.on_bulk(bulk)?;
                delivered += 1;
            }
        }

        self.bulks_delivered += 1;
        debug!(
            commands = bulk.len(),
            receivers = delivered,
            "Bulk delivered"
        );
        Ok(delivered)
    }
}
