//! The [`BulkSink`] observer contract.
//!
//! Concrete sinks (console, file, ...) implement this trait and attach
//! themselves to a subject via [`Subscribe::subscribe`]. Subscription is
//! initiated from the sink side, mirroring how the sinks are wired at
//! startup: the subject never reaches out to find its observers.

use crate::subject::BulkSubject;
use bulk_types::Bulk;
use std::io;
use std::sync::{Arc, Weak};
use thiserror::Error;

/// Errors a sink may raise while rendering a bulk.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Underlying I/O failure (file write, console write).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Sink-specific failure that is not an I/O error.
    #[error("sink failure: {0}")]
    Failed(String),
}

/// An observer that renders completed bulks to its own destination.
///
/// Implementations take `&self`: a sink that writes anywhere needs its own
/// interior mutability, and no mutable state is ever shared between sinks.
pub trait BulkSink: Send + Sync {
    /// Receives one completed, never-empty bulk.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] if rendering fails. The error aborts the
    /// current fan-out and propagates to whoever triggered the flush.
    fn on_bulk(&self, bulk: &Bulk) -> Result<(), SinkError>;
}

/// Subscription entry point, implemented on the owning handle of a sink.
///
/// The subject only ever receives a downgraded [`Weak`] handle, so dropping
/// the last `Arc` detaches the sink from all of its subscriptions.
pub trait Subscribe {
    /// Registers this sink with a subject.
    ///
    /// Each call adds one delivery slot: subscribing the same sink twice
    /// means it receives every bulk twice.
    fn subscribe(&self, subject: &mut BulkSubject);
}

impl<T: BulkSink + 'static> Subscribe for Arc<T> {
    fn subscribe(&self, subject: &mut BulkSubject) {
        let weak: Weak<T> = Arc::downgrade(self);
        let handle: Weak<dyn BulkSink> = weak;
        subject.attach(handle);
    }
}

impl Subscribe for Arc<dyn BulkSink> {
    fn subscribe(&self, subject: &mut BulkSubject) {
        subject.attach(Arc::downgrade(self));
    }
}
