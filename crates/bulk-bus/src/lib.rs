//! # Bulk Bus - Observer Contract and Fan-Out
//!
//! The delivery side of the bulkline pipeline: sinks implement [`BulkSink`],
//! subscribe to a [`BulkSubject`], and receive every completed bulk exactly
//! once, in subscription order, synchronously on the notifying thread.
//!
//! ```text
//! ┌──────────────┐                      ┌──────────────┐
//! │   Handler    │                      │ ConsoleSink  │
//! │  (notifier)  │      notify()        │              │
//! │              │ ───────┐             └──────────────┘
//! └──────────────┘        │                     ↑
//!                         ▼                     │
//!                   ┌──────────────┐            │
//!                   │ BulkSubject  │ ───────────┘
//!                   │ Weak handles │    on_bulk()
//!                   └──────────────┘
//! ```
//!
//! ## Ownership Rules
//!
//! - The subject holds **non-owning** [`Weak`](std::sync::Weak) handles; a
//!   sink is owned by whoever created it and may be dropped at any time.
//! - Expired handles are pruned lazily on each `notify` and are never an
//!   error.
//! - Delivery is synchronous and in subscription order; a sink error aborts
//!   the fan-out and propagates to the notifier's caller (remaining sinks in
//!   the order are skipped — a documented limitation, not a recovery point).

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod sink;
pub mod subject;

// Re-export main types
pub use sink::{BulkSink, SinkError, Subscribe};
pub use subject::BulkSubject;
