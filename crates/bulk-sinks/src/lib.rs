//! # Bulk Sinks - Rendering Destinations
//!
//! Concrete observers for the bulkline pipeline. Each sink implements
//! [`bulk_bus::BulkSink`] and renders completed bulks to its own
//! destination:
//!
//! | Sink | Destination | Delimiting |
//! |------|-------------|------------|
//! | [`ConsoleSink`] | any `Write` stream (stdout by default) | `\n` appended per bulk |
//! | [`FileSink`] | one file per bulk, named from a timestamp and a sink id | no trailing newline |
//!
//! Time is an injected dependency: [`FileSink`] takes a [`TimeSource`]
//! rather than reading the system clock directly, so file naming is
//! deterministic under test.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod clock;
pub mod console;
pub mod file;

// Re-export main types
pub use clock::{ManualClock, SystemClock, TimeSource, Timestamp};
pub use console::ConsoleSink;
pub use file::FileSink;
