//! # Bulk Handler - Accumulation State Machine
//!
//! Decides, one command at a time, when the current bulk is complete and
//! must be fanned out to the subscribed sinks.
//!
//! ## States
//!
//! ```text
//! [Uninitialized] ──set_size──→ [Accumulating] ──"{"──→ [InBlock(depth)]
//!                                     ↑                       │
//!                                     └───── "}" (depth 1→0) ──┘
//! ```
//!
//! ## Flush Triggers
//!
//! | Trigger | Condition | What is flushed |
//! |---------|-----------|-----------------|
//! | Static size reached | depth 0, buffer reaches N | the full bulk of N commands |
//! | Block opened | `"{"` at depth 0 | the static remainder buffered so far |
//! | Block closed | `"}"` taking depth 1→0 | the whole block, N is ignored |
//! | `stop()` | depth 0, buffer non-empty | the static remainder |
//!
//! A `stop()` inside an open block flushes nothing by default: the dangling
//! content is discarded. [`DanglingBlockPolicy::Flush`] opts into emitting it
//! instead.
//!
//! ## Invariants
//!
//! | ID | Invariant | Enforcement |
//! |----|-----------|-------------|
//! | 1 | N > 0 before any command is accepted | `add_command` checks first, `set_size(0)` rejected |
//! | 2 | N locked while a static batch is partial | `set_size` rejects with `SizeLocked` |
//! | 3 | Block depth never negative | unmatched `"}"` at depth 0 is a no-op |
//! | 4 | Empty bulks are never emitted | `flush` skips an empty buffer |
//! | 5 | Markers are never stored as commands | marker dispatch before buffering |

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod accumulator;
pub mod config;
pub mod error;

// Re-export main types
pub use accumulator::{BulkHandler, CLOSE_BLOCK, OPEN_BLOCK};
pub use config::{DanglingBlockPolicy, HandlerConfig};
pub use error::{HandlerError, Result};
