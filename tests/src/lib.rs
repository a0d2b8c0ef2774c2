//! # Bulkline Test Suite
//!
//! Unified test crate for cross-crate scenarios.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support.rs        # Shared fixtures (recording sink, shared buffer)
//! └── integration/      # Handler-to-sink flows
//!     ├── handler_flow.rs   # Batching scenarios through real sinks
//!     └── fanout.rs         # Subscription lifetime and failure behavior
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p bulk-tests
//!
//! # By category
//! cargo test -p bulk-tests integration::handler_flow
//! cargo test -p bulk-tests integration::fanout
//! ```

#![allow(dead_code)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod integration;
pub mod support;
