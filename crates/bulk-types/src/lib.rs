//! # Bulk Types - Core Value Types for the Bulkline Pipeline
//!
//! Immutable value objects shared by the handler, the bus, and the sinks.
//!
//! ## Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Command`] | A single validated text command (max 50 characters) |
//! | [`Bulk`] | An ordered group of commands delivered in one notification |
//! | [`CommandError`] | Validation failures when constructing a [`Command`] |
//!
//! ## Rendering Contract
//!
//! A bulk renders as `"bulk: "` followed by its commands joined with `", "`
//! and no trailing separator. Every sink receives this exact representation;
//! line terminators are the sink's own concern.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod bulk;
pub mod command;
pub mod errors;

// Re-export main types
pub use bulk::{Bulk, BULK_PREFIX};
pub use command::{Command, MAX_COMMAND_LEN};
pub use errors::CommandError;
