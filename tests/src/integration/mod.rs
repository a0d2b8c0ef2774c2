//! Cross-crate integration scenarios.

pub mod fanout;
