//! Configuration types for the bulk handler.

use serde::Deserialize;

/// Runtime configuration for a [`crate::BulkHandler`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct HandlerConfig {
    /// Preset static batch size (equivalent to calling `set_size` once).
    /// `None` means the size must be configured before the first command.
    #[serde(default)]
    pub batch_size: Option<usize>,

    /// What to do with a block left open when `stop()` is called.
    #[serde(default)]
    pub dangling_block: DanglingBlockPolicy,
}

/// Policy for a dynamic block still open at `stop()`.
///
/// The original pipeline silently discarded the dangling content; that stays
/// the default, but the choice is explicit here rather than assumed.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DanglingBlockPolicy {
    /// Drop the unterminated block without notifying any sink.
    #[default]
    Discard,

    /// Flush the unterminated block's content as a final bulk.
    Flush,
}
