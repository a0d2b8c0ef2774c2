//! Time source port for file naming.
//!
//! Abstracted to allow testing with deterministic time.

use std::sync::atomic::{AtomicU64, Ordering};

/// Timestamp in seconds since the Unix epoch.
pub type Timestamp = u64;

/// Time source for consistent timestamp handling.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in seconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Manually-advanced clock for deterministic tests and replay.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    /// Creates a clock fixed at the given timestamp.
    #[must_use]
    pub fn at(now: Timestamp) -> Self {
        Self {
            now: AtomicU64::new(now),
        }
    }

    /// Moves the clock to the given timestamp.
    pub fn set(&self, now: Timestamp) {
        self.now.store(now, Ordering::Relaxed);
    }

    /// Advances the clock by the given number of seconds.
    pub fn advance(&self, seconds: u64) {
        self.now.fetch_add(seconds, Ordering::Relaxed);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.load(Ordering::Relaxed)
    }
}
