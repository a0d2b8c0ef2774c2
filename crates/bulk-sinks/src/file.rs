//! File sink.

use crate::clock::{TimeSource, Timestamp};
use bulk_bus::{BulkSink, SinkError};
use bulk_types::Bulk;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Writes each bulk to its own file, no trailing newline.
///
/// The file name is derived from the injected clock and a numeric sink id:
/// `bulk{timestamp}-{id}.log`. Sinks created in the same process tick must
/// carry distinct ids to avoid colliding on the same name. Two bulks flushed
/// by the same sink within one tick share a name, and the later write
/// replaces the earlier file.
pub struct FileSink {
    /// Injected time source for file naming.
    clock: Arc<dyn TimeSource>,

    /// Disambiguates sinks sharing a process tick.
    id: u32,

    /// Directory files are written into.
    dir: PathBuf,
}

impl FileSink {
    /// Creates a sink writing into the current directory.
    pub fn new(clock: Arc<dyn TimeSource>, id: u32) -> Self {
        Self::with_dir(clock, id, ".")
    }

    /// Creates a sink writing into the given directory.
    pub fn with_dir(clock: Arc<dyn TimeSource>, id: u32, dir: impl AsRef<Path>) -> Self {
        Self {
            clock,
            id,
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the path this sink would write to at the given timestamp.
    #[must_use]
    pub fn path_for(&self, timestamp: Timestamp) -> PathBuf {
        self.dir.join(format!("bulk{timestamp}-{}.log", self.id))
    }
}

impl BulkSink for FileSink {
    fn on_bulk(&self, bulk: &Bulk) -> Result<(), SinkError> {
        let path = self.path_for(self.clock.now());
        fs::write(&path, bulk.to_string())?;
        debug!(path = %path.display(), commands = bulk.len(), "Bulk written to file");
        Ok(())
    }
}
