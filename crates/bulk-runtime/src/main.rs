//! # Bulkline Runtime
//!
//! The main entry point for the bulkline pipeline.
//!
//! Reads commands from stdin, one per line, batches them with a
//! [`BulkHandler`], and fans each completed bulk out to a console sink
//! (stdout) and a file sink (one file per bulk in the working directory).
//!
//! ## Usage
//!
//! ```text
//! bulkline <batch-size> < commands.txt
//! ```
//!
//! ## Environment
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BULKLINE_LOG` | `info` | Log level filter (logs go to stderr) |
//! | `BULKLINE_CONFIG` | unset | Path to a JSON `HandlerConfig` |
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (stderr, so stdout carries only bulk output)
//! 2. Load configuration (CLI argument overrides the config file)
//! 3. Wire sinks to the handler
//! 4. Feed stdin; rejected commands are logged and skipped
//! 5. `stop()` at EOF flushes the static remainder

use std::fs;
use std::io::{self, BufRead};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bulk_bus::Subscribe;
use bulk_handler::{BulkHandler, HandlerConfig};
use bulk_sinks::{ConsoleSink, FileSink, SystemClock, TimeSource};

/// Loads the handler configuration.
///
/// Reads JSON from the path in `BULKLINE_CONFIG` when set, defaults
/// otherwise. The CLI batch size takes precedence either way.
fn load_config() -> Result<HandlerConfig> {
    let Ok(path) = std::env::var("BULKLINE_CONFIG") else {
        return Ok(HandlerConfig::default());
    };
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {path}"))?;
    let config: HandlerConfig =
        serde_json::from_str(&raw).with_context(|| format!("invalid config file {path}"))?;
    Ok(config)
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout is the console sink's channel
    let filter = EnvFilter::try_from_env("BULKLINE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let batch_size: usize = std::env::args()
        .nth(1)
        .context("usage: bulkline <batch-size>")?
        .parse()
        .context("batch size must be a positive integer")?;

    let config = load_config()?;
    let mut handler = BulkHandler::with_config(config);
    handler.set_size(batch_size)?;

    let console = Arc::new(ConsoleSink::stdout());
    let clock: Arc<dyn TimeSource> = Arc::new(SystemClock);
    let file = Arc::new(FileSink::new(clock, 0));
    console.subscribe(handler.subject_mut());
    file.subscribe(handler.subject_mut());

    info!(batch_size, "Bulkline pipeline started");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        match handler.add_command(&line) {
            Ok(()) => {}
            // Bad input is the caller's to correct; skip and keep reading
            Err(err) if err.is_validation() => {
                warn!(%err, "Command rejected");
            }
            Err(err) => return Err(err.into()),
        }
    }

    handler.stop()?;
    info!("Bulkline pipeline stopped");
    Ok(())
}
