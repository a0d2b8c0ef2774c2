//! The [`Bulk`] batch type.
//!
//! A bulk is the unit of delivery: an ordered group of commands accumulated
//! since the previous flush. The handler guarantees a bulk is never empty by
//! the time it reaches a sink.

use crate::command::Command;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of the rendered representation of a bulk.
pub const BULK_PREFIX: &str = "bulk: ";

/// An ordered group of commands delivered together in one notification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bulk {
    commands: Vec<Command>,
}

impl Bulk {
    /// Creates a bulk from an ordered list of commands.
    #[must_use]
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// Returns the commands in accumulation order.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Returns the number of commands in this bulk.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the bulk holds no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for Bulk {
    /// Renders the exact wire format: `"bulk: "` + commands joined with
    /// `", "`, no trailing separator. Consumers append their own delimiter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(BULK_PREFIX)?;
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(command.as_str())?;
        }
        Ok(())
    }
}
