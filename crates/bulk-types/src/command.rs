//! The [`Command`] value object.
//!
//! A command is an immutable piece of text with a bounded length. The empty
//! string is a valid command and renders as an empty segment.

use crate::errors::CommandError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum allowed command length, in characters.
pub const MAX_COMMAND_LEN: usize = 50;

/// A single validated text command.
///
/// Construction is the only validation point: once a `Command` exists its
/// text is within bounds and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Command(String);

impl Command {
    /// Creates a command from text.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::TooLong`] if the text exceeds
    /// [`MAX_COMMAND_LEN`] characters. Nothing is retained on failure.
    pub fn new(text: impl Into<String>) -> Result<Self, CommandError> {
        let text = text.into();
        let len = text.chars().count();
        if len > MAX_COMMAND_LEN {
            return Err(CommandError::TooLong {
                len,
                max: MAX_COMMAND_LEN,
            });
        }
        Ok(Self(text))
    }

    /// Returns the command text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Command {
    type Error = CommandError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<Command> for String {
    fn from(command: Command) -> Self {
        command.0
    }
}
