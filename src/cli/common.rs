//! Shared error types for CLI command handlers.

use std::fmt;

/// Result alias used by CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands, grouped by failure class.
///
/// All variants are fatal: the command reports the message and the
/// process exits non-zero. There is no retry logic anywhere.
#[derive(Debug)]
pub enum CliError {
    /// File system failures: unreadable input, unwritable output.
    Io(String),
    /// Malformed input documents.
    Parse(String),
}

impl CliError {
    /// Creates an I/O error with the given message.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a parse error with the given message.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(message) | Self::Parse(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {}
