//! Error types for probe and report operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UfwstatError {
    #[error("Command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    #[error("Command timed out: {command} after {millis}ms")]
    Timeout { command: String, millis: u64 },

    #[error("Command produced no output: {command}")]
    NoOutput { command: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl UfwstatError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, UfwstatError::Timeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, UfwstatError>;
