//! Error types for the command-line front end.

use thiserror::Error;

use crate::error::MockError;

/// Errors surfaced by the command-line flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Reading the prompt answer or writing console output failed.
    #[error("failed to {action}: {message}")]
    Io {
        /// What the command was doing when the I/O failed.
        action: &'static str,
        /// Description of the underlying I/O error.
        message: String,
    },
    /// Generating or writing the fixtures failed.
    #[error(transparent)]
    Mock(#[from] MockError),
}

impl CliError {
    pub(crate) fn io(action: &'static str, err: &std::io::Error) -> Self {
        Self::Io {
            action,
            message: err.to_string(),
        }
    }
}
