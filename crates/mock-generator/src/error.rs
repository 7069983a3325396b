//! Error types for the mock-generator crate.
//!
//! This module defines semantic error enums for mock name parsing, value
//! generation, and fixture writing, following the project's error handling
//! conventions with `thiserror`.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::mock::MockName;

/// Errors raised while drawing values from a [`crate::Faker`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A predicate-filtered generator found no acceptable value in time.
    #[error("generator '{generator}' produced no acceptable value after {attempts} attempts")]
    GenerationExhausted {
        /// Name of the generator that was being filtered.
        generator: &'static str,
        /// Number of samples drawn before giving up.
        attempts: usize,
    },
}

/// A fixture file or its destination directory could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to write '{path}': {message}")]
pub struct WriteError {
    /// Path that was being created or written.
    pub path: Utf8PathBuf,
    /// Description of the underlying I/O error.
    pub message: String,
}

/// A mock name did not match the allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MockNameError {
    /// The supplied name is not a recognised mock.
    #[error("unknown mock name '{name}'")]
    Unknown {
        /// The name that was not recognised.
        name: String,
    },
}

/// Errors that abort a mock generation run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MockError {
    /// Building the payload for a mock failed.
    #[error("failed to generate {mock}: {source}")]
    Generation {
        /// Mock whose payload could not be built.
        mock: MockName,
        /// Underlying generation failure.
        #[source]
        source: GenerationError,
    },

    /// The payload could not be rendered as JSON.
    #[error("failed to serialise {mock}: {message}")]
    Serialize {
        /// Mock whose payload could not be serialised.
        mock: MockName,
        /// Serialiser error message.
        message: String,
    },

    /// The destination directory or fixture file could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),
}
