//! Error types for the identity-forge CLI.

use std::path::PathBuf;

use thiserror::Error;

use crate::alias::ParseAliasStyleError;
use crate::error::{OutputError, VocabularyError};

/// Errors surfaced by the CLI configuration and generation flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Settings could not be loaded from flags, environment, or files.
    #[error("failed to load configuration: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
    /// The configured alias style is not recognised.
    #[error(transparent)]
    AliasStyle(#[from] ParseAliasStyleError),
    /// The custom vocabulary could not be loaded.
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
    /// The output path is not valid UTF-8.
    #[error("output path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// The rejected path.
        path: PathBuf,
    },
    /// Records could not be serialized to JSON.
    #[error("failed to serialize identities: {message}")]
    Serialize {
        /// Description of the serialization error.
        message: String,
    },
    /// The output file could not be written.
    #[error(transparent)]
    Output(#[from] OutputError),
    /// Writing to the output stream failed.
    #[error("failed to write identities: {message}")]
    Write {
        /// Description of the I/O error.
        message: String,
    },
}
