//! Error types for the storage crate.

use candidate_model::CodecError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a key/value store or by the saved-list controller
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a JSON object of string values
    #[error("Store file {path} is unreadable: {source}")]
    Backend {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The saved list under `key` is present but does not parse
    #[error("Saved list under key {key:?} is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: CodecError,
    },

    /// The saved list could not be serialized
    #[error("Failed to encode saved list: {0}")]
    Encode(#[source] CodecError),

    /// A shared in-memory store was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
