//! Error types for the candidate-model crate.
//!
//! Only the saved-list codec can fail; the data types themselves are
//! plain values.

use thiserror::Error;

/// Errors that can occur while encoding or decoding the saved list.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The stored text is present but is not a JSON array of candidates
    ///
    /// Callers reading from a persistence store treat this as a
    /// corrupt-state condition rather than a crash.
    #[error("Malformed saved list: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Serializing the list failed
    #[error("Failed to encode saved list: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CodecError>;

/// A sort key name that does not match any sortable candidate field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);
