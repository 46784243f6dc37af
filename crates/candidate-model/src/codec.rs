//! Serialized shape of the saved-candidates value.
//!
//! The whole saved list is stored as one JSON array under a single key.
//! Field names are exactly those of `Candidate`; absent optional fields are
//! omitted on write and may be either omitted or `null` on read.

use crate::error::{CodecError, Result};
use crate::types::Candidate;

/// Encode the saved list as a JSON array.
pub fn encode_saved(candidates: &[Candidate]) -> Result<String> {
    serde_json::to_string(candidates).map_err(CodecError::Encode)
}

/// Decode a stored value into the saved list.
///
/// Empty text and the JSON literal `null` mean "nothing saved yet".
pub fn decode_saved(raw: &str) -> Result<Vec<Candidate>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parsed: Option<Vec<Candidate>> =
        serde_json::from_str(raw).map_err(CodecError::Malformed)?;
    Ok(parsed.unwrap_or_default())
}
