//! Save/remove controller for the saved-candidates list.
//!
//! The whole list lives under one key as a JSON array. Every operation is
//! a read-modify-write of that single value:
//!
//! ```text
//! save(c):   read list -> id already present? -> AlreadySaved (no write)
//!                                             -> append c, write -> Saved
//! remove(id): read list -> drop matching id -> write -> new list
//! ```
//!
//! Writes only ever start from a list that parsed. A corrupt stored value
//! makes `save` and `remove` fail with `StoreError::Corrupt` and leaves the
//! value untouched; only `load_all` reads it as empty.
//!
//! Nothing isolates the read from the write. Two controllers over the same
//! store that interleave their reads and writes lose one of the updates
//! (last writer wins).

use crate::error::{Result, StoreError};
use crate::store::KeyValueStore;
use candidate_model::{Candidate, CandidateId, decode_saved, encode_saved};
use tracing::{debug, info, warn};

/// The key the saved list is stored under.
pub const SAVED_CANDIDATES_KEY: &str = "savedCandidates";

/// Outcome of a save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The candidate was appended to the list
    Saved,
    /// A candidate with the same id was already in the list; nothing written
    AlreadySaved,
}

impl SaveOutcome {
    /// The message shown to the user for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            SaveOutcome::Saved => "Candidate saved successfully!",
            SaveOutcome::AlreadySaved => "Candidate already saved!",
        }
    }
}

/// Mediates between views and the persistence store.
pub struct SavedCandidates<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SavedCandidates<S> {
    /// Controller over the well-known `savedCandidates` key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, SAVED_CANDIDATES_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the saved list, failing if the stored value is corrupt.
    pub fn try_load_all(&self) -> Result<Vec<Candidate>> {
        match self.store.get(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => decode_saved(&raw).map_err(|source| StoreError::Corrupt {
                key: self.key.clone(),
                source,
            }),
        }
    }

    /// Read the saved list.
    ///
    /// A missing key is an empty list. A corrupt value, or a store backend
    /// whose contents don't parse, is logged and also read as an empty
    /// list; only I/O failures are returned as errors.
    pub fn load_all(&self) -> Result<Vec<Candidate>> {
        match self.try_load_all() {
            Err(err @ (StoreError::Corrupt { .. } | StoreError::Backend { .. })) => {
                warn!("Treating saved list as empty: {}", err);
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Whether a candidate with this id is saved.
    pub fn contains(&self, id: CandidateId) -> Result<bool> {
        Ok(self.load_all()?.iter().any(|saved| saved.id == id))
    }

    /// Append `candidate` unless its id is already saved.
    ///
    /// Fails without writing if the stored list is corrupt.
    pub fn save(&self, candidate: &Candidate) -> Result<SaveOutcome> {
        let mut saved = self.try_load_all()?;

        if saved.iter().any(|existing| existing.same_identity(candidate)) {
            debug!("Candidate {} ({}) already saved", candidate.id, candidate.login);
            return Ok(SaveOutcome::AlreadySaved);
        }

        saved.push(candidate.clone());
        self.write(&saved)?;
        info!(
            "Saved candidate {} ({}), {} saved in total",
            candidate.id,
            candidate.login,
            saved.len()
        );
        Ok(SaveOutcome::Saved)
    }

    /// Remove the candidate with this id and return the remaining list.
    ///
    /// Removing an id that is not saved still rewrites the (unchanged) list.
    /// Fails without writing if the stored list is corrupt.
    pub fn remove(&self, id: CandidateId) -> Result<Vec<Candidate>> {
        let saved = self.try_load_all()?;
        let before = saved.len();

        let remaining: Vec<Candidate> = saved.into_iter().filter(|c| c.id != id).collect();
        self.write(&remaining)?;

        if remaining.len() < before {
            info!("Removed candidate {}, {} remaining", id, remaining.len());
        } else {
            debug!("Candidate {} was not saved; list unchanged", id);
        }
        Ok(remaining)
    }

    fn write(&self, candidates: &[Candidate]) -> Result<()> {
        let encoded = encode_saved(candidates).map_err(StoreError::Encode)?;
        self.store.set(&self.key, &encoded)
    }
}
