//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate lists.

use candidate_model::Candidate;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - `keeps` is a pure predicate over one candidate
/// - `apply` takes ownership of the Vec and returns the kept candidates
///   in their original order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `candidate` passes this filter.
    fn keeps(&self, candidate: &Candidate) -> bool;

    /// Apply this filter to a set of candidates.
    fn apply(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| self.keeps(candidate))
            .collect()
    }
}
