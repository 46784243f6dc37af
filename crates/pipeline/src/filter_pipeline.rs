//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{LocationFilter, MinFollowersFilter, MinReposFilter};
use crate::traits::Filter;
use candidate_model::{Candidate, FilterCriteria};
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// A candidate survives the pipeline only if every filter keeps it.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MinReposFilter::new(5))
///     .add_filter(LocationFilter::new("berlin"));
///
/// let filtered = pipeline.apply(candidates);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a set of filter criteria.
    ///
    /// Only constrained fields get a filter: a zero minimum or an empty
    /// location adds nothing, so empty criteria build an empty pipeline.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new();
        if criteria.min_repos > 0 {
            pipeline = pipeline.add_filter(MinReposFilter::new(criteria.min_repos));
        }
        if !criteria.location.is_empty() {
            pipeline = pipeline.add_filter(LocationFilter::new(&criteria.location));
        }
        if criteria.min_followers > 0 {
            pipeline = pipeline.add_filter(MinFollowersFilter::new(criteria.min_followers));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Relative order of the surviving candidates is preserved.
    pub fn apply(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: u64, repos: u64, followers: u64, location: &str) -> Candidate {
        let mut candidate = Candidate::new(id, format!("user{}", id));
        candidate.public_repos = Some(repos);
        candidate.followers = Some(followers);
        candidate.location = Some(location.to_string());
        candidate
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();

        let candidates = vec![
            candidate(1, 0, 0, "Berlin"),
            candidate(2, 10, 10, "Paris"),
        ];

        let filtered = pipeline.apply(candidates.clone());
        assert_eq!(filtered, candidates);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(MinReposFilter::new(5));

        let candidates = vec![candidate(1, 5, 0, "Berlin"), candidate(2, 4, 0, "Paris")];

        let filtered = pipeline.apply(candidates);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_from_empty_criteria_adds_nothing() {
        let pipeline = FilterPipeline::from_criteria(&FilterCriteria::default());
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_from_criteria_all_constraints() {
        let criteria = FilterCriteria {
            min_repos: 3,
            location: "san".to_string(),
            min_followers: 50,
        };
        let pipeline = FilterPipeline::from_criteria(&criteria);
        assert_eq!(pipeline.len(), 3);

        let candidates = vec![
            candidate(1, 10, 100, "San Diego"),   // passes everything
            candidate(2, 1, 100, "San Jose"),     // too few repos
            candidate(3, 10, 100, "Seattle"),     // wrong location
            candidate(4, 10, 10, "Santa Monica"), // too few followers
            candidate(5, 3, 50, "Pleasanton"),    // boundaries are inclusive
        ];

        let ids: Vec<u64> = pipeline.apply(candidates).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 5]);
    }
}
