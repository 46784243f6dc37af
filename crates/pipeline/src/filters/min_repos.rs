//! Filter on the number of public repositories.

use crate::traits::Filter;
use candidate_model::Candidate;

/// Keeps candidates with at least `min_repos` public repositories.
///
/// An absent repository count counts as zero.
pub struct MinReposFilter {
    min_repos: u64,
}

impl MinReposFilter {
    pub fn new(min_repos: u64) -> Self {
        Self { min_repos }
    }
}

impl Filter for MinReposFilter {
    fn name(&self) -> &str {
        "MinReposFilter"
    }

    fn keeps(&self, candidate: &Candidate) -> bool {
        candidate.public_repos.unwrap_or(0) >= self.min_repos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_repos(id: u64, repos: Option<u64>) -> Candidate {
        let mut candidate = Candidate::new(id, format!("user{}", id));
        candidate.public_repos = repos;
        candidate
    }

    #[test]
    fn test_min_repos_filter() {
        let candidates = vec![
            with_repos(1, Some(5)),
            with_repos(2, Some(1)),
            with_repos(3, None),
            with_repos(4, Some(2)),
        ];

        let filtered = MinReposFilter::new(2).apply(candidates);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(filtered[1].id, 4);
    }

    #[test]
    fn test_absent_count_is_zero() {
        let filter = MinReposFilter::new(1);
        assert!(!filter.keeps(&with_repos(1, None)));
        assert!(MinReposFilter::new(0).keeps(&with_repos(1, None)));
    }
}
