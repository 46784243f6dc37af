//! Filter on follower count.

use crate::traits::Filter;
use candidate_model::Candidate;

/// Keeps candidates with at least `min_followers` followers.
pub struct MinFollowersFilter {
    min_followers: u64,
}

impl MinFollowersFilter {
    pub fn new(min_followers: u64) -> Self {
        Self { min_followers }
    }
}

impl Filter for MinFollowersFilter {
    fn name(&self) -> &str {
        "MinFollowersFilter"
    }

    fn keeps(&self, candidate: &Candidate) -> bool {
        candidate.followers.unwrap_or(0) >= self.min_followers
    }
}
