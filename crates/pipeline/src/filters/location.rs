//! Filter on the free-text location field.
//!
//! Matching is a case-insensitive substring test, so "francisco"
//! matches "San Francisco, CA".

use crate::traits::Filter;
use candidate_model::Candidate;

/// Keeps candidates whose location contains the needle, ignoring case.
///
/// A candidate without a location is treated as having an empty one.
pub struct LocationFilter {
    needle: String,
}

impl LocationFilter {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_lowercase(),
        }
    }
}

impl Filter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn keeps(&self, candidate: &Candidate) -> bool {
        candidate
            .location
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn located(id: u64, location: Option<&str>) -> Candidate {
        let mut candidate = Candidate::new(id, format!("user{}", id));
        candidate.location = location.map(str::to_string);
        candidate
    }

    #[test]
    fn test_case_insensitive_substring() {
        let filter = LocationFilter::new("francisco");
        assert!(filter.keeps(&located(1, Some("San Francisco"))));
        assert!(filter.keeps(&located(2, Some("SAN FRANCISCO, CA"))));
        assert!(!filter.keeps(&located(3, Some("Berlin"))));
    }

    #[test]
    fn test_uppercase_needle() {
        let filter = LocationFilter::new("BERLIN");
        assert!(filter.keeps(&located(1, Some("berlin, germany"))));
    }

    #[test]
    fn test_missing_location_never_matches_a_needle() {
        let filter = LocationFilter::new("a");
        assert!(!filter.keeps(&located(1, None)));
    }
}
