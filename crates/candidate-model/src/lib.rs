//! # Candidate Model Crate
//!
//! Shared data types for the candidate search workspace.
//!
//! ## Main Components
//!
//! - **types**: `Candidate`, `FilterCriteria` and the sort directive types
//! - **codec**: the JSON shape of the persisted saved-candidates list
//! - **error**: error types for decoding and parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use candidate_model::{decode_saved, SortDirective, SortKey};
//!
//! let saved = decode_saved(&raw)?;
//! let sort = SortDirective::toggle(None, SortKey::Followers);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod codec;

// Re-export commonly used types for convenience
pub use error::{CodecError, Result, UnknownSortKey};
pub use codec::{decode_saved, encode_saved};
pub use types::{
    // Type aliases
    CandidateId,
    // Core types
    Candidate,
    FilterCriteria,
    SortValue,
    // Sorting
    SortDirection,
    SortDirective,
    SortKey,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_creation() {
        let candidate = Candidate::new(583231, "octocat");

        assert_eq!(candidate.id, 583231);
        assert_eq!(candidate.html_url, "https://github.com/octocat");
        assert_eq!(
            candidate.avatar_url,
            "https://avatars.githubusercontent.com/u/583231"
        );
        assert!(candidate.location.is_none());
    }

    #[test]
    fn test_identity_ignores_other_fields() {
        let stale = Candidate::new(1, "octocat");
        let mut fresh = Candidate::new(1, "octocat");
        fresh.followers = Some(9000);

        assert!(stale.same_identity(&fresh));
        assert!(!stale.same_identity(&Candidate::new(2, "octocat")));
    }

    #[test]
    fn test_empty_criteria() {
        assert!(FilterCriteria::default().is_empty());

        let criteria = FilterCriteria {
            location: "berlin".to_string(),
            ..Default::default()
        };
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_sort_key_parsing() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert_eq!(
            "stars".parse::<SortKey>(),
            Err(UnknownSortKey("stars".to_string()))
        );
    }

    #[test]
    fn test_toggle_same_key_flips_direction() {
        let first = SortDirective::toggle(None, SortKey::Followers);
        assert_eq!(first, SortDirective::ascending(SortKey::Followers));

        let second = SortDirective::toggle(Some(first), SortKey::Followers);
        assert_eq!(second, SortDirective::descending(SortKey::Followers));

        let third = SortDirective::toggle(Some(second), SortKey::Followers);
        assert_eq!(third, SortDirective::ascending(SortKey::Followers));
    }

    #[test]
    fn test_toggle_new_key_starts_ascending() {
        let active = SortDirective::descending(SortKey::Followers);
        let next = SortDirective::toggle(Some(active), SortKey::Login);
        assert_eq!(next, SortDirective::ascending(SortKey::Login));
    }

    #[test]
    fn test_sort_values() {
        let mut candidate = Candidate::new(1, "octocat");
        candidate.public_repos = Some(8);

        assert_eq!(
            candidate.sort_value(SortKey::Login),
            Some(SortValue::Text("octocat"))
        );
        assert_eq!(
            candidate.sort_value(SortKey::PublicRepos),
            Some(SortValue::Count(8))
        );
        assert_eq!(candidate.sort_value(SortKey::Name), None);
    }
}
