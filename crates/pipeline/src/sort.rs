//! Comparator and sorting for candidate tables.
//!
//! ## Ordering rules
//! - both values present: natural order of the value (numeric counts,
//!   byte-lexicographic text), reversed for descending
//! - exactly one absent: the absent one goes last under ascending and
//!   first under descending
//! - both absent: equal
//!
//! Sorting is stable, so equal candidates keep their input order.

use candidate_model::{Candidate, SortDirection, SortDirective};
use std::cmp::Ordering;

/// Compare two candidates under a sort directive.
pub fn compare_candidates(a: &Candidate, b: &Candidate, directive: SortDirective) -> Ordering {
    let natural = match (a.sort_value(directive.key), b.sort_value(directive.key)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => left.cmp(&right),
    };

    match directive.direction {
        SortDirection::Ascending => natural,
        SortDirection::Descending => natural.reverse(),
    }
}

/// Sort candidates in place; `None` leaves the order untouched.
pub fn sort_candidates(candidates: &mut [Candidate], directive: Option<SortDirective>) {
    if let Some(directive) = directive {
        candidates.sort_by(|a, b| compare_candidates(a, b, directive));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candidate_model::SortKey;

    fn with_followers(id: u64, followers: Option<u64>) -> Candidate {
        let mut candidate = Candidate::new(id, format!("user{}", id));
        candidate.followers = followers;
        candidate
    }

    fn ids(candidates: &[Candidate]) -> Vec<u64> {
        candidates.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_numeric_ascending_and_descending() {
        let mut candidates = vec![
            with_followers(1, Some(10)),
            with_followers(2, Some(5)),
            with_followers(3, Some(100)),
        ];

        sort_candidates(&mut candidates, Some(SortDirective::ascending(SortKey::Followers)));
        assert_eq!(ids(&candidates), vec![2, 1, 3]);

        sort_candidates(&mut candidates, Some(SortDirective::descending(SortKey::Followers)));
        assert_eq!(ids(&candidates), vec![3, 1, 2]);
    }

    #[test]
    fn test_absent_values_last_ascending_first_descending() {
        let mut candidates = vec![
            with_followers(1, None),
            with_followers(2, Some(7)),
            with_followers(3, None),
            with_followers(4, Some(3)),
        ];

        sort_candidates(&mut candidates, Some(SortDirective::ascending(SortKey::Followers)));
        assert_eq!(ids(&candidates), vec![4, 2, 1, 3]);

        sort_candidates(&mut candidates, Some(SortDirective::descending(SortKey::Followers)));
        assert_eq!(ids(&candidates), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_text_is_lexicographic() {
        let mut candidates = vec![
            Candidate::new(1, "zed"),
            Candidate::new(2, "alice"),
            Candidate::new(3, "Bob"),
        ];

        sort_candidates(&mut candidates, Some(SortDirective::ascending(SortKey::Login)));
        // Uppercase sorts before lowercase in byte order
        assert_eq!(ids(&candidates), vec![3, 2, 1]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut candidates = vec![
            with_followers(1, Some(5)),
            with_followers(2, Some(5)),
            with_followers(3, Some(5)),
        ];

        sort_candidates(&mut candidates, Some(SortDirective::descending(SortKey::Followers)));
        assert_eq!(ids(&candidates), vec![1, 2, 3]);
    }

    #[test]
    fn test_no_directive_is_noop() {
        let mut candidates = vec![with_followers(2, Some(1)), with_followers(1, Some(2))];
        sort_candidates(&mut candidates, None);
        assert_eq!(ids(&candidates), vec![2, 1]);
    }

    #[test]
    fn test_key_absent_everywhere_is_noop() {
        let mut candidates = vec![Candidate::new(3, "c"), Candidate::new(1, "a")];
        sort_candidates(&mut candidates, Some(SortDirective::descending(SortKey::Company)));
        assert_eq!(ids(&candidates), vec![3, 1]);
    }

    #[test]
    fn test_compare_one_absent() {
        let present = with_followers(1, Some(0));
        let absent = with_followers(2, None);

        let asc = SortDirective::ascending(SortKey::Followers);
        let desc = SortDirective::descending(SortKey::Followers);

        assert_eq!(compare_candidates(&absent, &present, asc), Ordering::Greater);
        assert_eq!(compare_candidates(&absent, &present, desc), Ordering::Less);
        assert_eq!(compare_candidates(&absent, &absent, desc), Ordering::Equal);
    }
}
