//! The filter-sort engine: the one transformation every candidate table
//! goes through before it is rendered.

use crate::filter_pipeline::FilterPipeline;
use crate::sort::sort_candidates;
use candidate_model::{Candidate, FilterCriteria, SortDirective};

/// Filter, then sort, a candidate list.
///
/// The input slice is left untouched; the result is a new list. With
/// empty criteria nothing is filtered, and with no directive the filtered
/// list keeps its input order.
pub fn process(
    candidates: &[Candidate],
    filters: &FilterCriteria,
    sort: Option<SortDirective>,
) -> Vec<Candidate> {
    let pipeline = FilterPipeline::from_criteria(filters);
    let mut view = pipeline.apply(candidates.to_vec());
    sort_candidates(&mut view, sort);

    tracing::debug!(
        input = candidates.len(),
        output = view.len(),
        sort = ?sort,
        "Processed candidate list"
    );
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use candidate_model::SortKey;

    fn candidate(id: u64, login: &str, repos: Option<u64>, followers: Option<u64>) -> Candidate {
        let mut candidate = Candidate::new(id, login);
        candidate.public_repos = repos;
        candidate.followers = followers;
        candidate
    }

    #[test]
    fn test_empty_input() {
        let view = process(
            &[],
            &FilterCriteria {
                min_repos: 3,
                ..Default::default()
            },
            Some(SortDirective::ascending(SortKey::Login)),
        );
        assert!(view.is_empty());
    }

    #[test]
    fn test_min_repos_example() {
        let candidates = vec![
            candidate(1, "a", Some(5), Some(10)),
            candidate(2, "b", Some(1), Some(100)),
        ];
        let filters = FilterCriteria {
            min_repos: 2,
            ..Default::default()
        };

        let view = process(&candidates, &filters, None);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);
        // The source list is untouched
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_followers_descending_example() {
        let candidates = vec![
            candidate(1, "a", None, Some(10)),
            candidate(2, "b", None, Some(5)),
        ];

        let view = process(
            &candidates,
            &FilterCriteria::default(),
            Some(SortDirective::descending(SortKey::Followers)),
        );
        let ids: Vec<u64> = view.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_filter_runs_before_sort() {
        let candidates = vec![
            candidate(1, "a", Some(1), Some(500)),
            candidate(2, "b", Some(9), Some(20)),
            candidate(3, "c", Some(9), Some(30)),
        ];
        let filters = FilterCriteria {
            min_repos: 5,
            ..Default::default()
        };

        let view = process(
            &candidates,
            &filters,
            Some(SortDirective::descending(SortKey::Followers)),
        );
        let ids: Vec<u64> = view.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }
}
