//! Pipeline for filtering and sorting candidate lists.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - The comparator used by sortable tables
//! - `process`, the combined filter-then-sort transformation
//!
//! ## Architecture
//! Every rendered table goes through the same stages:
//! 1. Filters remove candidates that fail the criteria (repos, location, followers)
//! 2. The remaining candidates are sorted by the active directive, if any
//!
//! Everything here is pure: no I/O, no shared state.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::process;
//! use candidate_model::{FilterCriteria, SortDirective, SortKey};
//!
//! let filters = FilterCriteria { min_repos: 5, ..Default::default() };
//! let sort = SortDirective::toggle(None, SortKey::Followers);
//! let view = process(&candidates, &filters, Some(sort));
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod sort;
pub mod engine;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use sort::{compare_candidates, sort_candidates};
pub use engine::process;
