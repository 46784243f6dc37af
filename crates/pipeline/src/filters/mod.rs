//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod location;
pub mod min_followers;
pub mod min_repos;

// Re-export for convenience
pub use location::LocationFilter;
pub use min_followers::MinFollowersFilter;
pub use min_repos::MinReposFilter;
