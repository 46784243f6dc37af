//! Core domain types shared by every crate in the workspace.
//!
//! This module defines the candidate record as returned by the GitHub user
//! API, plus the inputs of the filter-sort engine:
//! - `FilterCriteria` (inclusion constraints)
//! - `SortKey`, `SortDirection`, `SortDirective` (display order)

use crate::error::UnknownSortKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Stable identifier of a GitHub account
pub type CandidateId = u64;

// =============================================================================
// Candidate
// =============================================================================

/// A GitHub profile fetched from the search provider.
///
/// `id` is the only identity: two records with the same `id` are the same
/// candidate even when their other fields differ (a later fetch may carry
/// fresher counters). Absent optional fields are `None`; on read a JSON
/// `null` and a missing key are treated the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<u64>,
    /// ISO-8601 timestamp text, kept as returned by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
}

impl Candidate {
    /// Create a candidate with only the required fields set.
    ///
    /// The avatar and profile URLs follow GitHub's public URL layout.
    pub fn new(id: CandidateId, login: impl Into<String>) -> Self {
        let login = login.into();
        Self {
            id,
            avatar_url: format!("https://avatars.githubusercontent.com/u/{}", id),
            html_url: format!("https://github.com/{}", login),
            login,
            name: None,
            bio: None,
            location: None,
            public_repos: None,
            followers: None,
            following: None,
            created_at: None,
            company: None,
            email: None,
            blog: None,
        }
    }

    /// True when both records describe the same account.
    pub fn same_identity(&self, other: &Candidate) -> bool {
        self.id == other.id
    }

    /// The value this candidate holds for a sortable field, if any.
    pub fn sort_value(&self, key: SortKey) -> Option<SortValue<'_>> {
        match key {
            SortKey::Login => Some(SortValue::Text(&self.login)),
            SortKey::Name => self.name.as_deref().map(SortValue::Text),
            SortKey::Location => self.location.as_deref().map(SortValue::Text),
            SortKey::Company => self.company.as_deref().map(SortValue::Text),
            SortKey::PublicRepos => self.public_repos.map(SortValue::Count),
            SortKey::Followers => self.followers.map(SortValue::Count),
            SortKey::Following => self.following.map(SortValue::Count),
            SortKey::CreatedAt => self.created_at.as_deref().map(SortValue::Text),
        }
    }
}

/// A present field value, borrowed from a candidate for comparison.
///
/// Values taken from the same `SortKey` always share a variant; across
/// variants, counts order before text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue<'a> {
    Count(u64),
    Text(&'a str),
}

// =============================================================================
// Filter Criteria
// =============================================================================

/// Inclusion constraints applied before display.
///
/// A zero or empty field means "no constraint on that field".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub min_repos: u64,
    /// Case-insensitive substring of the candidate's location
    pub location: String,
    pub min_followers: u64,
}

impl FilterCriteria {
    /// True when no field constrains anything.
    pub fn is_empty(&self) -> bool {
        self.min_repos == 0 && self.location.is_empty() && self.min_followers == 0
    }
}

// =============================================================================
// Sorting
// =============================================================================

/// The candidate fields a table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Login,
    Name,
    Location,
    Company,
    PublicRepos,
    Followers,
    Following,
    CreatedAt,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::Login,
        SortKey::Name,
        SortKey::Location,
        SortKey::Company,
        SortKey::PublicRepos,
        SortKey::Followers,
        SortKey::Following,
        SortKey::CreatedAt,
    ];

    /// The field name as it appears in the serialized candidate.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Login => "login",
            SortKey::Name => "name",
            SortKey::Location => "location",
            SortKey::Company => "company",
            SortKey::PublicRepos => "public_repos",
            SortKey::Followers => "followers",
            SortKey::Following => "following",
            SortKey::CreatedAt => "created_at",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The active (key, direction) pair; "no sort" is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// The directive that results from selecting `key` in a table header.
    ///
    /// Selecting the active key flips its direction; any other key (or no
    /// active directive) starts at ascending.
    pub fn toggle(current: Option<SortDirective>, key: SortKey) -> SortDirective {
        match current {
            Some(active) if active.key == key => SortDirective {
                key,
                direction: active.direction.flipped(),
            },
            _ => SortDirective::ascending(key),
        }
    }
}
