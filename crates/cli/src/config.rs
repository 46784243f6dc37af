//! Command-line configuration shared by every subcommand.

use candidate_model::{FilterCriteria, SortDirective, SortKey};
use clap::Args;
use sources::ClientConfig;
use std::path::PathBuf;
use std::time::Duration;
use storage::{FileStore, SavedCandidates};

/// Where to search and where to keep saved candidates
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// File holding the saved-candidates store
    #[arg(
        long,
        env = "CANDIDATE_STORE",
        default_value = "saved_candidates.json",
        global = true
    )]
    pub store: PathBuf,

    /// GitHub API base URL
    #[arg(
        long,
        env = "GITHUB_API_BASE",
        default_value = "https://api.github.com",
        global = true
    )]
    pub api_base: String,

    /// GitHub API token, sent as a bearer token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "10", global = true)]
    pub timeout_secs: u64,
}

impl GlobalArgs {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base: self.api_base.clone(),
            token: self.token.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..Default::default()
        }
    }

    pub fn saved_candidates(&self) -> SavedCandidates<FileStore> {
        SavedCandidates::new(FileStore::new(&self.store))
    }
}

/// Filter and sort options for a candidate table
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Minimum number of public repositories (0 = any)
    #[arg(long, default_value = "0")]
    pub min_repos: u64,

    /// Case-insensitive substring of the location (empty = any)
    #[arg(long, default_value = "")]
    pub location: String,

    /// Minimum number of followers (0 = any)
    #[arg(long, default_value = "0")]
    pub min_followers: u64,

    /// Column to sort by (login, name, location, company, public_repos,
    /// followers, following, created_at)
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Sort descending (selects the sort column a second time)
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

impl ViewArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            min_repos: self.min_repos,
            location: self.location.clone(),
            min_followers: self.min_followers,
        }
    }

    pub fn directive(&self) -> Option<SortDirective> {
        self.sort.map(|key| {
            let first = SortDirective::toggle(None, key);
            if self.desc {
                SortDirective::toggle(Some(first), key)
            } else {
                first
            }
        })
    }
}
