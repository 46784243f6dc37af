//! # Sources Crate
//!
//! Where candidate records come from, and the list a search view shows.
//!
//! ## Components
//!
//! ### SearchProvider
//! The async seam for fetching candidates:
//! - `search_random`: an arbitrary batch of accounts
//! - `search_by_login`: one account, or `None` when the login is unknown
//!
//! ### GithubClient
//! `SearchProvider` over the GitHub REST API (`/users?since=` and
//! `/users/<login>`), one attempt per call with a request timeout.
//!
//! ### SearchBoard
//! Caller-owned view state: the displayed list and its message. Responses
//! replace the list atomically and stale responses are dropped.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{ClientConfig, GithubClient, SearchBoard};
//!
//! let client = GithubClient::new(ClientConfig::default())?;
//! let mut board = SearchBoard::new();
//! board.search_login(&client, "octocat").await;
//! for candidate in board.candidates() {
//!     println!("{} {}", candidate.id, candidate.login);
//! }
//! ```

// Public modules
pub mod provider;
pub mod github;
pub mod board;

// Re-export commonly used types
pub use provider::{Result, SearchError, SearchProvider};
pub use github::{ClientConfig, GithubClient, MAX_RANDOM_SINCE};
pub use board::{SearchBoard, SearchTicket};
