//! The candidate list a search view displays.
//!
//! A `SearchBoard` holds the last applied search result and the message
//! shown next to it. Results always replace the whole list, never merge
//! into it. Every search takes a `SearchTicket`; a response whose ticket is
//! older than the newest response already applied is dropped, so a slow
//! earlier request can't overwrite a newer one.
//!
//! Failed searches clear the list and set an error message.

use crate::provider::{Result, SearchProvider};
use candidate_model::Candidate;
use tracing::{debug, warn};

pub const RANDOM_FAILED_MESSAGE: &str = "Failed to load candidates";
pub const LOGIN_FAILED_MESSAGE: &str = "Error searching for user";
pub const NOT_FOUND_MESSAGE: &str = "No user found with that username";

/// Handle for one in-flight search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

#[derive(Debug, Default)]
pub struct SearchBoard {
    candidates: Vec<Candidate>,
    message: Option<String>,
    last_issued: u64,
    last_applied: u64,
}

impl SearchBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Replace the message, e.g. with the outcome of a save.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// True while the newest issued search has not completed.
    pub fn is_loading(&self) -> bool {
        self.last_issued > self.last_applied
    }

    pub fn begin_search(&mut self) -> SearchTicket {
        self.last_issued += 1;
        SearchTicket(self.last_issued)
    }

    /// Apply the response of a random-batch search.
    ///
    /// Returns false when the response was stale and dropped.
    pub fn complete_random(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<Candidate>>,
    ) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        match result {
            Ok(candidates) => {
                self.candidates = candidates;
                self.message = None;
            }
            Err(err) => {
                warn!("Random search failed: {}", err);
                self.candidates.clear();
                self.message = Some(RANDOM_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    /// Apply the response of a login search.
    ///
    /// Returns false when the response was stale and dropped.
    pub fn complete_login(
        &mut self,
        ticket: SearchTicket,
        result: Result<Option<Candidate>>,
    ) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        match result {
            Ok(Some(candidate)) => {
                self.candidates = vec![candidate];
                self.message = None;
            }
            Ok(None) => {
                self.candidates.clear();
                self.message = Some(NOT_FOUND_MESSAGE.to_string());
            }
            Err(err) => {
                warn!("Login search failed: {}", err);
                self.candidates.clear();
                self.message = Some(LOGIN_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    /// Run a random-batch search to completion.
    pub async fn load_random(&mut self, provider: &dyn SearchProvider) {
        let ticket = self.begin_search();
        let result = provider.search_random().await;
        self.complete_random(ticket, result);
    }

    /// Run a login search to completion.
    ///
    /// A blank search term is ignored and issues no request.
    pub async fn search_login(&mut self, provider: &dyn SearchProvider, term: &str) {
        let login = term.trim();
        if login.is_empty() {
            debug!("Ignoring blank search term");
            return;
        }
        let ticket = self.begin_search();
        let result = provider.search_by_login(login).await;
        self.complete_login(ticket, result);
    }

    fn accept(&mut self, ticket: SearchTicket) -> bool {
        if ticket.0 <= self.last_applied {
            debug!(
                "Dropping stale search response {} (already applied {})",
                ticket.0, self.last_applied
            );
            return false;
        }
        self.last_applied = ticket.0;
        true
    }
}
