//! Lookup sequencing and page state.
//!
//! The page lifecycle is a single tagged enum so that invalid combinations
//! (loading while showing an error, say) are unrepresentable. The two
//! network requests run strictly in order: the repository list is only
//! requested once the profile request has succeeded.

use crate::error::LookupError;
use crate::models::{Profile, Repository};

/// UI state for the profile lookup page.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState {
    /// No query has been submitted yet.
    Idle,
    /// A lookup is in flight; prior results have been dropped.
    Loading,
    /// The lookup failed. `profile` is kept when the profile request had
    /// already succeeded before the repository request failed, so the page
    /// can still show it next to the error message.
    Failed {
        profile: Option<Profile>,
        message: String,
    },
    /// Both requests succeeded. `repositories` may be empty.
    Loaded {
        profile: Profile,
        repositories: Vec<Repository>,
    },
}

impl QueryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }
}

/// Read-only source of profile and repository data, keyed by username.
///
/// The real implementation talks to the GitHub REST API; tests substitute a
/// scripted source.
pub trait ProfileSource {
    fn fetch_profile(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Profile, LookupError>>;

    /// One page of the user's repositories, most recently updated first.
    fn fetch_repositories(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Vec<Repository>, LookupError>>;
}

/// Runs the two-step lookup and returns the resulting page state.
///
/// The repository request is never issued if the profile request fails. A
/// repository failure keeps the already-fetched profile in the failed state.
pub async fn run_query<S: ProfileSource>(source: &S, username: &str) -> QueryState {
    let profile = match source.fetch_profile(username).await {
        Ok(profile) => profile,
        Err(err) => {
            return QueryState::Failed {
                profile: None,
                message: err.to_string(),
            };
        }
    };

    match source.fetch_repositories(username).await {
        Ok(repositories) => QueryState::Loaded {
            profile,
            repositories,
        },
        Err(err) => QueryState::Failed {
            profile: Some(profile),
            message: err.to_string(),
        },
    }
}

/// Monotonic ticket dispenser for in-flight lookups.
///
/// Requests are not cancelled when the user submits a new query; instead each
/// lookup carries a ticket, and an outcome is applied only while its ticket
/// is still the latest one issued. A superseded lookup can therefore never
/// overwrite fresher state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueryTickets {
    latest: u64,
}

impl QueryTickets {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}
