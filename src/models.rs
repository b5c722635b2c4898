use serde::{Deserialize, Serialize};

/// Public account record from `GET /users/{username}`.
///
/// Everything except `login` may be absent depending on how the account is
/// configured. Values live only as long as the current lookup; a new query
/// replaces them wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub login: String,
    pub avatar_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub created_at: String,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub html_url: String,
}

impl Profile {
    /// Name to show in the page heading, falling back to the login when the
    /// account has no display name set.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.login)
    }

    /// The account's website, if one is set. GitHub serializes an unset blog
    /// as an empty string rather than null.
    pub fn blog_url(&self) -> Option<&str> {
        self.blog.as_deref().filter(|blog| !blog.is_empty())
    }
}

/// Repository metadata from `GET /users/{username}/repos`.
///
/// The API returns these most-recently-updated first; the order is preserved
/// for display and never re-sorted locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub html_url: String,
    pub updated_at: String,
}
