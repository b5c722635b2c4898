//! GitHub REST API client backed by the browser fetch API.

use gloo_net::http::Request;

use crate::error::LookupError;
use crate::models::{Profile, Repository};
use crate::query::ProfileSource;

const API_BASE: &str = "https://api.github.com";

/// Single page of repositories; further pages are never requested.
const REPO_PAGE_SIZE: usize = 30;

/// Unauthenticated client for the two public GitHub endpoints the app uses.
pub struct GithubApi;

async fn send(url: &str) -> Result<gloo_net::http::Response, LookupError> {
    Request::get(url)
        .send()
        .await
        .map_err(|_| LookupError::Unexpected)
}

fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

impl ProfileSource for GithubApi {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, LookupError> {
        let url = format!("{API_BASE}/users/{username}");
        let response = send(&url).await?;

        let status = response.status();
        if is_success(status) {
            response
                .json::<Profile>()
                .await
                .map_err(|_| LookupError::Unexpected)
        } else if status == 404 {
            Err(LookupError::UserNotFound)
        } else {
            Err(LookupError::ProfileRequestFailed)
        }
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>, LookupError> {
        let url =
            format!("{API_BASE}/users/{username}/repos?sort=updated&per_page={REPO_PAGE_SIZE}");
        let response = send(&url).await?;

        if is_success(response.status()) {
            response
                .json::<Vec<Repository>>()
                .await
                .map_err(|_| LookupError::Unexpected)
        } else {
            Err(LookupError::RepositoryRequestFailed)
        }
    }
}
