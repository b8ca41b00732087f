// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Blocking GitHub REST client.

use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::commit::CommitRecord;
use crate::config::HostingConfig;
use crate::error::{HostingError, Result};

use super::types::{BranchInfo, CommitStatus, Comparison, RepositoryInfo};
use super::HostingApi;

/// Commits requested per compare page.
const COMPARE_PAGE_SIZE: usize = 100;

const API_VERSION: &str = "2022-11-28";

/// Client for the subset of the GitHub API used by merge-checks.
pub struct GitHubClient {
    agent: ureq::Agent,
    api_url: String,
    user_agent: String,
    token: String,
}

fn make_agent() -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false)
        .timeout_global(Some(Duration::from_secs(30)))
        .build()
        .new_agent()
}

impl GitHubClient {
    /// Create a client authenticated with `token`.
    pub fn new(config: &HostingConfig, token: impl Into<String>) -> Self {
        Self {
            agent: make_agent(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            token: token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    fn authorize<B>(&self, request: ureq::RequestBuilder<B>) -> ureq::RequestBuilder<B> {
        request
            .header("Accept", "application/vnd.github+json")
            .header("Authorization", &format!("Bearer {}", self.token))
            .header("User-Agent", &self.user_agent)
            .header("X-GitHub-Api-Version", API_VERSION)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);

        let response = self
            .authorize(self.agent.get(url))
            .call()
            .map_err(|e| transport_error(url, e))?;
        let response = check_response(url, response)?;

        response
            .into_body()
            .read_json::<T>()
            .map_err(|e| {
                HostingError::Decode {
                    url: url.to_string(),
                    message: e.to_string(),
                }
                .into()
            })
    }
}

impl HostingApi for GitHubClient {
    fn default_branch(&self, repository: &str) -> Result<String> {
        let url = self.url(&format!("repos/{}", repository));
        let info: RepositoryInfo = self.get_json(&url)?;
        Ok(info.default_branch)
    }

    fn branch_tip(&self, repository: &str, branch: &str) -> Result<String> {
        let url = self.url(&format!("repos/{}/branches/{}", repository, branch));
        let info: BranchInfo = self.get_json(&url)?;
        Ok(info.commit.sha)
    }

    fn compare(&self, repository: &str, base: &str, head: &str) -> Result<Vec<CommitRecord>> {
        let mut commits = Vec::new();
        let mut page = 1;

        loop {
            let url = self.url(&format!(
                "repos/{}/compare/{}...{}?per_page={}&page={}",
                repository, base, head, COMPARE_PAGE_SIZE, page
            ));
            let comparison: Comparison = self.get_json(&url)?;
            let received = comparison.commits.len();
            commits.extend(comparison.commits.into_iter().map(CommitRecord::from));

            if received == 0 || commits.len() >= comparison.total_commits {
                break;
            }
            page += 1;
        }

        tracing::debug!("Compared {}...{}: {} commits", base, head, commits.len());
        Ok(commits)
    }

    fn create_status(&self, repository: &str, sha: &str, status: &CommitStatus) -> Result<()> {
        let url = self.url(&format!("repos/{}/statuses/{}", repository, sha));
        tracing::debug!("POST {} ({:?})", url, status.state);

        let response = self
            .authorize(self.agent.post(&url))
            .send_json(status)
            .map_err(|e| transport_error(&url, e))?;
        check_response(&url, response)?;
        Ok(())
    }
}

fn transport_error(url: &str, err: ureq::Error) -> crate::error::MergeCheckError {
    HostingError::Transport {
        url: url.to_string(),
        message: err.to_string(),
    }
    .into()
}

fn check_response(
    url: &str,
    response: ureq::http::Response<ureq::Body>,
) -> Result<ureq::http::Response<ureq::Body>> {
    let status = response.status().as_u16();
    if status < 400 {
        return Ok(response);
    }

    let body = response.into_body().read_to_string().unwrap_or_default();
    Err(classify_failure(url, status, &body).into())
}

/// Map an error status to the matching [`HostingError`].
fn classify_failure(url: &str, status: u16, body: &str) -> HostingError {
    match status {
        401 | 403 => HostingError::Unauthorized {
            url: url.to_string(),
            status,
        },
        404 => HostingError::NotFound {
            url: url.to_string(),
        },
        _ => HostingError::UnexpectedStatus {
            url: url.to_string(),
            status,
            message: api_message(body),
        },
    }
}

/// Pull the `message` field out of an API error body, if there is one.
fn api_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
