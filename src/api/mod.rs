//! HTTP lookups for account and collaboration checks.
//!
//! Two collaborators: the GitHub users API (does this account exist, and
//! with what capitalization) and Reporobot, the tutorial's helper service,
//! which answers whether it has been added as a collaborator on the
//! learner's fork and whether a pull request from them was merged.
//!
//! Base URLs are injectable so tests can point both at a local mock server.

use serde::Deserialize;
use std::time::Duration;

use crate::error::{CairnError, Result};

/// Default GitHub API base.
pub const GITHUB_BASE: &str = "https://api.github.com";

/// Default Reporobot base.
pub const REPOROBOT_BASE: &str = "http://reporobot.jlord.us";

/// A GitHub account as returned by the users endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    /// Account login with GitHub's capitalization.
    pub login: String,
}

#[derive(Debug, Deserialize)]
struct CollabResponse {
    collab: bool,
}

#[derive(Debug, Deserialize)]
struct PrResponse {
    pr: bool,
}

/// Blocking client over both lookup services.
pub struct ApiClient {
    client: reqwest::blocking::Client,
    github_base: String,
    robot_base: String,
}

impl ApiClient {
    /// Client against the real endpoints.
    pub fn new() -> Self {
        Self::with_bases(GITHUB_BASE, REPOROBOT_BASE)
    }

    /// Client against explicit base URLs. Intended for tests.
    pub fn with_bases(github_base: impl Into<String>, robot_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("cairn")
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            github_base: github_base.into(),
            robot_base: robot_base.into(),
        }
    }

    /// Look up a GitHub account. `None` means the account does not exist.
    pub fn user(&self, username: &str) -> Result<Option<GitHubUser>> {
        let url = format!("{}/users/{}", self.github_base, username);
        let response = self.client.get(&url).send()?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(CairnError::UnexpectedStatus {
                status: response.status().as_u16(),
                url,
            });
        }
        Ok(Some(response.json()?))
    }

    /// Whether Reporobot has collaborator access to the learner's fork.
    pub fn collab(&self, username: &str) -> Result<bool> {
        let url = format!("{}/collab?username={}", self.robot_base, username);
        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(CairnError::UnexpectedStatus {
                status: response.status().as_u16(),
                url,
            });
        }
        let body: CollabResponse = response.json()?;
        Ok(body.collab)
    }

    /// Whether a merged pull request from the learner was found.
    pub fn pull_request(&self, username: &str) -> Result<bool> {
        let url = format!("{}/pr?username={}", self.robot_base, username);
        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(CairnError::UnexpectedStatus {
                status: response.status().as_u16(),
                url,
            });
        }
        let body: PrResponse = response.json()?;
        Ok(body.pr)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bases_are_the_real_services() {
        let client = ApiClient::new();
        assert_eq!(client.github_base, GITHUB_BASE);
        assert_eq!(client.robot_base, REPOROBOT_BASE);
    }

    #[test]
    fn with_bases_overrides_both() {
        let client = ApiClient::with_bases("http://localhost:1", "http://localhost:2");
        assert_eq!(client.github_base, "http://localhost:1");
        assert_eq!(client.robot_base, "http://localhost:2");
    }

    #[test]
    fn github_user_deserializes_login() {
        let user: GitHubUser = serde_json::from_str(r#"{"login":"octocat","id":1}"#).unwrap();
        assert_eq!(user.login, "octocat");
    }

    #[test]
    fn collab_and_pr_bodies_deserialize() {
        let c: CollabResponse = serde_json::from_str(r#"{"collab":true}"#).unwrap();
        assert!(c.collab);
        let p: PrResponse = serde_json::from_str(r#"{"pr":false}"#).unwrap();
        assert!(!p.pr);
    }
}
