//! Exchange configuration
//!
//! Immutable values built once from the command line and passed explicitly
//! into the exchanger.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, TokenError};

/// Public GitHub REST API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default whole-request timeout for GitHub API calls
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// GitHub App identity and the repository whose installation is wanted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCredentials {
    /// GitHub App ID, used as the JWT issuer
    pub app_id: String,
    /// Path to the App's PEM-encoded private key
    pub private_key_path: PathBuf,
    /// Owner or organization of the repository
    pub organization: String,
    /// Repository name
    pub repository: String,
}

impl AppCredentials {
    /// Validate raw inputs and build credentials.
    ///
    /// Fields are checked in the order app, pem, org, repo; the first absent
    /// or empty one is reported as [`TokenError::NotSet`].
    pub fn new(
        app_id: Option<String>,
        private_key_path: Option<String>,
        organization: Option<String>,
        repository: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            app_id: required(app_id, "app")?,
            private_key_path: PathBuf::from(required(private_key_path, "pem")?),
            organization: required(organization, "org")?,
            repository: required(repository, "repo")?,
        })
    }

    /// `owner/repo` as GitHub displays it
    pub fn repo_full_name(&self) -> String {
        format!("{}/{}", self.organization, self.repository)
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(TokenError::NotSet(field)),
    }
}

/// Settings for talking to the GitHub REST API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API root without a trailing slash
    pub base_url: String,
    /// Timeout applied to each request as a whole
    pub timeout: Duration,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("gh-app-token/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiConfig {
    /// Point at a different API root (GitHub Enterprise Server, test doubles)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Installation lookup endpoint for a repository
    pub fn installation_url(&self, credentials: &AppCredentials) -> String {
        format!(
            "{}/repos/{}/{}/installation",
            self.base_url, credentials.organization, credentials.repository
        )
    }
}
