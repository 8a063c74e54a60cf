//! Installation token exchange
//!
//! Three sequential steps with no retries: load the App key, look up the
//! repository's installation to find its token endpoint, then exchange a
//! fresh App JWT for an installation access token.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::GitHubClient;
use crate::config::{ApiConfig, AppCredentials};
use crate::error::{Result, TokenError};
use crate::jwt;
use crate::key::PrivateKey;

/// Response from `GET /repos/{owner}/{repo}/installation`
#[derive(Debug, Deserialize)]
pub struct InstallationInfo {
    pub id: u64,
    pub access_tokens_url: Option<String>,
}

/// Response from the installation's `access_tokens_url`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallationAccessToken {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Exchanges GitHub App credentials for an installation access token
pub struct TokenExchanger {
    credentials: AppCredentials,
    api: ApiConfig,
    client: GitHubClient,
}

impl TokenExchanger {
    /// Create an exchanger for one set of credentials
    pub fn new(credentials: AppCredentials, api: ApiConfig) -> Result<Self> {
        let client = GitHubClient::new(&api)?;
        Ok(Self {
            credentials,
            api,
            client,
        })
    }

    /// Run the full exchange and return the installation access token.
    ///
    /// The first failing step aborts the exchange; later steps never run.
    pub async fn get(&self) -> Result<InstallationAccessToken> {
        let key = PrivateKey::load(&self.credentials.private_key_path)?;

        let endpoint = self.access_tokens_url(&key).await?;

        self.exchange(&key, &endpoint).await
    }

    /// Find the endpoint that issues tokens for the repository's installation
    async fn access_tokens_url(&self, key: &PrivateKey) -> Result<String> {
        let repo = self.credentials.repo_full_name();
        info!(repo = %repo, "🔍 Looking up GitHub App installation");

        let jwt = jwt::sign(key, &self.credentials.app_id, Utc::now())?;
        let installation: InstallationInfo = self
            .client
            .get(&self.api.installation_url(&self.credentials), &jwt)
            .await?;

        info!(installation_id = installation.id, "Found installation");

        installation
            .access_tokens_url
            .ok_or(TokenError::MissingEndpoint(repo))
    }

    /// Exchange a fresh App JWT for an installation access token
    async fn exchange(&self, key: &PrivateKey, endpoint: &str) -> Result<InstallationAccessToken> {
        info!("🔑 Exchanging JWT for installation token");

        let jwt = jwt::sign(key, &self.credentials.app_id, Utc::now())?;
        let token: InstallationAccessToken = self.client.post(endpoint, &jwt).await?;

        info!(expires_at = ?token.expires_at, "✅ Installation token issued");
        Ok(token)
    }
}
