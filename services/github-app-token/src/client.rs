//! GitHub REST API client
//!
//! Thin authenticated JSON client: one request per call, no retries.

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{Result, TokenError};

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

/// GitHub API client authenticating with a bearer token per request
pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    /// Build a client honouring the configured timeout and user agent
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` and decode the JSON response body into `T`
    pub async fn get<T: DeserializeOwned>(&self, url: &str, bearer: &str) -> Result<T> {
        self.request(Method::GET, url, bearer).await
    }

    /// POST to `url` with no body and decode the JSON response body into `T`
    pub async fn post<T: DeserializeOwned>(&self, url: &str, bearer: &str) -> Result<T> {
        self.request(Method::POST, url, bearer).await
    }

    /// Send an authenticated request and decode the JSON response.
    ///
    /// Any status outside 200-299 is a [`TokenError::Request`] carrying the
    /// status line and response body.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        bearer: &str,
    ) -> Result<T> {
        debug!(method = %method, url = %url, "Sending GitHub API request");

        let response = self
            .client
            .request(method, url)
            .header("Authorization", format!("Bearer {}", bearer))
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "GitHub API responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TokenError::request(format!(
                "GitHub API error ({}) for {}: {}",
                status, url, body
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| TokenError::Request {
                message: format!("failed to decode response from {}", url),
                source: Some(e),
            })
    }
}
