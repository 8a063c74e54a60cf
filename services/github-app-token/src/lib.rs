//! GitHub App Installation Token Library
//!
//! Exchanges a GitHub App's private key for a short-lived installation access
//! token scoped to one repository's installation, so CI pipelines can act as
//! the App instead of a personal token.
//!
//! ## Flow
//!
//! 1. Load the App's PKCS#1 private key ([`key`])
//! 2. Sign an App JWT and look up `GET /repos/{owner}/{repo}/installation`
//!    to discover the installation's `access_tokens_url` ([`jwt`], [`client`])
//! 3. Sign a fresh App JWT and `POST` it to that URL for the token ([`exchange`])
//!
//! ## Example
//!
//! ```bash
//! TOKEN=$(gh-app-token \
//!   --app $GITHUB_APP_ID \
//!   --pem /path/to/key.pem \
//!   --org lornu-ai \
//!   --repo lornu.ai)
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod exchange;
pub mod jwt;
pub mod key;

pub use config::{ApiConfig, AppCredentials};
pub use error::TokenError;
pub use exchange::{InstallationAccessToken, TokenExchanger};
