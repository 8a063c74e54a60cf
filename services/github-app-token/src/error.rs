//! Errors raised while exchanging App credentials for an installation token

use thiserror::Error;

/// Errors that can occur during a token exchange.
///
/// Every variant is terminal: nothing in the exchange retries, so the first
/// error aborts the run and is reported once by the caller. Underlying causes
/// are kept as `source()` for `{:#}` style reporting.
#[derive(Debug, Error)]
pub enum TokenError {
    /// A required credential was absent or empty
    #[error("{0} is not set")]
    NotSet(&'static str),

    /// The private key file could not be read
    #[error("failed to read private key {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The private key file is not a PEM-encoded PKCS#1 RSA key
    #[error("invalid private key: {0}")]
    Format(String),

    /// The App JWT could not be signed
    #[error("failed to sign app JWT")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// Transport failure, non-2xx status or undecodable response body
    #[error("request failed: {message}")]
    Request {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The installation lookup did not return an `access_tokens_url`
    #[error("installation for {0} has no access_tokens_url")]
    MissingEndpoint(String),
}

impl TokenError {
    /// A request failure with no underlying transport error, e.g. a non-2xx status
    pub fn request(message: impl Into<String>) -> Self {
        TokenError::Request {
            message: message.into(),
            source: None,
        }
    }
}

impl From<reqwest::Error> for TokenError {
    fn from(err: reqwest::Error) -> Self {
        let message = match err.url() {
            Some(url) => format!("could not complete request to {}", url),
            None => "could not complete request".to_string(),
        };
        TokenError::Request {
            message,
            source: Some(err),
        }
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, TokenError>;
