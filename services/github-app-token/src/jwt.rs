//! GitHub App JWT signing
//!
//! Every API call made as the App gets its own freshly timestamped JWT.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, Header};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::key::PrivateKey;

/// Seconds `iat` is backdated to absorb clock skew
pub const ISSUED_AT_SKEW_SECS: i64 = 60;

/// Seconds a JWT stays valid after the signing instant
pub const EXPIRES_AFTER_SECS: i64 = 180;

/// JWT claims for GitHub App authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppClaims {
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issuer (GitHub App ID)
    pub iss: String,
}

impl AppClaims {
    /// Claims valid from one minute before `now` until three minutes after
    pub fn new(app_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            iat: (now - Duration::seconds(ISSUED_AT_SKEW_SECS)).timestamp(),
            exp: (now + Duration::seconds(EXPIRES_AFTER_SECS)).timestamp(),
            iss: app_id.to_string(),
        }
    }
}

/// Sign an RS256 App JWT for `app_id` timestamped at `now`.
///
/// # Returns
/// The compact `header.payload.signature` token string
pub fn sign(key: &PrivateKey, app_id: &str, now: DateTime<Utc>) -> Result<String> {
    let claims = AppClaims::new(app_id, now);
    debug!(iss = %claims.iss, iat = claims.iat, exp = claims.exp, "Signing app JWT");

    let token = encode(&Header::new(Algorithm::RS256), &claims, key.encoding_key())?;
    Ok(token)
}
