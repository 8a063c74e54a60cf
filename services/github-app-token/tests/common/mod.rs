//! Shared helpers for the GitHub API double

#![allow(dead_code)]

use std::path::PathBuf;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const APP_ID: &str = "1234";
pub const TOKEN: &str = "ghs_abc123";
pub const INSTALLATION_PATH: &str = "/repos/acme/widgets/installation";
pub const ACCESS_TOKENS_PATH: &str = "/app/installations/1/access_tokens";

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(name)
}

pub fn pkcs1_key_path() -> PathBuf {
    fixture("app_key_pkcs1.pem")
}

/// Mount the installation lookup, pointing its token endpoint back at `server`
pub async fn mount_installation(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(INSTALLATION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "access_tokens_url": format!("{}{}", server.uri(), ACCESS_TOKENS_PATH),
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount the token exchange endpoint, expecting `calls` requests
pub async fn mount_access_tokens(server: &MockServer, calls: u64) {
    Mock::given(method("POST"))
        .and(path(ACCESS_TOKENS_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "token": TOKEN,
            "expires_at": "2026-10-18T12:00:00Z",
        })))
        .expect(calls)
        .mount(server)
        .await;
}

/// Claims of an App JWT as GitHub would see them
#[derive(Debug, serde::Deserialize)]
pub struct Claims {
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

/// Verify a bearer JWT against the fixture public key
pub fn verify_app_jwt(authorization: &str) -> Claims {
    let token = authorization
        .strip_prefix("Bearer ")
        .expect("bearer authorization");
    let public = std::fs::read(fixture("app_key_public.pem")).unwrap();

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_issuer(&[APP_ID]);
    decode::<Claims>(token, &DecodingKey::from_rsa_pem(&public).unwrap(), &validation)
        .unwrap()
        .claims
}
