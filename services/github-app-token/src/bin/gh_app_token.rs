//! GitHub App Installation Token Generator
//!
//! Prints a short-lived installation access token for a repository that the
//! GitHub App is installed on.
//!
//! ## Usage
//! ```bash
//! # With command line arguments
//! gh-app-token \
//!   --app 123456 \
//!   --pem ./key.pem \
//!   --org lornu-ai \
//!   --repo lornu.ai
//!
//! # With environment variables
//! GITHUB_APP_ID=123456 \
//! GITHUB_PRIVATE_KEY_PATH=./key.pem \
//! GITHUB_ORG=lornu-ai \
//! GITHUB_REPO=lornu.ai \
//! gh-app-token --format json
//! ```

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use github_app_token::{
    ApiConfig, AppCredentials, InstallationAccessToken, TokenError, TokenExchanger,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// GitHub App Installation Token Generator
#[derive(Parser, Debug)]
#[command(name = "gh-app-token")]
#[command(about = "Exchange a GitHub App private key for an installation access token")]
#[command(version)]
#[command(after_help = "--app, --pem, --org and --repo fall back to the GITHUB_APP_ID, \
GITHUB_PRIVATE_KEY_PATH, GITHUB_ORG and GITHUB_REPO environment variables. \
A value missing or empty in both places is reported as \"<field> is not set\".")]
struct Args {
    /// AppID on GitHub Apps
    #[arg(long, env = "GITHUB_APP_ID")]
    app: Option<String>,

    /// Path to the PEM file of the App's private key
    #[arg(long, env = "GITHUB_PRIVATE_KEY_PATH")]
    pem: Option<String>,

    /// Owner or organization name of the repository
    #[arg(long, env = "GITHUB_ORG")]
    org: Option<String>,

    /// Repository name
    #[arg(long, env = "GITHUB_REPO")]
    repo: Option<String>,

    /// GitHub API root (GitHub Enterprise Server: https://HOST/api/v3)
    #[arg(long, env = "GITHUB_API_URL", default_value = github_app_token::config::DEFAULT_API_URL)]
    api_url: String,

    /// Per-request timeout in seconds
    #[arg(
        long,
        env = "GITHUB_HTTP_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Output format
    #[arg(long, value_enum, default_value = "token")]
    format: OutputFormat,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// The bare token
    Token,
    /// JSON object with token and expiry
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging; stdout is reserved for the token
    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let credentials = match AppCredentials::new(
        args.app.clone(),
        args.pem.clone(),
        args.org.clone(),
        args.repo.clone(),
    ) {
        Ok(credentials) => credentials,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let api = ApiConfig::default()
        .base_url(args.api_url.as_str())
        .timeout(Duration::from_secs(args.timeout));

    let output = match fetch(credentials, api).await {
        Ok(token) => render(&token, &args.format),
        Err(err) => Err(err.into()),
    };

    match output {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error occurred: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn fetch(
    credentials: AppCredentials,
    api: ApiConfig,
) -> Result<InstallationAccessToken, TokenError> {
    TokenExchanger::new(credentials, api)?.get().await
}

fn render(token: &InstallationAccessToken, format: &OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Token => token.token.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(token)?,
    };
    Ok(output)
}
