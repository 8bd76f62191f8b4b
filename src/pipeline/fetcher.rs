//! HTTP fetcher implementation
//!
//! This module handles the single outbound request made per quiz, including:
//! - Building the HTTP client with the configured user agent and timeouts
//! - Validating the article URL
//! - Collapsing transport and status failures into one error type

use crate::config::FetcherConfig;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors raised while retrieving an article
///
/// Each variant renders as a human-readable cause; callers treat them all as
/// one failure condition.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{status} {reason} for url: {url}")]
    Status {
        status: u16,
        reason: String,
        url: String,
    },

    #[error("Request timed out for url: {url}")]
    Timeout { url: String },

    #[error("Too many redirects from url: {url}")]
    RedirectLimit { url: String },

    #[error("Network error for url: {url}: {message}")]
    Network { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    let redirect = if config.max_redirects == 0 {
        Policy::none()
    } else {
        Policy::limited(config.max_redirects)
    };

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(redirect)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Retrieves article markup over HTTP
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a fetcher from configuration
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let client = build_http_client(config).map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// Fetches the markup of an article
    ///
    /// Sends exactly one GET request. There are no retries: the first
    /// failure is returned to the caller.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute http(s) URL of the article
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The response body
    /// * `Err(FetchError)` - Invalid URL, non-success status, timeout, or
    ///   transport failure
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let target = validate_url(url)?;

        tracing::debug!("Fetching article: {}", target);

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: describe_status(status),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await.map_err(|e| classify_error(url, e))?;
        tracing::debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(body)
    }
}

/// Parses the URL and checks it is something the client can request
fn validate_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

/// Renders a status as e.g. `Client Error: Not Found`
fn describe_status(status: StatusCode) -> String {
    let class = if status.is_client_error() {
        "Client Error"
    } else if status.is_server_error() {
        "Server Error"
    } else {
        "Unexpected Status"
    };

    format!(
        "{}: {}",
        class,
        status.canonical_reason().unwrap_or("Unknown")
    )
}

fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_redirect() {
        FetchError::RedirectLimit {
            url: url.to_string(),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}
