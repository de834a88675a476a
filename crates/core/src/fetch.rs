//! Page fetching over HTTP.
//!
//! This module provides the HTTP side of the extraction job: a single GET
//! per article URL with a fixed timeout, returning the response body as text.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{Result, ScrutariError};

/// HTTP client configuration for fetching article pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 15,
            user_agent: "Mozilla/5.0 (compatible; Scrutari/1.0; +https://github.com/stormlightlabs/scrutari)"
                .to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// This function performs an HTTP GET request and returns the response body
/// as text. It follows redirects, respects the configured timeout, and uses
/// a browser-like User-Agent for better compatibility.
///
/// # Errors
///
/// Returns [`ScrutariError::Timeout`] when the request exceeds the configured
/// timeout, [`ScrutariError::HttpStatus`] for a non-2xx response, and
/// [`ScrutariError::HttpError`] for other transport failures.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| ScrutariError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(ScrutariError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(ScrutariError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ScrutariError::Timeout { timeout: config.timeout }
            } else {
                ScrutariError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrutariError::HttpStatus { status: status.as_u16() });
    }

    let content = response.text().await.map_err(|e| {
        if e.is_timeout() {
            ScrutariError::Timeout { timeout: config.timeout }
        } else {
            ScrutariError::HttpError(e)
        }
    })?;

    Ok(content)
}
