//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the configured user agent, timeout and
//!   redirect policy
//! - Issuing one GET per URL
//! - Classifying transport failures
//!
//! There is no retry: one failed fetch is final for that URL.

use crate::config::RunConfig;
use crate::{FetchError, FetchErrorKind};
use reqwest::header::HeaderMap;
use reqwest::{redirect::Policy, Client, StatusCode};
use url::Url;

/// A successfully fetched response
#[derive(Debug, Clone)]
pub struct Page {
    /// URL that was requested
    pub url: String,
    /// URL of the response that was returned, after any followed redirects
    pub final_url: Url,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl Page {
    /// Status line as `<code> <reason>`, or just the code for unknown statuses
    pub fn status_line(&self) -> String {
        match self.status.canonical_reason() {
            Some(reason) => format!("{} {}", self.status.as_u16(), reason),
            None => self.status.as_u16().to_string(),
        }
    }
}

/// Result of a fetch operation
pub type FetchResult = Result<Page, FetchError>;

/// Builds an HTTP client with proper configuration
///
/// With redirects disabled, a 3xx response is returned to the caller as-is.
///
/// # Arguments
///
/// * `config` - The run configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use crawsan::config::RunConfig;
/// use crawsan::crawler::build_http_client;
///
/// let client = build_http_client(&RunConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &RunConfig) -> Result<Client, reqwest::Error> {
    let redirect = if config.follow_redirects {
        Policy::default()
    } else {
        Policy::none()
    };

    let mut builder = Client::builder()
        .user_agent(config.user_agent.as_str())
        .redirect(redirect)
        .gzip(true)
        .brotli(true);

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    builder.build()
}

/// Fetches a URL with one GET request
///
/// Never panics on network problems: every transport failure, including a
/// timeout while reading the body, comes back as a `FetchError` tagged with
/// `url`. HTTP error statuses (4xx, 5xx) are successful fetches.
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    tracing::debug!("Fetching {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let final_url = response.url().clone();
    let status = response.status();
    let headers = response.headers().clone();

    let body = response
        .text()
        .await
        .map_err(|e| classify_error(url, e))?;

    tracing::debug!("Fetched {} ({})", url, status);

    Ok(Page {
        url: url.to_string(),
        final_url,
        status,
        headers,
        body,
    })
}

/// Maps a reqwest error onto a `FetchError` for `url`
///
/// reqwest's own URL is stripped from the message; `FetchError` already
/// carries it.
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    let kind = if error.is_timeout() {
        FetchErrorKind::Timeout
    } else if error.is_connect() {
        FetchErrorKind::Connect
    } else if error.is_redirect() {
        FetchErrorKind::Redirect
    } else if error.is_builder() {
        FetchErrorKind::InvalidUrl
    } else if error.is_body() || error.is_decode() {
        FetchErrorKind::Body
    } else {
        FetchErrorKind::Request
    };

    let error = error.without_url();
    FetchError::new(url, kind, error_chain(&error))
}

/// Joins an error with its sources, e.g. `error sending request: connection refused`
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
