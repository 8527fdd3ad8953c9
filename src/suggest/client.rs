//! HTTP client for the suggestion endpoint

use thiserror::Error;

use super::types::{Suggestion, SuggestionsPayload};

/// Path of the suggestion endpoint, relative to the storefront base URL
pub const SUGGESTIONS_PATH: &str = "/market/search/suggestions/";

/// Errors that can occur while fetching suggestions
///
/// All three collapse to the same policy at the worker boundary: log once
/// and leave the widget untouched.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// Transport-level failure (DNS, connect, read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Endpoint answered with a non-2xx status
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// Body was not the expected JSON shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Blocking client for `GET /market/search/suggestions/?q=<query>`
///
/// Lives on the fetch worker thread, so blocking requests never touch the
/// UI loop. No request timeout is configured; a request either resolves,
/// fails, or stays pending until the connection dies.
#[derive(Debug)]
pub struct SuggestClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl SuggestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::blocking::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch suggestions for a query
    ///
    /// The query goes out as a URL-encoded `q` parameter. The body is read
    /// as text first so a non-JSON response surfaces as `Parse`, not as a
    /// transport error.
    pub fn fetch(&self, query: &str) -> Result<Vec<Suggestion>, SuggestError> {
        let url = format!("{}{}", self.base_url, SUGGESTIONS_PATH);
        let response = self.http.get(&url).query(&[("q", query)]).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let payload: SuggestionsPayload = serde_json::from_str(&body)?;
        Ok(payload.suggestions)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
