//! Keyword search over recent posts (Twitter/X API v2).

use moodlens_core::{sample_mock, FallbackReason, SourceBatch, SourceKind};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{build_http_client, clamp_count, normalize_base_url, Secret};
use crate::error::SentimentError;

const DEFAULT_BASE_URL: &str = "https://api.twitter.com";
const SEARCH_PATH: &str = "/2/tweets/search/recent";
/// The search endpoint rejects `max_results` below this.
const API_MIN_RESULTS: usize = 10;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Tweet>,
}

#[derive(Debug, Deserialize)]
struct Tweet {
    text: String,
}

/// Client for the recent-search endpoint, authenticated with a bearer token.
pub struct TwitterSearchClient {
    client: Client,
    bearer_token: Secret,
    base_url: String,
}

impl TwitterSearchClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::InvalidInput`] for a blank token and
    /// [`SentimentError::Http`] if the HTTP client cannot be built.
    pub fn new(bearer_token: Secret, timeout_secs: u64) -> Result<Self, SentimentError> {
        Self::with_base_url(bearer_token, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`TwitterSearchClient::new`].
    pub fn with_base_url(
        bearer_token: Secret,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SentimentError> {
        if bearer_token.is_blank() {
            return Err(SentimentError::InvalidInput(
                "a Twitter bearer token is required".to_string(),
            ));
        }

        Ok(Self {
            client: build_http_client(timeout_secs, "moodlens/0.1 (sentiment-dashboard)")?,
            bearer_token,
            base_url: normalize_base_url(base_url),
        })
    }

    /// Search recent posts for `keyword`, returning at most `count` texts.
    ///
    /// A 429 response substitutes `count` mock texts (origin `Mock`). Any other
    /// non-success status is a hard failure.
    ///
    /// # Errors
    ///
    /// - [`SentimentError::InvalidInput`] for a blank keyword.
    /// - [`SentimentError::SearchStatus`] for non-429 error statuses.
    /// - [`SentimentError::Http`] on network failure.
    /// - [`SentimentError::Deserialize`] for a malformed success body.
    pub async fn search(&self, keyword: &str, count: usize) -> Result<SourceBatch, SentimentError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(SentimentError::InvalidInput(
                "search keyword must not be empty".to_string(),
            ));
        }

        let count = clamp_count(count);
        let max_results = count.max(API_MIN_RESULTS).to_string();
        let url = format!("{}{SEARCH_PATH}", self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.bearer_token.expose())
            .query(&[
                ("query", keyword),
                ("max_results", max_results.as_str()),
                ("tweet.fields", "text"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!(
                source = "twitter",
                keyword,
                count,
                "rate limit hit; substituting mock texts"
            );
            return Ok(SourceBatch::mock(
                SourceKind::Twitter,
                sample_mock(count),
                FallbackReason::RateLimited,
            ));
        }

        if !status.is_success() {
            tracing::error!(source = "twitter", status = status.as_u16(), "search failed");
            return Err(SentimentError::SearchStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SentimentError::Deserialize {
                context: format!("tweets/search/recent(query={keyword})"),
                source: e,
            })?;

        let texts: Vec<String> = parsed.data.into_iter().take(count).map(|t| t.text).collect();
        tracing::debug!(source = "twitter", keyword, count = texts.len(), "collected posts");

        Ok(SourceBatch::live(SourceKind::Twitter, texts))
    }
}
