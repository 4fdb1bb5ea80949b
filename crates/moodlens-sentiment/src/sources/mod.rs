//! Text source adapters.
//!
//! Each adapter turns a source-specific query into a [`SourceBatch`]. When an
//! adapter substitutes canned texts the batch origin says so; a hard failure
//! is an error and never an empty "successful" batch.

mod twitter;
mod webpage;
mod youtube;

use std::fmt;
use std::time::Duration;

use moodlens_core::{AppConfig, SourceBatch, SourceKind};
use reqwest::Client;

use crate::error::SentimentError;

pub use twitter::TwitterSearchClient;
pub use webpage::{extract_paragraphs, PageScraper, MIN_PARAGRAPH_CHARS};
pub use youtube::{extract_video_id, YoutubeCommentsClient};

/// Largest page any collaborator API returns in one request.
pub const PAGE_SIZE_CEILING: usize = 100;

/// Clamp a requested item count into `1..=PAGE_SIZE_CEILING`.
#[must_use]
pub fn clamp_count(requested: usize) -> usize {
    requested.clamp(1, PAGE_SIZE_CEILING)
}

/// A user-supplied credential. Never logged or printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[redacted]")
    }
}

/// What to fetch, with the credentials the chosen source needs.
#[derive(Debug, Clone)]
pub enum SourceRequest {
    Search {
        keyword: String,
        bearer_token: Secret,
    },
    Comments {
        video_url: String,
        api_key: Secret,
    },
    Page {
        url: String,
    },
}

impl SourceRequest {
    #[must_use]
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Search { .. } => SourceKind::Twitter,
            Self::Comments { .. } => SourceKind::Youtube,
            Self::Page { .. } => SourceKind::Website,
        }
    }
}

/// Fetch up to `count` texts for `request` using the configured endpoints.
///
/// # Errors
///
/// Returns [`SentimentError::InvalidInput`] for local validation failures and
/// whatever hard failure the selected adapter surfaces.
pub async fn collect_texts(
    config: &AppConfig,
    request: &SourceRequest,
    count: usize,
) -> Result<SourceBatch, SentimentError> {
    match request {
        SourceRequest::Search {
            keyword,
            bearer_token,
        } => {
            let client = TwitterSearchClient::with_base_url(
                bearer_token.clone(),
                config.request_timeout_secs,
                &config.twitter_api_url,
            )?;
            client.search(keyword, count).await
        }
        SourceRequest::Comments { video_url, api_key } => {
            let client = YoutubeCommentsClient::with_base_url(
                api_key.clone(),
                config.request_timeout_secs,
                &config.youtube_api_url,
            )?;
            client.fetch_comments(video_url, count).await
        }
        SourceRequest::Page { url } => {
            let scraper =
                PageScraper::new(config.request_timeout_secs, &config.scraper_user_agent)?;
            scraper.scrape(url, count).await
        }
    }
}

pub(crate) fn build_http_client(
    timeout_secs: u64,
    user_agent: &str,
) -> Result<Client, SentimentError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// The API key travels as a query parameter, so request URLs must not reach
/// logs or user-facing messages.
pub(crate) fn redact_url(err: reqwest::Error) -> SentimentError {
    SentimentError::Http(err.without_url())
}

pub(crate) fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_count_caps_at_page_ceiling() {
        assert_eq!(clamp_count(500), PAGE_SIZE_CEILING);
        assert_eq!(clamp_count(100), 100);
        assert_eq!(clamp_count(20), 20);
        assert_eq!(clamp_count(0), 1);
    }

    #[test]
    fn secret_debug_is_redacted() {
        let request = SourceRequest::Search {
            keyword: "#AI".to_string(),
            bearer_token: Secret::new("super-secret-token"),
        };
        let rendered = format!("{request:?}");
        assert!(!rendered.contains("super-secret-token"));
        assert!(rendered.contains("[redacted]"));
    }

    #[test]
    fn request_kind_matches_source() {
        let page = SourceRequest::Page {
            url: "https://example.com".to_string(),
        };
        assert_eq!(page.kind(), SourceKind::Website);
        let comments = SourceRequest::Comments {
            video_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            api_key: Secret::new("k"),
        };
        assert_eq!(comments.kind(), SourceKind::Youtube);
    }

    #[test]
    fn blank_secret_is_detected() {
        assert!(Secret::new("   ").is_blank());
        assert!(!Secret::new("abc").is_blank());
    }
}
