//! Top-level comment threads for a video (`YouTube` Data API v3).

use std::sync::LazyLock;

use moodlens_core::{sample_mock, FallbackReason, SourceBatch, SourceKind};
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;

use super::{build_http_client, clamp_count, normalize_base_url, redact_url, Secret};
use crate::error::SentimentError;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";
const COMMENT_THREADS_PATH: &str = "/youtube/v3/commentThreads";

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("valid video id regex"));

/// Pull the first 11-character video id out of a watch, share or embed URL.
#[must_use]
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

#[derive(Debug, Deserialize)]
struct CommentThreadsResponse {
    #[serde(default)]
    items: Vec<CommentThread>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: ThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    text_display: String,
}

/// Client for the `commentThreads.list` endpoint, authenticated with an API key.
pub struct YoutubeCommentsClient {
    client: Client,
    api_key: Secret,
    base_url: String,
}

impl YoutubeCommentsClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::InvalidInput`] for a blank key and
    /// [`SentimentError::Http`] if the HTTP client cannot be built.
    pub fn new(api_key: Secret, timeout_secs: u64) -> Result<Self, SentimentError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`YoutubeCommentsClient::new`].
    pub fn with_base_url(
        api_key: Secret,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SentimentError> {
        if api_key.is_blank() {
            return Err(SentimentError::InvalidInput(
                "a YouTube API key is required".to_string(),
            ));
        }

        Ok(Self {
            client: build_http_client(timeout_secs, "moodlens/0.1 (sentiment-dashboard)")?,
            api_key,
            base_url: normalize_base_url(base_url),
        })
    }

    /// Fetch up to `count` top-level comments for the video in `video_url`.
    ///
    /// Request, status and decode failures all degrade to `count` mock texts.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::InvalidInput`] when no video id can be found
    /// in `video_url`. No request is issued in that case.
    pub async fn fetch_comments(
        &self,
        video_url: &str,
        count: usize,
    ) -> Result<SourceBatch, SentimentError> {
        let video_id = extract_video_id(video_url).ok_or_else(|| {
            SentimentError::InvalidInput(format!("no video id found in URL {video_url:?}"))
        })?;
        let count = clamp_count(count);

        match self.fetch_live(video_id, count).await {
            Ok(texts) => {
                tracing::debug!(
                    source = "youtube",
                    video_id,
                    count = texts.len(),
                    "collected comments"
                );
                Ok(SourceBatch::live(SourceKind::Youtube, texts))
            }
            Err(e) => {
                tracing::warn!(
                    source = "youtube",
                    video_id,
                    error = %e,
                    "comment fetch failed; substituting mock texts"
                );
                Ok(SourceBatch::mock(
                    SourceKind::Youtube,
                    sample_mock(count),
                    FallbackReason::RequestFailed(e.to_string()),
                ))
            }
        }
    }

    async fn fetch_live(&self, video_id: &str, count: usize) -> Result<Vec<String>, SentimentError> {
        let url = format!("{}{COMMENT_THREADS_PATH}", self.base_url);
        let max_results = count.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("videoId", video_id),
                ("maxResults", max_results.as_str()),
                ("textFormat", "plainText"),
                ("key", self.api_key.expose()),
            ])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(redact_url)?;

        let body = response.text().await.map_err(redact_url)?;
        let parsed: CommentThreadsResponse =
            serde_json::from_str(&body).map_err(|e| SentimentError::Deserialize {
                context: format!("commentThreads(videoId={video_id})"),
                source: e,
            })?;

        Ok(parsed
            .items
            .into_iter()
            .take(count)
            .map(|thread| thread.snippet.top_level_comment.snippet.text_display)
            .collect())
    }
}
