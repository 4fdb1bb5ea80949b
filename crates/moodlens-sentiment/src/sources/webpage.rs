//! Paragraph scraping from arbitrary web pages.
//!
//! This is a length filter over `<p>` markup, not review detection: any
//! paragraph long enough to look like prose is kept, whatever it says.

use std::sync::LazyLock;

use moodlens_core::{sample_mock, FallbackReason, SourceBatch, SourceKind};
use regex::Regex;
use reqwest::{Client, Url};

use super::{build_http_client, clamp_count};
use crate::error::SentimentError;

/// Paragraphs must be strictly longer than this many characters.
pub const MIN_PARAGRAPH_CHARS: usize = 40;

static PARAGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p\s*>").expect("valid paragraph regex")
});
static SCRIPT_STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style|noscript)\b[^>]*>.*?</(script|style|noscript)\s*>")
        .expect("valid script/style regex")
});
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").expect("valid tags regex"));
static NUMERIC_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#([xX]?)([0-9a-fA-F]+);").expect("valid entity regex"));

/// Fetches pages with a browser-like `User-Agent`.
pub struct PageScraper {
    client: Client,
}

impl PageScraper {
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the HTTP client cannot be built.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SentimentError> {
        Ok(Self {
            client: build_http_client(timeout_secs, user_agent)?,
        })
    }

    /// Scrape up to `count` paragraphs from `url`.
    ///
    /// A failed fetch, or a page with no qualifying paragraph, degrades to
    /// `count` mock texts.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::InvalidInput`] if `url` is not an absolute
    /// `http(s)` URL. No request is issued in that case.
    pub async fn scrape(&self, url: &str, count: usize) -> Result<SourceBatch, SentimentError> {
        let parsed = validate_page_url(url)?;
        let count = clamp_count(count);

        let html = match self.fetch_html(parsed).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(
                    source = "website",
                    url,
                    error = %e,
                    "page fetch failed; substituting mock texts"
                );
                return Ok(SourceBatch::mock(
                    SourceKind::Website,
                    sample_mock(count),
                    FallbackReason::RequestFailed(e.to_string()),
                ));
            }
        };

        let mut paragraphs = extract_paragraphs(&html);
        if paragraphs.is_empty() {
            tracing::warn!(
                source = "website",
                url,
                "no paragraph qualified; substituting mock texts"
            );
            return Ok(SourceBatch::mock(
                SourceKind::Website,
                sample_mock(count),
                FallbackReason::NoQualifyingText,
            ));
        }

        paragraphs.truncate(count);
        tracing::debug!(
            source = "website",
            url,
            count = paragraphs.len(),
            "collected paragraphs"
        );
        Ok(SourceBatch::live(SourceKind::Website, paragraphs))
    }

    async fn fetch_html(&self, url: Url) -> Result<String, SentimentError> {
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}

fn validate_page_url(url: &str) -> Result<Url, SentimentError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(SentimentError::InvalidInput(
            "a page URL is required".to_string(),
        ));
    }

    let parsed = Url::parse(trimmed)
        .map_err(|e| SentimentError::InvalidInput(format!("invalid page URL {url:?}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SentimentError::InvalidInput(format!(
            "page URL must use http or https, got {:?}",
            parsed.scheme()
        )));
    }
    Ok(parsed)
}

/// Text of every `<p>` element longer than [`MIN_PARAGRAPH_CHARS`], in
/// document order.
#[must_use]
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    let without_scripts = SCRIPT_STYLE_RE.replace_all(html, " ");
    PARAGRAPH_RE
        .captures_iter(&without_scripts)
        .filter_map(|cap| cap.get(1))
        .map(|m| clean_text(m.as_str()))
        .filter(|text| text.chars().count() > MIN_PARAGRAPH_CHARS)
        .collect()
}

/// Strip tags, decode entities and collapse whitespace.
fn clean_text(input: &str) -> String {
    let no_tags = TAG_RE.replace_all(input, " ");
    decode_entities(&no_tags)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_entities(input: &str) -> String {
    let numeric = NUMERIC_ENTITY_RE.replace_all(input, |cap: &regex::Captures<'_>| {
        let radix = if cap[1].is_empty() { 10 } else { 16 };
        u32::from_str_radix(&cap[2], radix)
            .ok()
            .and_then(char::from_u32)
            .map_or_else(|| cap[0].to_string(), String::from)
    });

    // `&amp;` last so `&amp;lt;` stays a literal `&lt;`.
    numeric
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
