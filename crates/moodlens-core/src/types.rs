use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::tally::SentimentTally;

/// Output category of the classifier after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Fixed display and matrix order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Map a raw classifier label onto the three buckets.
    ///
    /// Only `POSITIVE` and `NEGATIVE` (any case) are recognized; everything
    /// else, including labels like `LABEL_1` or `mixed`, collapses to
    /// [`SentimentLabel::Neutral`].
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "POSITIVE" => Self::Positive,
            "NEGATIVE" => Self::Negative,
            _ => Self::Neutral,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        }
    }

    /// Position of this label in [`SentimentLabel::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Positive => 0,
            Self::Negative => 1,
            Self::Neutral => 2,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse of the canonical label names, used when reading exports back.
impl FromStr for SentimentLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "POSITIVE" => Ok(Self::Positive),
            "NEGATIVE" => Ok(Self::Negative),
            "NEUTRAL" => Ok(Self::Neutral),
            other => Err(CoreError::UnknownLabel(other.to_string())),
        }
    }
}

/// Normalized classifier output for one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: SentimentLabel,
    /// Confidence as reported by the classifier, passed through unmodified.
    pub score: f32,
}

impl Classification {
    /// Build from a raw `(label, score)` pair returned by a classifier.
    #[must_use]
    pub fn from_raw(label: &str, score: f32) -> Self {
        Self {
            label: SentimentLabel::normalize(label),
            score,
        }
    }
}

/// One text paired with its label and confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub text: String,
    pub label: SentimentLabel,
    pub score: f32,
}

/// Which collaborator a batch of texts was requested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Twitter,
    Youtube,
    Website,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Twitter => f.write_str("twitter"),
            Self::Youtube => f.write_str("youtube"),
            Self::Website => f.write_str("website"),
        }
    }
}

/// Why a source substituted canned texts for live ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FallbackReason {
    RateLimited,
    RequestFailed(String),
    NoQualifyingText,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => f.write_str("rate limit hit"),
            Self::RequestFailed(detail) => write!(f, "request failed: {detail}"),
            Self::NoQualifyingText => f.write_str("no qualifying text found on page"),
        }
    }
}

/// Where the texts of a batch came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum DataOrigin {
    Live,
    Mock { reason: FallbackReason },
}

impl DataOrigin {
    #[must_use]
    pub fn is_mock(&self) -> bool {
        matches!(self, Self::Mock { .. })
    }
}

/// Texts produced by one source adapter call.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceBatch {
    pub source: SourceKind,
    pub texts: Vec<String>,
    pub origin: DataOrigin,
}

impl SourceBatch {
    #[must_use]
    pub fn live(source: SourceKind, texts: Vec<String>) -> Self {
        Self {
            source,
            texts,
            origin: DataOrigin::Live,
        }
    }

    #[must_use]
    pub fn mock(source: SourceKind, texts: Vec<String>, reason: FallbackReason) -> Self {
        Self {
            source,
            texts,
            origin: DataOrigin::Mock { reason },
        }
    }
}

/// Result of one analysis run. Built per run and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub source: SourceKind,
    pub origin: DataOrigin,
    pub items: Vec<ScoredItem>,
    pub tally: SentimentTally,
    pub analyzed_at: DateTime<Utc>,
}
