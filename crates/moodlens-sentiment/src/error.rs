use moodlens_core::{CoreError, SourceKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Local validation failure. No request was issued.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("search API returned status {status}")]
    SearchStatus { status: u16 },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The source produced no texts, so nothing was analyzed.
    #[error("no texts available from {0}; analysis not performed")]
    NoData(SourceKind),

    #[error("classifier error: {0}")]
    Classifier(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
