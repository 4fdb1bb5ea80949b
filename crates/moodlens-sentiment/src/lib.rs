//! Text collection and sentiment classification for moodlens.
//!
//! Collects short texts from recent-post search, video comment threads or
//! scraped page paragraphs, classifies them through an external inference
//! server, and aggregates the labels into an [`moodlens_core::AnalysisResult`].

pub mod classifier;
pub mod error;
pub mod pipeline;
pub mod sources;

pub use classifier::{shared_classifier, InferenceClassifier, SentimentClassifier};
pub use error::SentimentError;
pub use pipeline::{analyze, run_analysis};
pub use sources::{
    clamp_count, collect_texts, extract_paragraphs, extract_video_id, PageScraper, Secret,
    SourceRequest, TwitterSearchClient, YoutubeCommentsClient, PAGE_SIZE_CEILING,
};
