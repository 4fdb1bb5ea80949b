//! Domain types and pure logic for moodlens.
//!
//! Everything here is network-free: labels and normalization, the tally and
//! insight, the aggregator, the fallback corpus, CSV export and evaluation,
//! plus environment-driven configuration.

pub mod aggregate;
pub mod app_config;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod export;
pub mod mock_corpus;
pub mod tally;
pub mod types;

pub use aggregate::aggregate;
pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use evaluation::{evaluate, ConfusionMatrix, Evaluation};
pub use export::{read_csv, write_csv, ExportRow, DEFAULT_EXPORT_FILE};
pub use mock_corpus::{sample_mock, sample_mock_with, MOCK_CORPUS};
pub use tally::{Insight, SentimentTally};
pub use types::{
    AnalysisResult, Classification, DataOrigin, FallbackReason, ScoredItem, SentimentLabel,
    SourceBatch, SourceKind,
};
