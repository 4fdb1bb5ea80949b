//! `analyze` command: one source fetch, one classification run, one render.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use moodlens_core::{write_csv, AnalysisResult, AppConfig};
use moodlens_sentiment::{analyze, shared_classifier, Secret, SentimentError, SourceRequest};

use crate::render::render_result;

/// Options shared by every source.
#[derive(Debug, Clone, Args)]
pub struct AnalyzeOptions {
    /// Number of comments, posts or paragraphs to analyze
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(10..=100))]
    pub count: u16,

    /// Include per-item confidence scores in the table and CSV export
    #[arg(long)]
    pub show_confidence: bool,

    /// Write the per-item results to this CSV file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

/// Which source to analyze.
#[derive(Debug, Subcommand)]
pub enum SourceCommand {
    /// Recent posts matching a keyword or hashtag
    Twitter {
        /// Keyword or hashtag to search for
        #[arg(long, default_value = "#AI")]
        keyword: String,

        /// API bearer token
        #[arg(long, env = "TWITTER_BEARER_TOKEN", hide_env_values = true)]
        bearer_token: Option<String>,

        #[command(flatten)]
        options: AnalyzeOptions,
    },
    /// Top-level comments on a video
    Youtube {
        /// Video URL (watch, share or embed link)
        #[arg(long)]
        url: Option<String>,

        /// Data API key
        #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        #[command(flatten)]
        options: AnalyzeOptions,
    },
    /// Paragraphs scraped from a web page
    Website {
        /// Page URL to scrape
        #[arg(long)]
        url: Option<String>,

        #[command(flatten)]
        options: AnalyzeOptions,
    },
}

impl SourceCommand {
    /// Split into the source request and the display options.
    ///
    /// Missing values become blanks here and are rejected by the adapters,
    /// before any request is made.
    pub(crate) fn into_request(self) -> (SourceRequest, AnalyzeOptions) {
        match self {
            Self::Twitter {
                keyword,
                bearer_token,
                options,
            } => (
                SourceRequest::Search {
                    keyword,
                    bearer_token: Secret::new(bearer_token.unwrap_or_default()),
                },
                options,
            ),
            Self::Youtube {
                url,
                api_key,
                options,
            } => (
                SourceRequest::Comments {
                    video_url: url.unwrap_or_default(),
                    api_key: Secret::new(api_key.unwrap_or_default()),
                },
                options,
            ),
            Self::Website { url, options } => (
                SourceRequest::Page {
                    url: url.unwrap_or_default(),
                },
                options,
            ),
        }
    }
}

/// Run one analysis and print (and optionally export) the result.
///
/// An empty source is reported as a warning, not a failure.
///
/// # Errors
///
/// Returns an error for local validation failures, search API failures,
/// classifier failures, and export I/O errors.
pub(crate) async fn run_analyze(config: &AppConfig, source: SourceCommand) -> anyhow::Result<()> {
    let (request, options) = source.into_request();
    let classifier = shared_classifier(config)?;

    let result = match analyze(config, classifier, &request, usize::from(options.count)).await {
        Ok(result) => result,
        Err(SentimentError::NoData(kind)) => {
            eprintln!("warning: no data returned from {kind}; nothing to analyze");
            return Ok(());
        }
        Err(SentimentError::SearchStatus { status }) => {
            eprintln!("warning: no data to analyze");
            anyhow::bail!("search API error: HTTP {status}");
        }
        Err(e) => return Err(e.into()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_result(&mut out, &result, options.show_confidence)?;

    if let Some(path) = &options.csv {
        export_to(path, &result, options.show_confidence)?;
        writeln!(out, "\nreport written to {}", path.display())?;
    }

    Ok(())
}

fn export_to(path: &Path, result: &AnalysisResult, include_score: bool) -> anyhow::Result<()> {
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), &result.items, include_score)?;
    tracing::info!(path = %path.display(), rows = result.items.len(), "exported results");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> AnalyzeOptions {
        AnalyzeOptions {
            count: 20,
            show_confidence: false,
            csv: None,
        }
    }

    #[test]
    fn missing_credentials_become_blank_secrets() {
        let (request, _) = SourceCommand::Twitter {
            keyword: "#AI".to_string(),
            bearer_token: None,
            options: options(),
        }
        .into_request();
        match request {
            SourceRequest::Search { bearer_token, .. } => assert!(bearer_token.is_blank()),
            other => panic!("expected search request, got {other:?}"),
        }
    }

    #[test]
    fn youtube_request_carries_url_and_key() {
        let (request, _) = SourceCommand::Youtube {
            url: Some("https://youtu.be/dQw4w9WgXcQ".to_string()),
            api_key: Some("k".to_string()),
            options: options(),
        }
        .into_request();
        match request {
            SourceRequest::Comments { video_url, api_key } => {
                assert_eq!(video_url, "https://youtu.be/dQw4w9WgXcQ");
                assert_eq!(api_key.expose(), "k");
            }
            other => panic!("expected comments request, got {other:?}"),
        }
    }
}
