//! Analysis run orchestration: source → classify → aggregate.

use moodlens_core::{aggregate, AnalysisResult, AppConfig, SourceBatch};

use crate::classifier::SentimentClassifier;
use crate::error::SentimentError;
use crate::sources::{collect_texts, SourceRequest};

/// Classify a batch and aggregate it into an [`AnalysisResult`].
///
/// # Errors
///
/// - [`SentimentError::NoData`] if the batch is empty. Nothing is analyzed.
/// - Any classifier error, unchanged. There is no fallback classifier.
/// - [`SentimentError::Core`] if the classifier broke the one-output-per-input contract.
pub async fn run_analysis<C: SentimentClassifier>(
    classifier: &C,
    batch: SourceBatch,
) -> Result<AnalysisResult, SentimentError> {
    if batch.texts.is_empty() {
        tracing::warn!(source = %batch.source, "no texts collected; skipping analysis");
        return Err(SentimentError::NoData(batch.source));
    }

    let classifications = classifier.classify(&batch.texts).await?;
    let result = aggregate(batch, &classifications)?;

    tracing::info!(
        source = %result.source,
        mock = result.origin.is_mock(),
        items = result.items.len(),
        positive = result.tally.positive,
        negative = result.tally.negative,
        neutral = result.tally.neutral,
        "analysis complete"
    );

    Ok(result)
}

/// Fetch texts for `request` and analyze them in one run.
///
/// # Errors
///
/// Propagates source validation and hard failures, [`SentimentError::NoData`],
/// and classifier failures.
pub async fn analyze<C: SentimentClassifier>(
    config: &AppConfig,
    classifier: &C,
    request: &SourceRequest,
    count: usize,
) -> Result<AnalysisResult, SentimentError> {
    let batch = collect_texts(config, request, count).await?;
    tracing::debug!(
        source = %batch.source,
        texts = batch.texts.len(),
        origin = ?batch.origin,
        "texts collected"
    );
    run_analysis(classifier, batch).await
}
