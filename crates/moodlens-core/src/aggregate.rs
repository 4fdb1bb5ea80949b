//! Builds an [`AnalysisResult`] from texts and their parallel classifications.

use chrono::Utc;

use crate::error::CoreError;
use crate::tally::SentimentTally;
use crate::types::{AnalysisResult, Classification, ScoredItem, SourceBatch};

/// Pair each text with its classification and tally the labels.
///
/// The item table preserves input order and the tally total always equals
/// the number of items.
///
/// # Errors
///
/// Returns [`CoreError::LengthMismatch`] if the classifier did not return
/// exactly one classification per text.
pub fn aggregate(
    batch: SourceBatch,
    classifications: &[Classification],
) -> Result<AnalysisResult, CoreError> {
    if batch.texts.len() != classifications.len() {
        return Err(CoreError::LengthMismatch {
            texts: batch.texts.len(),
            classifications: classifications.len(),
        });
    }

    let mut tally = SentimentTally::default();
    let items: Vec<ScoredItem> = batch
        .texts
        .into_iter()
        .zip(classifications)
        .map(|(text, c)| {
            tally.record(c.label);
            ScoredItem {
                text,
                label: c.label,
                score: c.score,
            }
        })
        .collect();

    Ok(AnalysisResult {
        source: batch.source,
        origin: batch.origin,
        items,
        tally,
        analyzed_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DataOrigin, FallbackReason, SentimentLabel, SourceKind};

    fn batch(texts: &[&str]) -> SourceBatch {
        SourceBatch::live(
            SourceKind::Twitter,
            texts.iter().map(ToString::to_string).collect(),
        )
    }

    #[test]
    fn tally_total_matches_item_count() {
        let texts = ["great", "awful", "meh", "love it"];
        let cs = [
            Classification::from_raw("POSITIVE", 0.9),
            Classification::from_raw("NEGATIVE", 0.8),
            Classification::from_raw("LABEL_2", 0.5),
            Classification::from_raw("positive", 0.99),
        ];
        let result = aggregate(batch(&texts), &cs).unwrap();
        assert_eq!(result.items.len(), 4);
        assert_eq!(result.tally.total(), result.items.len());
        assert_eq!(result.tally, SentimentTally::new(2, 1, 1));
    }

    #[test]
    fn preserves_input_order_and_scores() {
        let texts = ["first", "second"];
        let cs = [
            Classification::from_raw("NEGATIVE", 0.61),
            Classification::from_raw("POSITIVE", 0.72),
        ];
        let result = aggregate(batch(&texts), &cs).unwrap();
        assert_eq!(result.items[0].text, "first");
        assert_eq!(result.items[0].label, SentimentLabel::Negative);
        assert!((result.items[0].score - 0.61).abs() < f32::EPSILON);
        assert_eq!(result.items[1].text, "second");
        assert_eq!(result.items[1].label, SentimentLabel::Positive);
    }

    #[test]
    fn carries_source_and_origin_through() {
        let b = SourceBatch::mock(
            SourceKind::Youtube,
            vec!["x".to_string()],
            FallbackReason::RateLimited,
        );
        let result = aggregate(b, &[Classification::from_raw("NEUTRAL", 0.4)]).unwrap();
        assert_eq!(result.source, SourceKind::Youtube);
        assert_eq!(
            result.origin,
            DataOrigin::Mock {
                reason: FallbackReason::RateLimited
            }
        );
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = aggregate(batch(&["a", "b"]), &[Classification::from_raw("POSITIVE", 1.0)])
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::LengthMismatch {
                texts: 2,
                classifications: 1
            }
        ));
    }
}
