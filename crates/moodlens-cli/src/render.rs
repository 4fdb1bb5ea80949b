//! Terminal rendering of an analysis result.

use std::io::{self, Write};

use moodlens_core::{AnalysisResult, DataOrigin};

const BAR_WIDTH: usize = 30;
const TEXT_COLUMN_WIDTH: usize = 60;

/// Write the distribution, item table and insight for `result`.
///
/// The score column is only shown when `show_confidence` is set.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub(crate) fn render_result<W: Write>(
    out: &mut W,
    result: &AnalysisResult,
    show_confidence: bool,
) -> io::Result<()> {
    if let DataOrigin::Mock { reason } = &result.origin {
        writeln!(
            out,
            "warning: {reason}; showing sample data instead of live {} results",
            result.source
        )?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "Sentiment for {} ({} items, {})",
        result.source,
        result.tally.total(),
        result.analyzed_at.format("%Y-%m-%d %H:%M UTC")
    )?;
    writeln!(out)?;

    for (label, count) in result.tally.iter() {
        let share = result.tally.share(label);
        writeln!(
            out,
            "{:<10}{:>5}{:>8.1}%  {}",
            label.as_str(),
            count,
            share,
            bar(share)
        )?;
    }
    writeln!(out)?;

    if show_confidence {
        writeln!(out, "{:<width$}  {:<10}SCORE", "TEXT", "LABEL", width = TEXT_COLUMN_WIDTH)?;
    } else {
        writeln!(out, "{:<width$}  LABEL", "TEXT", width = TEXT_COLUMN_WIDTH)?;
    }
    for item in &result.items {
        let text = truncate(&item.text, TEXT_COLUMN_WIDTH);
        if show_confidence {
            writeln!(
                out,
                "{:<width$}  {:<10}{:.3}",
                text,
                item.label.as_str(),
                item.score,
                width = TEXT_COLUMN_WIDTH
            )?;
        } else {
            writeln!(
                out,
                "{:<width$}  {}",
                text,
                item.label.as_str(),
                width = TEXT_COLUMN_WIDTH
            )?;
        }
    }
    writeln!(out)?;

    let insight = result.tally.insight();
    let marker = if insight.is_negative() { "!" } else { "*" };
    writeln!(out, "{marker} {}", insight.message())?;
    Ok(())
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bar(share: f64) -> String {
    let filled = ((share / 100.0) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled.min(BAR_WIDTH))
}

/// Collapse whitespace and cut to `max` chars, marking the cut with `...`.
fn truncate(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let kept: String = flat.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use moodlens_core::{FallbackReason, ScoredItem, SentimentLabel, SentimentTally, SourceKind};

    fn result(origin: DataOrigin, items: Vec<ScoredItem>) -> AnalysisResult {
        let tally = items.iter().map(|i| i.label).collect::<SentimentTally>();
        AnalysisResult {
            source: SourceKind::Website,
            origin,
            items,
            tally,
            analyzed_at: Utc::now(),
        }
    }

    fn item(text: &str, label: SentimentLabel, score: f32) -> ScoredItem {
        ScoredItem {
            text: text.to_string(),
            label,
            score,
        }
    }

    fn render(result: &AnalysisResult, show_confidence: bool) -> String {
        let mut buf = Vec::new();
        render_result(&mut buf, result, show_confidence).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn live_result_has_no_warning_and_hides_scores() {
        let r = result(
            DataOrigin::Live,
            vec![
                item("great food", SentimentLabel::Positive, 0.91),
                item("slow service", SentimentLabel::Negative, 0.77),
                item("slow again", SentimentLabel::Negative, 0.66),
            ],
        );
        let text = render(&r, false);

        assert!(!text.contains("warning"));
        assert!(!text.contains("SCORE"));
        assert!(!text.contains("0.910"));
        assert!(text.contains("NEGATIVE"));
        assert!(text.contains("High negative sentiment detected"));
    }

    #[test]
    fn confidence_toggle_adds_score_column() {
        let r = result(
            DataOrigin::Live,
            vec![item("great food", SentimentLabel::Positive, 0.91)],
        );
        let text = render(&r, true);

        assert!(text.contains("SCORE"));
        assert!(text.contains("0.910"));
        assert!(text.contains("Positive sentiment dominates"));
    }

    #[test]
    fn mock_origin_is_flagged() {
        let r = result(
            DataOrigin::Mock {
                reason: FallbackReason::NoQualifyingText,
            },
            vec![item("Neutral opinion here.", SentimentLabel::Neutral, 0.5)],
        );
        let text = render(&r, false);

        assert!(text.starts_with("warning: no qualifying text found on page"));
        assert!(text.contains("sample data"));
    }

    #[test]
    fn distribution_lists_all_labels_with_percentages() {
        let r = result(
            DataOrigin::Live,
            vec![
                item("a", SentimentLabel::Positive, 0.9),
                item("b", SentimentLabel::Neutral, 0.6),
            ],
        );
        let text = render(&r, false);

        assert!(text.contains("50.0%"));
        assert!(text.contains("0.0%"));
        assert!(text.contains(&"#".repeat(15)));
    }

    #[test]
    fn bar_is_bounded() {
        assert_eq!(bar(0.0), "");
        assert_eq!(bar(100.0).len(), BAR_WIDTH);
        assert_eq!(bar(250.0).len(), BAR_WIDTH);
    }

    #[test]
    fn truncate_marks_long_text() {
        assert_eq!(truncate("short  text\nhere", 60), "short text here");
        let long = "x".repeat(80);
        let cut = truncate(&long, 10);
        assert_eq!(cut, "xxxxxxx...");
        assert_eq!(cut.chars().count(), 10);
    }
}
