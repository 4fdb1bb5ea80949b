//! `evaluate` command: accuracy and confusion matrix for an exported run.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use anyhow::Context;
use moodlens_core::{evaluate, read_csv, Evaluation, SentimentLabel};

/// Score the predictions CSV at `predictions` against the labels in `truth`.
///
/// # Errors
///
/// Returns an error if either file cannot be read or parsed, if the row
/// counts differ, or if both files are empty.
pub(crate) fn run_evaluate(predictions: &Path, truth: &Path) -> anyhow::Result<()> {
    let predicted = File::open(predictions)
        .with_context(|| format!("failed to open {}", predictions.display()))?;
    let expected =
        File::open(truth).with_context(|| format!("failed to open {}", truth.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    evaluate_from(BufReader::new(predicted), BufReader::new(expected), &mut out)?;
    Ok(())
}

fn evaluate_from<P: Read, T: Read, W: Write>(
    predictions: P,
    truth: T,
    out: &mut W,
) -> anyhow::Result<Evaluation> {
    let predicted = read_csv(predictions).context("failed to read predictions")?;
    let expected = read_csv(truth).context("failed to read reference labels")?;

    let mismatched = predicted
        .iter()
        .zip(&expected)
        .filter(|(p, t)| p.text.trim() != t.text.trim())
        .count();
    if mismatched > 0 {
        tracing::warn!(
            rows = mismatched,
            "prediction and reference texts differ; rows are compared by position"
        );
    }

    let predicted_labels: Vec<SentimentLabel> = predicted.iter().map(|r| r.label).collect();
    let expected_labels: Vec<SentimentLabel> = expected.iter().map(|r| r.label).collect();
    let evaluation = evaluate(&predicted_labels, &expected_labels)?;

    write_evaluation(out, &evaluation)?;
    Ok(evaluation)
}

fn write_evaluation<W: Write>(out: &mut W, evaluation: &Evaluation) -> io::Result<()> {
    writeln!(
        out,
        "Accuracy: {:.2}% ({} rows)",
        evaluation.accuracy * 100.0,
        evaluation.total
    )?;
    writeln!(out)?;
    writeln!(out, "Confusion matrix (rows: true, columns: predicted)")?;

    write!(out, "{:<10}", "")?;
    for label in SentimentLabel::ALL {
        write!(out, "{:>10}", label.as_str())?;
    }
    writeln!(out)?;

    for label in SentimentLabel::ALL {
        write!(out, "{:<10}", label.as_str())?;
        for count in evaluation.confusion[label.index()] {
            write!(out, "{count:>10}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
