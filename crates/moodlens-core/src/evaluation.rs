//! Accuracy and confusion matrix for predicted labels against a reference set.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::SentimentLabel;

/// Rows are the true label, columns the predicted label, both in
/// [`SentimentLabel::ALL`] order.
pub type ConfusionMatrix = [[usize; 3]; 3];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub accuracy: f64,
    pub confusion: ConfusionMatrix,
    pub total: usize,
}

/// Compare `predicted` against `truth` position by position.
///
/// # Errors
///
/// Returns [`CoreError::EmptyEvaluation`] for empty input and
/// [`CoreError::LengthMismatch`] when the two sides differ in length.
pub fn evaluate(
    predicted: &[SentimentLabel],
    truth: &[SentimentLabel],
) -> Result<Evaluation, CoreError> {
    if predicted.len() != truth.len() {
        return Err(CoreError::LengthMismatch {
            texts: truth.len(),
            classifications: predicted.len(),
        });
    }
    if truth.is_empty() {
        return Err(CoreError::EmptyEvaluation);
    }

    let mut confusion: ConfusionMatrix = [[0; 3]; 3];
    let mut correct = 0usize;
    for (p, t) in predicted.iter().zip(truth) {
        confusion[t.index()][p.index()] += 1;
        if p == t {
            correct += 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let accuracy = correct as f64 / truth.len() as f64;

    Ok(Evaluation {
        accuracy,
        confusion,
        total: truth.len(),
    })
}
