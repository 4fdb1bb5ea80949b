//! Per-label counts and the insight derived from them.

use serde::Serialize;

use crate::types::SentimentLabel;

/// Count of items per sentiment label within one analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentTally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentTally {
    #[must_use]
    pub fn new(positive: usize, negative: usize, neutral: usize) -> Self {
        Self {
            positive,
            negative,
            neutral,
        }
    }

    /// Increment exactly one bucket.
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    #[must_use]
    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Percentage of the total held by `label`. `0.0` for an empty tally.
    #[must_use]
    pub fn share(&self, label: SentimentLabel) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let pct = self.get(label) as f64 * 100.0 / total as f64;
        pct
    }

    /// Labels paired with their counts in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SentimentLabel, usize)> + '_ {
        SentimentLabel::ALL
            .into_iter()
            .map(move |label| (label, self.get(label)))
    }

    #[must_use]
    pub fn insight(&self) -> Insight {
        Insight::from_tally(self)
    }
}

impl FromIterator<SentimentLabel> for SentimentTally {
    fn from_iter<I: IntoIterator<Item = SentimentLabel>>(iter: I) -> Self {
        let mut tally = Self::default();
        for label in iter {
            tally.record(label);
        }
        tally
    }
}

/// Which side of the distribution dominates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Insight {
    NegativeDominant,
    PositiveOrNeutralDominant,
}

impl Insight {
    /// Negative wins only when strictly greater than positive. Ties and
    /// neutral counts never tip the result.
    #[must_use]
    pub fn from_tally(tally: &SentimentTally) -> Self {
        if tally.negative > tally.positive {
            Self::NegativeDominant
        } else {
            Self::PositiveOrNeutralDominant
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NegativeDominant => {
                "High negative sentiment detected. Consider adjusting your messaging."
            }
            Self::PositiveOrNeutralDominant => {
                "Positive sentiment dominates. Keep up the good engagement!"
            }
        }
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        matches!(self, Self::NegativeDominant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_majority_is_negative_dominant() {
        let tally = SentimentTally::new(2, 5, 1);
        assert_eq!(tally.insight(), Insight::NegativeDominant);
    }

    #[test]
    fn positive_majority_is_positive_or_neutral_dominant() {
        let tally = SentimentTally::new(5, 2, 1);
        assert_eq!(tally.insight(), Insight::PositiveOrNeutralDominant);
    }

    #[test]
    fn tie_favors_non_negative() {
        let tally = SentimentTally::new(3, 3, 0);
        assert_eq!(tally.insight(), Insight::PositiveOrNeutralDominant);
    }

    #[test]
    fn neutral_heavy_tally_is_not_negative() {
        let tally = SentimentTally::new(0, 0, 9);
        assert_eq!(tally.insight(), Insight::PositiveOrNeutralDominant);
        assert!(!tally.insight().is_negative());
    }

    #[test]
    fn record_increments_one_bucket() {
        let tally: SentimentTally = [
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
            SentimentLabel::Neutral,
        ]
        .into_iter()
        .collect();
        assert_eq!(tally, SentimentTally::new(1, 0, 2));
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn shares_sum_to_hundred() {
        let tally = SentimentTally::new(1, 1, 2);
        assert!((tally.share(SentimentLabel::Neutral) - 50.0).abs() < 1e-9);
        let sum: f64 = SentimentLabel::ALL.iter().map(|l| tally.share(*l)).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_tally_has_zero_shares() {
        let tally = SentimentTally::default();
        assert_eq!(tally.share(SentimentLabel::Positive), 0.0);
    }

    #[test]
    fn iter_follows_display_order() {
        let tally = SentimentTally::new(4, 5, 6);
        let pairs: Vec<_> = tally.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (SentimentLabel::Positive, 4),
                (SentimentLabel::Negative, 5),
                (SentimentLabel::Neutral, 6),
            ]
        );
    }
}
