//! CSV export of the per-item result table, and reading it back.
//!
//! Columns are `text,label` with a trailing `score` column only when the
//! confidence toggle is on.

use std::io::{Read, Write};

use crate::error::CoreError;
use crate::types::{ScoredItem, SentimentLabel};

/// Default file name offered for downloads.
pub const DEFAULT_EXPORT_FILE: &str = "sentiment_results.csv";

/// One row of an exported result table.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub text: String,
    pub label: SentimentLabel,
    pub score: Option<f32>,
}

/// Write `items` as CSV with a header row.
///
/// # Errors
///
/// Returns [`CoreError::Csv`] if writing to `writer` fails.
pub fn write_csv<W: Write>(
    writer: W,
    items: &[ScoredItem],
    include_score: bool,
) -> Result<(), CoreError> {
    let mut wtr = csv::Writer::from_writer(writer);

    if include_score {
        wtr.write_record(["text", "label", "score"])?;
    } else {
        wtr.write_record(["text", "label"])?;
    }

    for item in items {
        if include_score {
            let score = item.score.to_string();
            wtr.write_record([item.text.as_str(), item.label.as_str(), score.as_str()])?;
        } else {
            wtr.write_record([item.text.as_str(), item.label.as_str()])?;
        }
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Read an exported table back. Column order is taken from the header.
///
/// # Errors
///
/// Returns [`CoreError::MissingColumn`] when `text` or `label` is absent,
/// [`CoreError::UnknownLabel`] for a label outside the three buckets, and
/// [`CoreError::InvalidScore`] for a non-numeric score cell.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<ExportRow>, CoreError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();

    let column = |name: &'static str| headers.iter().position(|h| h.trim() == name);
    let text_idx = column("text").ok_or(CoreError::MissingColumn("text"))?;
    let label_idx = column("label").ok_or(CoreError::MissingColumn("label"))?;
    let score_idx = column("score");

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;

        let text = record.get(text_idx).unwrap_or_default().to_string();
        let label: SentimentLabel = record.get(label_idx).unwrap_or_default().parse()?;
        let score = match score_idx.and_then(|idx| record.get(idx)) {
            Some(raw) if !raw.trim().is_empty() => {
                Some(raw.trim().parse::<f32>().map_err(|_| CoreError::InvalidScore {
                    row,
                    value: raw.to_string(),
                })?)
            }
            _ => None,
        };

        rows.push(ExportRow { text, label, score });
    }

    Ok(rows)
}
