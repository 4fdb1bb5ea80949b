//! Sentiment classification through a Text Embeddings Inference `/predict` endpoint.
//!
//! The model behind the endpoint is opaque; this module only sends texts,
//! picks the top label per text and normalizes it.

use std::future::Future;
use std::sync::OnceLock;
use std::time::Duration;

use moodlens_core::{AppConfig, Classification};
use serde::{Deserialize, Serialize};

use crate::error::SentimentError;

/// Maximum number of texts per /predict call.
const BATCH_SIZE: usize = 32;

/// Maps texts to one [`Classification`] each, in input order.
pub trait SentimentClassifier {
    /// # Errors
    ///
    /// Implementations return [`SentimentError::Classifier`] when the
    /// underlying capability is unavailable or misbehaves.
    fn classify(
        &self,
        texts: &[String],
    ) -> impl Future<Output = Result<Vec<Classification>, SentimentError>> + Send;
}

/// HTTP client for a sequence-classification model served by TEI.
#[derive(Debug)]
pub struct InferenceClassifier {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    /// One-element arrays: a bare pair of strings would be read as a
    /// sentence pair rather than two inputs.
    inputs: Vec<[&'a str; 1]>,
    truncate: bool,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    label: String,
    score: f32,
}

impl InferenceClassifier {
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the HTTP client cannot be built.
    pub fn new(classifier_url: &str, timeout_secs: u64) -> Result<Self, SentimentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            url: format!("{}/predict", classifier_url.trim_end_matches('/')),
        })
    }

    async fn predict_chunk(&self, chunk: &[String]) -> Result<Vec<Classification>, SentimentError> {
        let request = PredictRequest {
            inputs: chunk.iter().map(|t| [t.as_str()]).collect(),
            truncate: true,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| SentimentError::Classifier(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SentimentError::Classifier(format!(
                "classifier returned status {}",
                response.status()
            )));
        }

        let predictions: Vec<Vec<Prediction>> = response
            .json()
            .await
            .map_err(|e| SentimentError::Classifier(format!("response parse error: {e}")))?;

        if predictions.len() != chunk.len() {
            return Err(SentimentError::Classifier(format!(
                "classifier returned {} predictions for {} inputs",
                predictions.len(),
                chunk.len()
            )));
        }

        predictions
            .into_iter()
            .map(|candidates| {
                candidates
                    .into_iter()
                    .max_by(|a, b| a.score.total_cmp(&b.score))
                    .map(|top| Classification::from_raw(&top.label, top.score))
                    .ok_or_else(|| {
                        SentimentError::Classifier("classifier returned no labels".to_string())
                    })
            })
            .collect()
    }
}

impl SentimentClassifier for InferenceClassifier {
    async fn classify(&self, texts: &[String]) -> Result<Vec<Classification>, SentimentError> {
        let mut all = Vec::with_capacity(texts.len());
        for chunk in texts.chunks(BATCH_SIZE) {
            all.extend(self.predict_chunk(chunk).await?);
        }
        Ok(all)
    }
}

static SHARED_CLASSIFIER: OnceLock<InferenceClassifier> = OnceLock::new();

/// Process-wide classifier handle, built on first use and reused afterwards.
///
/// Later calls ignore `config` and return the existing handle.
///
/// # Errors
///
/// Returns [`SentimentError::Http`] if the first construction fails; the next
/// call will try again.
pub fn shared_classifier(config: &AppConfig) -> Result<&'static InferenceClassifier, SentimentError> {
    if let Some(existing) = SHARED_CLASSIFIER.get() {
        return Ok(existing);
    }
    let built = InferenceClassifier::new(&config.classifier_url, config.request_timeout_secs)?;
    Ok(SHARED_CLASSIFIER.get_or_init(|| built))
}
