//! Remote tone classification backend.
//!
//! Delegates classification to an external inference service: one POST with
//! the ordered list of distinct message texts, one three-way label
//! (`POS`/`NEG`/`NEU`) back per text. Labels map to positive, negative, and
//! neutral; anything unrecognized maps to neutral.
//!
//! The [`ToneClassifier`] implementation is fail-open: on *any* failure
//! (transport, non-success status, malformed body, or a label-count
//! mismatch) every message in the batch degrades to [`SentimentLabel::Neutral`] and
//! no error reaches the caller. No retries are performed. Use
//! [`RemoteToneClassifier::try_classify_batch`] when the failure itself is
//! of interest.
//!
//! # Wire format
//!
//! ```json
//! // request
//! {"messages": ["hello team", "this is broken"]}
//! // response
//! {"labels": ["NEU", "NEG"]}
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::sentiment::{SentimentLabel, ToneClassifier};
use crate::error::{Result, ZoomsiftError};

/// Configuration for the remote tone service.
///
/// # Example
///
/// ```rust
/// use zoomsift::core::remote::RemoteToneConfig;
///
/// let config = RemoteToneConfig::new("https://tone.example.com/classify")
///     .with_timeout_secs(5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteToneConfig {
    /// Classification endpoint URL.
    pub endpoint: String,

    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
}

impl RemoteToneConfig {
    /// Creates a configuration for the given endpoint with default values.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: 10,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    messages: &'a [String],
}

#[derive(Deserialize)]
struct ClassifyResponse {
    labels: Vec<String>,
}

/// Tone classifier backed by a remote inference service.
pub struct RemoteToneClassifier {
    config: RemoteToneConfig,
    client: reqwest::blocking::Client,
}

impl RemoteToneClassifier {
    /// Creates a classifier for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomsiftError::Remote`] if the HTTP client cannot be built.
    pub fn new(config: RemoteToneConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ZoomsiftError::remote(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Classifies a batch, surfacing failures instead of degrading.
    ///
    /// The returned labels are index-aligned with `texts`.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomsiftError::Remote`] on transport errors, non-success
    /// status codes, unparseable bodies, or a label-count mismatch.
    pub fn try_classify_batch(&self, texts: &[String]) -> Result<Vec<SentimentLabel>> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&ClassifyRequest { messages: texts })
            .send()
            .map_err(|e| ZoomsiftError::remote(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ZoomsiftError::remote(format!("service returned {status}")));
        }

        let body: ClassifyResponse = response
            .json()
            .map_err(|e| ZoomsiftError::remote(format!("unreadable response: {e}")))?;

        if body.labels.len() != texts.len() {
            return Err(ZoomsiftError::remote(format!(
                "expected {} labels, got {}",
                texts.len(),
                body.labels.len()
            )));
        }

        Ok(body.labels.iter().map(|l| map_remote_label(l)).collect())
    }
}

impl ToneClassifier for RemoteToneClassifier {
    fn classify(&self, text: &str) -> SentimentLabel {
        let batch = [text.to_string()];
        self.classify_batch(&batch).pop().unwrap_or_default()
    }

    fn classify_batch(&self, texts: &[String]) -> Vec<SentimentLabel> {
        self.try_classify_batch(texts)
            .unwrap_or_else(|_| vec![SentimentLabel::Neutral; texts.len()])
    }
}

/// Maps the service's three-way label to a [`SentimentLabel`].
fn map_remote_label(label: &str) -> SentimentLabel {
    match label {
        "POS" => SentimentLabel::Positive,
        "NEG" => SentimentLabel::Negative,
        _ => SentimentLabel::Neutral,
    }
}
