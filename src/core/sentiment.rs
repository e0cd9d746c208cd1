//! Message tone classification.
//!
//! This module provides [`SentimentLabel`], the [`ToneClassifier`] trait, the
//! built-in [`KeywordClassifier`], and [`ToneIndex`], the per-session cache
//! of labels keyed by distinct message text.
//!
//! # Classification model
//!
//! Every message text maps to exactly one label. The built-in classifier
//! walks an ordered table of trigger substrings; the first bucket with a hit
//! wins, and the order of the table is the tie-break contract: a message
//! containing both "great" and "bad" is positive because positive is tested
//! first. Messages matching no bucket are neutral.
//!
//! Classification is per distinct message text, not per row: build a
//! [`ToneIndex`] over the record set once and look labels up from it.
//!
//! # Examples
//!
//! ```
//! use zoomsift::core::sentiment::{KeywordClassifier, SentimentLabel, ToneClassifier};
//!
//! let classifier = KeywordClassifier::new();
//! assert_eq!(classifier.classify("Thanks, great work!"), SentimentLabel::Positive);
//! assert_eq!(classifier.classify("this is URGENT"), SentimentLabel::Urgent);
//! assert_eq!(classifier.classify("see you at 3pm"), SentimentLabel::Neutral);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::ZoomsiftError;
use crate::record::ChatRecord;

/// Tone category assigned to a message's text.
///
/// # Example
///
/// ```rust
/// use zoomsift::core::sentiment::SentimentLabel;
/// use std::str::FromStr;
///
/// let label = SentimentLabel::from_str("professional").unwrap();
/// assert_eq!(label, SentimentLabel::Professional);
/// assert_eq!(label.to_string(), "professional");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Appreciative or enthusiastic.
    Positive,

    /// Complaints, failures, blame.
    Negative,

    /// No recognizable tone markers.
    #[default]
    Neutral,

    /// Courteous work language.
    Professional,

    /// Hostile or dismissive language.
    Unprofessional,

    /// Time pressure.
    Urgent,

    /// Greetings and small talk.
    Friendly,
}

impl SentimentLabel {
    /// Returns all labels, in classifier priority order (neutral last).
    pub fn all() -> &'static [SentimentLabel] {
        &[
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Urgent,
            SentimentLabel::Professional,
            SentimentLabel::Unprofessional,
            SentimentLabel::Friendly,
            SentimentLabel::Neutral,
        ]
    }

    /// Returns the lowercase name of this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Professional => "professional",
            SentimentLabel::Unprofessional => "unprofessional",
            SentimentLabel::Urgent => "urgent",
            SentimentLabel::Friendly => "friendly",
        }
    }

    /// Returns the emoji badge used when displaying this label.
    pub fn emoji(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "😊",
            SentimentLabel::Negative => "😠",
            SentimentLabel::Neutral => "😐",
            SentimentLabel::Professional => "👔",
            SentimentLabel::Unprofessional => "⚠️",
            SentimentLabel::Urgent => "🚨",
            SentimentLabel::Friendly => "🤝",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = ZoomsiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            "professional" => Ok(SentimentLabel::Professional),
            "unprofessional" => Ok(SentimentLabel::Unprofessional),
            "urgent" => Ok(SentimentLabel::Urgent),
            "friendly" => Ok(SentimentLabel::Friendly),
            _ => Err(ZoomsiftError::invalid_tone(s)),
        }
    }
}

/// Assigns a [`SentimentLabel`] to message text.
///
/// Classification is total: implementations never fail. Backends that can
/// fail internally (the remote service) degrade to [`SentimentLabel::Neutral`]
/// for the affected batch instead of surfacing an error.
pub trait ToneClassifier {
    /// Classifies a single message text.
    fn classify(&self, text: &str) -> SentimentLabel;

    /// Classifies a batch of distinct message texts, index-aligned.
    ///
    /// The default forwards to [`classify`](Self::classify) per item;
    /// backends with per-request overhead override this.
    fn classify_batch(&self, texts: &[String]) -> Vec<SentimentLabel> {
        texts.iter().map(|t| self.classify(t)).collect()
    }
}

/// Trigger table for the keyword classifier.
///
/// Order is the tie-break contract: buckets are tested top to bottom and the
/// first hit wins. Do not reorder.
const TRIGGERS: [(SentimentLabel, &[&str]); 6] = [
    (
        SentimentLabel::Positive,
        &[
            "great", "excellent", "good", "happy", "thanks", "thank you", "awesome", "perfect",
        ],
    ),
    (
        SentimentLabel::Negative,
        &[
            "unacceptable",
            "bad",
            "wrong",
            "fail",
            "error",
            "issue",
            "problem",
            "fix",
        ],
    ),
    (
        SentimentLabel::Urgent,
        &["urgent", "asap", "emergency", "critical", "immediately", "right now"],
    ),
    (
        SentimentLabel::Professional,
        &[
            "please",
            "documentation",
            "review",
            "update",
            "handle",
            "situation",
            "discuss",
            "solution",
        ],
    ),
    (
        SentimentLabel::Unprofessional,
        &["shut up", "stupid", "idiot", "dumb", "useless", "waste"],
    ),
    (
        SentimentLabel::Friendly,
        &[
            "hey",
            "hi",
            "hello",
            "guys",
            "team",
            "checking in",
            "how are you",
            "doing well",
        ],
    ),
];

/// The built-in keyword-bucket classifier.
///
/// A pure function of the lowercased message text: record metadata never
/// influences the label, and classifying the same text twice always yields
/// the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Creates the classifier.
    pub fn new() -> Self {
        Self
    }
}

impl ToneClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> SentimentLabel {
        let lower = text.to_lowercase();
        for (label, triggers) in &TRIGGERS {
            if triggers.iter().any(|t| lower.contains(t)) {
                return *label;
            }
        }
        SentimentLabel::Neutral
    }
}

/// Session-owned memoization of message text to tone label.
///
/// Built once per upload over the distinct message texts of the record set,
/// so identical message bodies are classified a single time regardless of
/// how many rows carry them. Replaced wholesale when a new log is loaded;
/// never updated incrementally.
#[derive(Debug, Clone, Default)]
pub struct ToneIndex {
    labels: HashMap<String, SentimentLabel>,
}

impl ToneIndex {
    /// Creates an empty index. Lookups against it return neutral.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index over `records` using `classifier`.
    ///
    /// Distinct message texts are collected in first-occurrence order and
    /// classified as one batch.
    pub fn build(records: &[ChatRecord], classifier: &dyn ToneClassifier) -> Self {
        let mut seen = HashSet::new();
        let mut distinct: Vec<String> = Vec::new();
        for record in records {
            if seen.insert(record.message.as_str()) {
                distinct.push(record.message.clone());
            }
        }

        let labels = classifier.classify_batch(&distinct);
        Self {
            labels: distinct.into_iter().zip(labels).collect(),
        }
    }

    /// Returns the cached label for `text`, or neutral if the text was not
    /// part of the indexed record set.
    pub fn label_for(&self, text: &str) -> SentimentLabel {
        self.labels.get(text).copied().unwrap_or_default()
    }

    /// Returns the number of distinct message texts indexed.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if nothing has been indexed.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::str::FromStr;

    #[test]
    fn test_positive_trigger() {
        let c = KeywordClassifier::new();
        assert_eq!(c.classify("That was great"), SentimentLabel::Positive);
        assert_eq!(c.classify("thank you so much"), SentimentLabel::Positive);
    }

    #[test]
    fn test_priority_positive_before_negative() {
        // "great" (positive) and "bad" (negative) in one message: positive
        // is tested first and wins.
        let c = KeywordClassifier::new();
        assert_eq!(
            c.classify("great effort but bad timing"),
            SentimentLabel::Positive
        );
    }

    #[test]
    fn test_priority_negative_before_urgent() {
        let c = KeywordClassifier::new();
        assert_eq!(
            c.classify("the error is urgent"),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn test_priority_urgent_before_professional() {
        let c = KeywordClassifier::new();
        assert_eq!(
            c.classify("please reply asap"),
            SentimentLabel::Urgent
        );
    }

    #[test]
    fn test_no_trigger_is_neutral() {
        let c = KeywordClassifier::new();
        assert_eq!(c.classify("see you at 3pm"), SentimentLabel::Neutral);
        assert_eq!(c.classify(""), SentimentLabel::Neutral);
    }

    #[test]
    fn test_case_insensitive() {
        let c = KeywordClassifier::new();
        assert_eq!(c.classify("THANKS!"), SentimentLabel::Positive);
        assert_eq!(c.classify("Shut Up"), SentimentLabel::Unprofessional);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let c = KeywordClassifier::new();
        let text = "hey team, checking in";
        assert_eq!(c.classify(text), c.classify(text));
    }

    #[test]
    fn test_label_from_str() {
        assert_eq!(
            SentimentLabel::from_str("urgent").unwrap(),
            SentimentLabel::Urgent
        );
        assert_eq!(
            SentimentLabel::from_str("FRIENDLY").unwrap(),
            SentimentLabel::Friendly
        );
        assert!(SentimentLabel::from_str("angry").is_err());
    }

    #[test]
    fn test_label_display_and_serde() {
        assert_eq!(SentimentLabel::Unprofessional.to_string(), "unprofessional");
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
        let parsed: SentimentLabel = serde_json::from_str("\"urgent\"").unwrap();
        assert_eq!(parsed, SentimentLabel::Urgent);
    }

    #[test]
    fn test_label_all_covers_every_variant() {
        assert_eq!(SentimentLabel::all().len(), 7);
    }

    /// Counts classify calls to verify distinct texts are classified once.
    struct CountingClassifier {
        calls: RefCell<usize>,
    }

    impl ToneClassifier for CountingClassifier {
        fn classify(&self, text: &str) -> SentimentLabel {
            *self.calls.borrow_mut() += 1;
            KeywordClassifier.classify(text)
        }
    }

    #[test]
    fn test_index_classifies_distinct_texts_once() {
        let records = vec![
            ChatRecord::new("s1", "Alice", "Bob", "", "thanks"),
            ChatRecord::new("s1", "Bob", "Alice", "", "thanks"),
            ChatRecord::new("s1", "Alice", "Bob", "", "see you"),
        ];
        let classifier = CountingClassifier {
            calls: RefCell::new(0),
        };

        let index = ToneIndex::build(&records, &classifier);

        assert_eq!(*classifier.calls.borrow(), 2);
        assert_eq!(index.len(), 2);
        assert_eq!(index.label_for("thanks"), SentimentLabel::Positive);
        assert_eq!(index.label_for("see you"), SentimentLabel::Neutral);
    }

    #[test]
    fn test_index_unknown_text_is_neutral() {
        let index = ToneIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.label_for("anything"), SentimentLabel::Neutral);
    }
}
