//! Filter records by keyword, date range, participants, and tone.
//!
//! This module provides [`FilterCriteria`] for defining filter criteria and
//! [`apply_filters`] for selecting matching records.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Keyword | [`with_keyword`](FilterCriteria::with_keyword) | Any field contains the keyword (case-insensitive) |
//! | Date from | [`with_date_from`](FilterCriteria::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterCriteria::with_date_to) | Messages on or before date |
//! | Sender | [`with_sender`](FilterCriteria::with_sender) | Exact sender match |
//! | Receiver | [`with_receiver`](FilterCriteria::with_receiver) | Exact receiver match |
//! | Tone | [`with_tone`](FilterCriteria::with_tone) | Message tone equals the label |
//!
//! # Examples
//!
//! ```
//! use zoomsift::core::filter::{FilterCriteria, apply_filters};
//! use zoomsift::core::sentiment::ToneIndex;
//! use zoomsift::ChatRecord;
//!
//! # fn main() -> zoomsift::Result<()> {
//! let records = vec![
//!     ChatRecord::new("s1", "Alice", "Bob", "2024-01-15T10:00:00Z", "standup moved"),
//!     ChatRecord::new("s1", "Bob", "Alice", "2024-02-01T00:00:00Z", "ok"),
//! ];
//!
//! let criteria = FilterCriteria::new()
//!     .with_date_from("2024-01-01")?
//!     .with_date_to("2024-01-31")?;
//!
//! let filtered = apply_filters(&records, &criteria, &ToneIndex::new());
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].message, "standup moved");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Filters combine with AND logic; the result preserves input order
//! - Records whose message time does not parse are **excluded** while a
//!   date bound is active
//! - Reversed date bounds are swapped before comparison
//! - Sender/receiver matching is exact string equality (values come from
//!   the distinct-value index)

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::sentiment::{SentimentLabel, ToneIndex};
use crate::error::ZoomsiftError;
use crate::record::ChatRecord;

/// Criteria for one filtering pass.
///
/// All fields are optional; an all-absent criteria set selects every record.
/// Criteria are read-only during a pass and replaced wholesale on each user
/// edit; "clear filters" is simply [`FilterCriteria::new`].
///
/// # Examples
///
/// ```
/// use zoomsift::core::filter::FilterCriteria;
/// use zoomsift::core::sentiment::SentimentLabel;
///
/// # fn main() -> zoomsift::Result<()> {
/// let criteria = FilterCriteria::new()
///     .with_keyword("deploy")
///     .with_sender("Alice")
///     .with_tone(SentimentLabel::Urgent)
///     .with_date_from("2024-06-01")?;
/// assert!(criteria.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring searched across every field.
    pub keyword: Option<String>,

    /// Include only messages on or after this date.
    pub date_start: Option<NaiveDate>,

    /// Include only messages on or before this date.
    pub date_end: Option<NaiveDate>,

    /// Include only messages from this sender (exact match).
    pub sender: Option<String>,

    /// Include only messages to this receiver (exact match).
    pub receiver: Option<String>,

    /// Include only messages whose tone equals this label.
    pub tone: Option<SentimentLabel>,
}

impl FilterCriteria {
    /// Creates an empty criteria set; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keyword filter.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Sets the start date filter (inclusive) from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomsiftError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ZoomsiftError> {
        self.date_start = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive) from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomsiftError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ZoomsiftError> {
        self.date_end = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the start date directly from a parsed [`NaiveDate`].
    #[must_use]
    pub fn with_start(mut self, date: NaiveDate) -> Self {
        self.date_start = Some(date);
        self
    }

    /// Sets the end date directly from a parsed [`NaiveDate`].
    #[must_use]
    pub fn with_end(mut self, date: NaiveDate) -> Self {
        self.date_end = Some(date);
        self
    }

    /// Sets the sender filter.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Sets the receiver filter.
    #[must_use]
    pub fn with_receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    /// Sets the tone filter.
    #[must_use]
    pub fn with_tone(mut self, tone: SentimentLabel) -> Self {
        self.tone = Some(tone);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.keyword.is_some()
            || self.has_date_filter()
            || self.sender.is_some()
            || self.receiver.is_some()
            || self.tone.is_some()
    }

    /// Returns `true` if a date bound is active.
    pub fn has_date_filter(&self) -> bool {
        self.date_start.is_some() || self.date_end.is_some()
    }

    /// Returns the active date bounds as UTC instants, corrected for order.
    ///
    /// Start maps to start-of-day, end to end-of-day, so single-day ranges
    /// cover the full day. Reversed bounds are swapped, so the caller's
    /// criteria remain a faithful record of what was entered.
    fn date_bounds(&self) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        let (start, end) = match (self.date_start, self.date_end) {
            (Some(a), Some(b)) if a > b => (Some(b), Some(a)),
            other => other,
        };

        (
            start.map(|d| d.and_hms_opt(0, 0, 0).unwrap().and_utc()),
            end.map(|d| d.and_hms_opt(23, 59, 59).unwrap().and_utc()),
        )
    }
}

/// Parse a date string in YYYY-MM-DD format.
fn parse_date(date_str: &str) -> Result<NaiveDate, ZoomsiftError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ZoomsiftError::invalid_date(date_str))
}

/// Selects the records matching all active filters.
///
/// Returns a new vector of clones in the original order; the input is never
/// mutated or reordered. If no filters are active, the full record set is
/// returned unchanged.
///
/// The tone predicate looks labels up in `tones`; pass
/// [`ToneIndex::new`](ToneIndex::new) when no tone filter is in play.
///
/// # Examples
///
/// ```
/// use zoomsift::core::filter::{FilterCriteria, apply_filters};
/// use zoomsift::core::sentiment::ToneIndex;
/// use zoomsift::ChatRecord;
///
/// let records = vec![
///     ChatRecord::new("s1", "Alice", "Bob", "", "release is done"),
///     ChatRecord::new("s1", "Bob", "Alice", "", "nice"),
/// ];
///
/// let criteria = FilterCriteria::new().with_sender("Alice");
/// let filtered = apply_filters(&records, &criteria, &ToneIndex::new());
///
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].sender, "Alice");
/// ```
pub fn apply_filters(
    records: &[ChatRecord],
    criteria: &FilterCriteria,
    tones: &ToneIndex,
) -> Vec<ChatRecord> {
    if !criteria.is_active() {
        return records.to_vec();
    }

    let keyword = criteria.keyword.as_ref().map(|k| k.to_lowercase());
    let (after, before) = criteria.date_bounds();

    records
        .iter()
        .filter(|record| {
            if let Some(ref needle) = keyword {
                let hit = record
                    .fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(needle));
                if !hit {
                    return false;
                }
            }

            if criteria.has_date_filter() {
                match record.timestamp() {
                    Some(ts) => {
                        if after.is_some_and(|lo| ts < lo) {
                            return false;
                        }
                        if before.is_some_and(|hi| ts > hi) {
                            return false;
                        }
                    }
                    // Unparseable time never satisfies an active bound.
                    None => return false,
                }
            }

            if let Some(ref sender) = criteria.sender {
                if record.sender != *sender {
                    return false;
                }
            }

            if let Some(ref receiver) = criteria.receiver {
                if record.receiver != *receiver {
                    return false;
                }
            }

            if let Some(tone) = criteria.tone {
                if tones.label_for(&record.message) != tone {
                    return false;
                }
            }

            true
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sentiment::KeywordClassifier;

    fn make_record(sender: &str, receiver: &str, time: &str, message: &str) -> ChatRecord {
        ChatRecord::new("s1", sender, receiver, time, message)
    }

    fn sample_records() -> Vec<ChatRecord> {
        vec![
            make_record("Alice", "Bob", "2024-01-15T10:00:00Z", "deploy went great"),
            make_record("Bob", "Alice", "2024-02-01T00:00:00Z", "found an issue"),
            make_record("Alice", "Everyone", "2024-01-20T09:30:00Z", "standup in 5"),
        ]
    }

    #[test]
    fn test_inactive_criteria_is_identity() {
        let records = sample_records();
        let filtered = apply_filters(&records, &FilterCriteria::new(), &ToneIndex::new());
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_keyword_any_field_case_insensitive() {
        let records = sample_records();

        let criteria = FilterCriteria::new().with_keyword("DEPLOY");
        let filtered = apply_filters(&records, &criteria, &ToneIndex::new());
        assert_eq!(filtered.len(), 1);

        // Matches non-message fields too (sender here).
        let criteria = FilterCriteria::new().with_keyword("bob");
        let filtered = apply_filters(&records, &criteria, &ToneIndex::new());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_date_range_inclusive() {
        let records = sample_records();
        let criteria = FilterCriteria::new()
            .with_date_from("2024-01-01")
            .unwrap()
            .with_date_to("2024-01-31")
            .unwrap();

        let filtered = apply_filters(&records, &criteria, &ToneIndex::new());
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.message_time.starts_with("2024-01")));
    }

    #[test]
    fn test_date_range_excludes_out_of_range() {
        let records = vec![make_record(
            "Bob",
            "Alice",
            "2024-02-01T00:00:00Z",
            "found an issue",
        )];
        let criteria = FilterCriteria::new()
            .with_date_from("2024-01-01")
            .unwrap()
            .with_date_to("2024-01-31")
            .unwrap();

        assert!(apply_filters(&records, &criteria, &ToneIndex::new()).is_empty());
    }

    #[test]
    fn test_swapped_bounds_behave_as_corrected() {
        let records = sample_records();
        let forward = FilterCriteria::new()
            .with_date_from("2024-01-01")
            .unwrap()
            .with_date_to("2024-01-31")
            .unwrap();
        let reversed = FilterCriteria::new()
            .with_date_from("2024-01-31")
            .unwrap()
            .with_date_to("2024-01-01")
            .unwrap();

        assert_eq!(
            apply_filters(&records, &forward, &ToneIndex::new()),
            apply_filters(&records, &reversed, &ToneIndex::new())
        );
    }

    #[test]
    fn test_single_bound_leaves_other_open() {
        let records = sample_records();
        let criteria = FilterCriteria::new().with_date_from("2024-01-18").unwrap();
        let filtered = apply_filters(&records, &criteria, &ToneIndex::new());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_unparseable_time_excluded_under_date_filter() {
        let records = vec![
            make_record("Alice", "Bob", "2024-01-15T10:00:00Z", "dated"),
            make_record("Alice", "Bob", "whenever", "undated"),
        ];
        let criteria = FilterCriteria::new().with_date_from("2024-01-01").unwrap();
        let filtered = apply_filters(&records, &criteria, &ToneIndex::new());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].message, "dated");
    }

    #[test]
    fn test_sender_exact_match() {
        let records = sample_records();
        let criteria = FilterCriteria::new().with_sender("Alice");
        let filtered = apply_filters(&records, &criteria, &ToneIndex::new());
        assert_eq!(filtered.len(), 2);

        // Exact, not case-insensitive: the value comes from the index.
        let criteria = FilterCriteria::new().with_sender("alice");
        assert!(apply_filters(&records, &criteria, &ToneIndex::new()).is_empty());
    }

    #[test]
    fn test_receiver_exact_match() {
        let records = sample_records();
        let criteria = FilterCriteria::new().with_receiver("Everyone");
        let filtered = apply_filters(&records, &criteria, &ToneIndex::new());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].message, "standup in 5");
    }

    #[test]
    fn test_tone_filter_uses_index() {
        let records = sample_records();
        let tones = ToneIndex::build(&records, &KeywordClassifier::new());

        let criteria = FilterCriteria::new().with_tone(SentimentLabel::Positive);
        let filtered = apply_filters(&records, &criteria, &tones);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].message, "deploy went great");

        let criteria = FilterCriteria::new().with_tone(SentimentLabel::Negative);
        let filtered = apply_filters(&records, &criteria, &tones);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].message, "found an issue");
    }

    #[test]
    fn test_combined_filters_and_order() {
        let records = sample_records();
        let tones = ToneIndex::build(&records, &KeywordClassifier::new());

        let criteria = FilterCriteria::new()
            .with_sender("Alice")
            .with_date_from("2024-01-01")
            .unwrap()
            .with_date_to("2024-12-31")
            .unwrap();

        let filtered = apply_filters(&records, &criteria, &tones);
        assert_eq!(filtered.len(), 2);
        // Original order preserved.
        assert_eq!(filtered[0].message, "deploy went great");
        assert_eq!(filtered[1].message, "standup in 5");
    }

    #[test]
    fn test_invalid_date_format() {
        let result = FilterCriteria::new().with_date_from("01-01-2024");
        assert!(matches!(result, Err(ZoomsiftError::InvalidDate { .. })));
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterCriteria::new().is_active());
        assert!(FilterCriteria::new().with_keyword("x").is_active());
        assert!(FilterCriteria::new().with_sender("Alice").is_active());
        assert!(
            FilterCriteria::new()
                .with_tone(SentimentLabel::Neutral)
                .is_active()
        );
        assert!(
            FilterCriteria::new()
                .with_date_from("2024-01-01")
                .unwrap()
                .is_active()
        );
    }
}
