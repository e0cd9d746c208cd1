//! Record model for Zoom chat history exports.
//!
//! This module provides [`ChatRecord`], the in-memory representation of one
//! data row of an uploaded export, and [`ChatLog`], the full parsed upload
//! (header row plus records).
//!
//! # Overview
//!
//! A Zoom chat export has a fixed ten-column layout. Every field is kept as
//! the raw text it arrived as; the two timestamp columns are ISO-8601-like
//! strings that are parsed on demand for date filtering.
//!
//! | # | Column |
//! |---|--------|
//! | 0 | Session ID |
//! | 1 | Sender |
//! | 2 | Receiver |
//! | 3 | Message Time (UTC) |
//! | 4 | Message |
//! | 5 | Emoji |
//! | 6 | File |
//! | 7 | Giphy |
//! | 8 | Edited/Deleted |
//! | 9 | Edited/Deleted Time (UTC) |
//!
//! # Examples
//!
//! ```
//! use zoomsift::ChatRecord;
//!
//! let rec = ChatRecord::new("s1", "Alice", "Bob", "2024-01-15T10:00:00Z", "hello");
//! assert_eq!(rec.sender(), "Alice");
//! assert!(rec.timestamp().is_some());
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of columns in a Zoom chat export row.
pub const COLUMN_COUNT: usize = 10;

/// One parsed data row of an uploaded chat export.
///
/// Records are immutable once parsed: filtering selects subsets, it never
/// mutates or reorders the underlying rows. All fields are untyped text;
/// [`timestamp`](Self::timestamp) and [`edited_timestamp`](Self::edited_timestamp)
/// parse the corresponding columns on demand.
///
/// # Serialization
///
/// Implements `Serialize`/`Deserialize` with the raw field values, suitable
/// for storage or IPC. Export back to CSV goes through
/// [`to_csv`](crate::core::output::to_csv), which preserves field text
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatRecord {
    /// Meeting/session identifier.
    pub session_id: String,

    /// Display name of the message author.
    pub sender: String,

    /// Display name of the recipient ("Everyone" for channel messages).
    pub receiver: String,

    /// When the message was sent, as the raw ISO-8601-like text from the export.
    pub message_time: String,

    /// Text content of the message.
    pub message: String,

    /// Emoji reaction column.
    pub emoji: String,

    /// File attachment flag/name column.
    pub file: String,

    /// Giphy flag column.
    pub giphy: String,

    /// Edited/deleted status column.
    pub edited: String,

    /// When the message was edited or deleted, raw text.
    pub edited_time: String,
}

impl ChatRecord {
    /// Creates a record from the five commonly-populated fields.
    ///
    /// The emoji/file/giphy/edited columns are left empty. Use
    /// [`from_fields`](Self::from_fields) when building from a full row.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zoomsift::ChatRecord;
    ///
    /// let rec = ChatRecord::new("s1", "Alice", "Everyone", "2024-01-15 10:00:00", "hi team");
    /// assert_eq!(rec.message(), "hi team");
    /// assert_eq!(rec.emoji, "");
    /// ```
    pub fn new(
        session_id: impl Into<String>,
        sender: impl Into<String>,
        receiver: impl Into<String>,
        message_time: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            sender: sender.into(),
            receiver: receiver.into(),
            message_time: message_time.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Creates a record from a full ten-element row, in column order.
    pub fn from_fields(fields: [String; COLUMN_COUNT]) -> Self {
        let [
            session_id,
            sender,
            receiver,
            message_time,
            message,
            emoji,
            file,
            giphy,
            edited,
            edited_time,
        ] = fields;
        Self {
            session_id,
            sender,
            receiver,
            message_time,
            message,
            emoji,
            file,
            giphy,
            edited,
            edited_time,
        }
    }

    /// Returns all ten fields in column order.
    ///
    /// Used by the keyword predicate (any-field substring match) and the
    /// export serializer.
    pub fn fields(&self) -> [&str; COLUMN_COUNT] {
        [
            &self.session_id,
            &self.sender,
            &self.receiver,
            &self.message_time,
            &self.message,
            &self.emoji,
            &self.file,
            &self.giphy,
            &self.edited,
            &self.edited_time,
        ]
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the receiver name.
    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    /// Returns the message content.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Parses the message time column, if it holds a recognizable date-time.
    ///
    /// Accepts RFC 3339 as well as the `YYYY-MM-DD HH:MM:SS` and
    /// `YYYY-MM-DDTHH:MM:SS` spellings seen in Zoom exports (naive times are
    /// taken as UTC). Returns `None` for anything else; records without a
    /// parseable time never match an active date bound.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.message_time)
    }

    /// Parses the edited/deleted time column, if present and recognizable.
    pub fn edited_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.edited_time)
    }
}

/// Parse an ISO-8601-like date-time string from an export column.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.to_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    None
}

/// The full parsed upload: verbatim header row plus data records.
///
/// The header is excluded from filtering and analysis; it is retained only
/// so that export can reproduce the original first line. A `ChatLog` is
/// owned by one [`Session`](crate::session::Session) and replaced wholesale
/// on each new upload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatLog {
    /// The header row, field-for-field as it appeared in the input.
    pub header: Vec<String>,

    /// All data records, in input order.
    pub records: Vec<ChatRecord>,
}

impl ChatLog {
    /// Creates a log from a header row and records.
    pub fn new(header: Vec<String>, records: Vec<ChatRecord>) -> Self {
        Self { header, records }
    }

    /// Returns the number of data records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the log holds no data records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
