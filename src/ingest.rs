//! CSV ingestion for Zoom chat history exports.
//!
//! Reads comma-separated text where the first row is a header and every
//! following row is a data record. Matching the export pipeline this tool is
//! paired with, the reader is deliberately permissive:
//!
//! - quotes are **not** interpreted (a `"` is ordinary field text),
//! - rows may be ragged; they are padded or truncated to the fixed
//!   ten-column layout of [`ChatRecord`],
//! - blank rows are skipped,
//! - anything the reader can tokenize is accepted — garbage in, garbage out.
//!
//! The only hard failures are I/O and non-UTF-8 input.
//!
//! # Example
//!
//! ```
//! use zoomsift::ingest::{parse_str, IngestConfig};
//!
//! let csv = "Session Id,Sender,Receiver,Message Time (UTC),Message,Emoji,File,Giphy,Edited/Deleted,Edited/Deleted Time (UTC)\n\
//!            s1,Alice,Bob,2024-01-15T10:00:00Z,hello there,,,,,";
//!
//! let log = parse_str(csv, &IngestConfig::new()).unwrap();
//! assert_eq!(log.header[0], "Session Id");
//! assert_eq!(log.records.len(), 1);
//! assert_eq!(log.records[0].sender, "Alice");
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{COLUMN_COUNT, ChatLog, ChatRecord};

/// Configuration for export ingestion.
///
/// # Example
///
/// ```rust
/// use zoomsift::ingest::IngestConfig;
///
/// let config = IngestConfig::new().with_skip_blank_rows(false);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Skip rows whose every field is empty (default: true)
    pub skip_blank_rows: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            skip_blank_rows: true,
        }
    }
}

impl IngestConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether blank rows are skipped.
    #[must_use]
    pub fn with_skip_blank_rows(mut self, skip: bool) -> Self {
        self.skip_blank_rows = skip;
        self
    }
}

/// Parses a chat export file into a [`ChatLog`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn parse_file(path: &Path, config: &IngestConfig) -> Result<ChatLog> {
    let content = fs::read_to_string(path)?;
    parse_str(&content, config)
}

/// Parses chat export content from a string into a [`ChatLog`].
///
/// The first surviving row becomes the header (kept verbatim, whatever its
/// width); every later row becomes a [`ChatRecord`]. Input with no rows at
/// all yields an empty log rather than an error.
pub fn parse_str(content: &str, config: &IngestConfig) -> Result<ChatLog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(content.as_bytes());

    let mut header: Option<Vec<String>> = None;
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        let fields: Vec<String> = row.iter().map(str::to_string).collect();

        // A blank line, if the reader surfaces one at all, arrives as a
        // single empty field. Rows of empty fields (",,,,") are data.
        if config.skip_blank_rows && fields.len() == 1 && fields[0].is_empty() {
            continue;
        }

        match header {
            None => header = Some(fields),
            Some(_) => records.push(record_from_row(fields)),
        }
    }

    Ok(ChatLog::new(header.unwrap_or_default(), records))
}

/// Normalize a raw row to the fixed column layout: pad short rows with empty
/// fields, drop trailing extras from long ones.
fn record_from_row(mut fields: Vec<String>) -> ChatRecord {
    fields.resize(COLUMN_COUNT, String::new());
    let fields: [String; COLUMN_COUNT] =
        fields.try_into().expect("row normalized to column count");
    ChatRecord::from_fields(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Session Id,Sender,Receiver,Message Time (UTC),Message,Emoji,File,Giphy,Edited/Deleted,Edited/Deleted Time (UTC)";

    fn full_row(sender: &str, message: &str) -> String {
        format!("s1,{sender},Bob,2024-01-15T10:00:00Z,{message},,,,,")
    }

    #[test]
    fn test_parse_header_and_rows() {
        let input = format!("{HEADER}\n{}\n{}", full_row("Alice", "hi"), full_row("Bob", "hello"));
        let log = parse_str(&input, &IngestConfig::new()).unwrap();

        assert_eq!(log.header.len(), COLUMN_COUNT);
        assert_eq!(log.header[4], "Message");
        assert_eq!(log.len(), 2);
        assert_eq!(log.records[0].sender, "Alice");
        assert_eq!(log.records[1].message, "hello");
    }

    #[test]
    fn test_blank_rows_skipped() {
        let input = format!("{HEADER}\n\n{}\n\n", full_row("Alice", "hi"));
        let log = parse_str(&input, &IngestConfig::new()).unwrap();
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_short_row_padded() {
        let input = format!("{HEADER}\ns1,Alice,Bob");
        let log = parse_str(&input, &IngestConfig::new()).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.records[0].receiver, "Bob");
        assert_eq!(log.records[0].message, "");
        assert_eq!(log.records[0].edited_time, "");
    }

    #[test]
    fn test_long_row_truncated() {
        let row = format!("{},surplus,more", full_row("Alice", "hi"));
        let input = format!("{HEADER}\n{row}");
        let log = parse_str(&input, &IngestConfig::new()).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.records[0].edited_time, "");
    }

    #[test]
    fn test_quotes_are_literal_text() {
        let input = format!("{HEADER}\ns1,Alice,Bob,2024-01-15T10:00:00Z,\"hi,there\",,,,,");
        let log = parse_str(&input, &IngestConfig::new()).unwrap();
        // No quote interpretation: the quoted chunk splits on its comma.
        assert_eq!(log.records[0].message, "\"hi");
        assert_eq!(log.records[0].emoji, "there\"");
    }

    #[test]
    fn test_empty_input_yields_empty_log() {
        let log = parse_str("", &IngestConfig::new()).unwrap();
        assert!(log.header.is_empty());
        assert!(log.is_empty());
    }

    #[test]
    fn test_header_only() {
        let log = parse_str(HEADER, &IngestConfig::new()).unwrap();
        assert_eq!(log.header.len(), COLUMN_COUNT);
        assert!(log.is_empty());
    }

    #[test]
    fn test_header_kept_verbatim_even_if_ragged() {
        let log = parse_str("Session Id,Sender\ns1,Alice,Bob", &IngestConfig::new()).unwrap();
        assert_eq!(log.header, vec!["Session Id".to_string(), "Sender".to_string()]);
        assert_eq!(log.records[0].receiver, "Bob");
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file(Path::new("/nonexistent/chat.csv"), &IngestConfig::new()).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_config_builder() {
        let config = IngestConfig::new().with_skip_blank_rows(false);
        assert!(!config.skip_blank_rows);
        assert!(IngestConfig::default().skip_blank_rows);
    }
}
