//! Export serializer.
//!
//! Re-renders a filtered record subset back to CSV text: the original header
//! line followed by one line per record, fields joined with commas.
//!
//! # Known limitation
//!
//! Fields are joined as-is, with no quoting or escaping of embedded commas
//! or newlines. This is deliberate: ingestion does not interpret quotes
//! either, so adding RFC 4180 quoting here would produce files the paired
//! reader mis-splits. Export followed by re-ingest reproduces the records
//! field-for-field exactly when no field contains a comma.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::record::ChatRecord;

/// Renders the header row and records as CSV text.
///
/// Each line is comma-joined and newline-terminated; an empty record set
/// yields just the header line.
///
/// # Example
///
/// ```
/// use zoomsift::core::output::to_csv;
/// use zoomsift::ChatRecord;
///
/// let header: Vec<String> = ["Session Id", "Sender", "Receiver", "Message Time (UTC)",
///     "Message", "Emoji", "File", "Giphy", "Edited/Deleted", "Edited/Deleted Time (UTC)"]
///     .map(String::from).to_vec();
/// let records = vec![ChatRecord::new("s1", "Alice", "Bob", "2024-01-15T10:00:00Z", "hello")];
///
/// let csv = to_csv(&header, &records);
/// assert!(csv.starts_with("Session Id,Sender"));
/// assert!(csv.contains("s1,Alice,Bob,2024-01-15T10:00:00Z,hello,,,,,\n"));
/// ```
pub fn to_csv(header: &[String], records: &[ChatRecord]) -> String {
    let mut out = String::new();
    out.push_str(&header.join(","));
    out.push('\n');

    for record in records {
        out.push_str(&record.fields().join(","));
        out.push('\n');
    }

    out
}

/// Writes the header row and records as CSV to a file.
pub fn write_csv(header: &[String], records: &[ChatRecord], output_path: &Path) -> Result<()> {
    fs::write(output_path, to_csv(header, records))?;
    Ok(())
}
