//! Distinct-value index for the categorical filter columns.
//!
//! Derives the sorted, deduplicated value sets offered as sender/receiver
//! filter choices. The index is recomputed from the current record set on
//! demand; it is not maintained incrementally.

use crate::record::ChatRecord;

/// The two categorical columns that offer filter choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantColumn {
    /// The sender column.
    Sender,
    /// The receiver column.
    Receiver,
}

/// Returns the distinct values of the chosen column, sorted ascending.
///
/// # Example
///
/// ```
/// use zoomsift::core::index::{distinct_values, ParticipantColumn};
/// use zoomsift::ChatRecord;
///
/// let records = vec![
///     ChatRecord::new("s1", "alice", "bob", "", "hi"),
///     ChatRecord::new("s1", "bob", "alice", "", "hey"),
///     ChatRecord::new("s1", "alice", "bob", "", "bye"),
/// ];
///
/// let senders = distinct_values(&records, ParticipantColumn::Sender);
/// assert_eq!(senders, vec!["alice", "bob"]);
/// ```
pub fn distinct_values(records: &[ChatRecord], column: ParticipantColumn) -> Vec<String> {
    let mut values: Vec<String> = records
        .iter()
        .map(|record| match column {
            ParticipantColumn::Sender => record.sender.clone(),
            ParticipantColumn::Receiver => record.receiver.clone(),
        })
        .collect();
    values.sort();
    values.dedup();
    values
}

/// Distinct sender names, sorted ascending.
pub fn distinct_senders(records: &[ChatRecord]) -> Vec<String> {
    distinct_values(records, ParticipantColumn::Sender)
}

/// Distinct receiver names, sorted ascending.
pub fn distinct_receivers(records: &[ChatRecord]) -> Vec<String> {
    distinct_values(records, ParticipantColumn::Receiver)
}
