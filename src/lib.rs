//! # Zoomsift
//!
//! A Rust library for searching and filtering Zoom chat history CSV exports.
//!
//! ## Overview
//!
//! Zoomsift ingests the ten-column CSV export of a Zoom chat history and
//! lets you select subsets of it by:
//!
//! - **Keyword** — case-insensitive substring match across every field
//! - **Date range** — inclusive bounds over the message timestamp
//! - **Sender / Receiver** — exact participant match, with a distinct-value
//!   index to discover the choices
//! - **Message tone** — a keyword-bucket classifier (or an optional remote
//!   inference service) assigns one of seven tone labels per distinct
//!   message text
//!
//! Filtered subsets can be re-exported as CSV under the original header.
//! Access is guarded by a shared-secret gate; all protected operations hang
//! off a [`Session`](session::Session) that can only be opened through it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zoomsift::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let gate = AccessGate::from_env();
//!     let mut session = Session::authenticate(&gate, "my-key")?;
//!
//!     let log = parse_file(Path::new("chat_history.csv"), &IngestConfig::new())?;
//!     session.load(log, &KeywordClassifier::new());
//!
//!     let criteria = FilterCriteria::new()
//!         .with_keyword("deploy")
//!         .with_tone(SentimentLabel::Urgent);
//!
//!     for record in session.filter(&criteria) {
//!         println!("{}: {}", record.sender, record.message);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`record`] — [`ChatRecord`] and [`ChatLog`], the parsed export
//! - [`ingest`] — permissive CSV ingestion ([`parse_file`](ingest::parse_file),
//!   [`IngestConfig`](ingest::IngestConfig))
//! - [`core`] — filtering and classification
//!   - [`core::filter`] — [`FilterCriteria`](core::FilterCriteria),
//!     [`apply_filters`](core::apply_filters)
//!   - [`core::sentiment`] — [`SentimentLabel`](core::SentimentLabel),
//!     [`KeywordClassifier`](core::KeywordClassifier),
//!     [`ToneIndex`](core::ToneIndex)
//!   - [`core::remote`] — remote tone backend (requires `remote` feature)
//!   - [`core::index`] — distinct-value index
//!   - [`core::output`] — CSV export
//! - [`gate`] — [`AccessGate`](gate::AccessGate) and
//!   [`SessionToken`](gate::SessionToken)
//! - [`session`] — [`Session`](session::Session), the per-upload state
//! - [`cli`] — CLI types (requires `cli` feature)
//! - [`error`] — [`ZoomsiftError`] and [`Result`]
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod core;
pub mod error;
pub mod gate;
pub mod ingest;
pub mod record;
pub mod session;

// Re-export the main types at the crate root for convenience
pub use error::{Result, ZoomsiftError};
pub use record::{ChatLog, ChatRecord};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use zoomsift::prelude::*;
/// ```
pub mod prelude {
    // Record types
    pub use crate::record::{ChatLog, ChatRecord};

    // Error types
    pub use crate::error::{Result, ZoomsiftError};

    // Ingestion
    pub use crate::ingest::{IngestConfig, parse_file, parse_str};

    // Filtering
    pub use crate::core::filter::{FilterCriteria, apply_filters};

    // Tone classification
    pub use crate::core::sentiment::{
        KeywordClassifier, SentimentLabel, ToneClassifier, ToneIndex,
    };

    #[cfg(feature = "remote")]
    pub use crate::core::remote::{RemoteToneClassifier, RemoteToneConfig};

    // Distinct-value index
    pub use crate::core::index::{
        ParticipantColumn, distinct_receivers, distinct_senders, distinct_values,
    };

    // Export
    pub use crate::core::output::{to_csv, write_csv};

    // Access gate and session
    pub use crate::gate::{AccessGate, SessionToken};
    pub use crate::session::Session;
}
