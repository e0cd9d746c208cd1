//! Page-level session state.
//!
//! A [`Session`] owns everything one authenticated filtering session holds:
//! the gate token, the current [`ChatLog`], and the [`ToneIndex`] for that
//! log. The log and index are replaced together, wholesale, on each new
//! upload, so the record set and the tone cache can never disagree. A
//! session can only be constructed by passing the [`AccessGate`], which is
//! what makes "am I authenticated" an explicit value threaded to every
//! protected operation instead of ambient state.
//!
//! # Example
//!
//! ```
//! use zoomsift::core::{FilterCriteria, KeywordClassifier};
//! use zoomsift::gate::AccessGate;
//! use zoomsift::ingest::{IngestConfig, parse_str};
//! use zoomsift::session::Session;
//!
//! # fn main() -> zoomsift::Result<()> {
//! let gate = AccessGate::new("s3cret");
//! let mut session = Session::authenticate(&gate, "s3cret")?;
//!
//! let log = parse_str(
//!     "Session Id,Sender,Receiver,Message Time (UTC),Message,Emoji,File,Giphy,Edited/Deleted,Edited/Deleted Time (UTC)\n\
//!      s1,Alice,Bob,2024-01-15T10:00:00Z,thanks for the fix,,,,,",
//!     &IngestConfig::new(),
//! )?;
//! session.load(log, &KeywordClassifier::new());
//!
//! let hits = session.filter(&FilterCriteria::new().with_keyword("thanks"));
//! assert_eq!(hits.len(), 1);
//! # Ok(())
//! # }
//! ```

use crate::core::filter::{FilterCriteria, apply_filters};
use crate::core::index::{distinct_receivers, distinct_senders};
use crate::core::output::to_csv;
use crate::core::sentiment::{ToneClassifier, ToneIndex};
use crate::error::Result;
use crate::gate::{AccessGate, SessionToken};
use crate::record::{ChatLog, ChatRecord};

/// One authenticated filtering session: token, record set, tone cache.
#[derive(Debug)]
pub struct Session {
    token: SessionToken,
    log: ChatLog,
    tones: ToneIndex,
}

impl Session {
    /// Passes the gate and opens an empty session.
    ///
    /// # Errors
    ///
    /// Propagates the gate's denial or configuration error.
    pub fn authenticate(gate: &AccessGate, key: &str) -> Result<Self> {
        let token = gate.verify(key)?;
        Ok(Self {
            token,
            log: ChatLog::default(),
            tones: ToneIndex::new(),
        })
    }

    /// Replaces the held log and rebuilds the tone index for it.
    ///
    /// The previous record set and cache are dropped together; nothing from
    /// an earlier upload survives into the new one.
    pub fn load(&mut self, log: ChatLog, classifier: &dyn ToneClassifier) {
        self.tones = ToneIndex::build(&log.records, classifier);
        self.log = log;
    }

    /// Returns the session token.
    pub fn token(&self) -> &SessionToken {
        &self.token
    }

    /// Returns the currently held log.
    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    /// Returns the tone index for the current log.
    pub fn tones(&self) -> &ToneIndex {
        &self.tones
    }

    /// Selects the records matching `criteria`, in original order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<ChatRecord> {
        apply_filters(&self.log.records, criteria, &self.tones)
    }

    /// Distinct sender names in the current log, sorted.
    pub fn senders(&self) -> Vec<String> {
        distinct_senders(&self.log.records)
    }

    /// Distinct receiver names in the current log, sorted.
    pub fn receivers(&self) -> Vec<String> {
        distinct_receivers(&self.log.records)
    }

    /// Renders the records matching `criteria` as CSV, under the original
    /// header.
    pub fn export(&self, criteria: &FilterCriteria) -> String {
        to_csv(&self.log.header, &self.filter(criteria))
    }
}
