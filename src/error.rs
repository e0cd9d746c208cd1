//! Unified error types for zoomsift.
//!
//! This module provides a single [`ZoomsiftError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular
//! crates like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! Two failure classes deliberately do *not* surface here: structurally odd
//! but readable CSV input (ingestion is lenient by policy), and remote tone
//! classification failures (those degrade the affected batch to neutral
//! labels instead of failing the operation).

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for zoomsift operations.
///
/// # Example
///
/// ```rust
/// use zoomsift::error::Result;
/// use zoomsift::ChatRecord;
///
/// fn my_function() -> Result<Vec<ChatRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ZoomsiftError>;

/// The error type for all zoomsift operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ZoomsiftError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The CSV reader failed.
    ///
    /// With quoting disabled and flexible row widths, this is effectively
    /// limited to I/O and encoding failures inside the reader; malformed
    /// but readable rows are accepted as-is.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid date argument in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Unknown tone label string.
    #[error("Unknown tone '{input}'. Expected one of: {expected}")]
    InvalidTone {
        /// The invalid tone string that was provided
        input: String,
        /// Comma-separated list of accepted labels
        expected: &'static str,
    },

    /// The submitted access key did not match the configured secret.
    #[error("Access denied: invalid API key")]
    AccessDenied,

    /// No reference secret is configured on this side of the gate.
    ///
    /// Distinct from [`AccessDenied`](Self::AccessDenied): the submission
    /// was never compared against anything.
    #[error("API key not configured (set {env_var})")]
    ServerKeyMissing {
        /// Name of the environment variable the gate reads
        env_var: &'static str,
    },

    /// The remote tone classification call failed.
    ///
    /// Only returned by the explicit `try_classify_batch` API; the
    /// [`ToneClassifier`](crate::core::sentiment::ToneClassifier) contract
    /// converts this into all-neutral labels for the batch.
    #[cfg(feature = "remote")]
    #[error("Remote classification failed: {message}")]
    Remote {
        /// What went wrong (transport, status, or payload shape)
        message: String,
    },

    /// JSON serialization error in the remote wire format.
    #[cfg(feature = "remote")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ZoomsiftError {
    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ZoomsiftError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid tone error.
    pub fn invalid_tone(input: impl Into<String>) -> Self {
        ZoomsiftError::InvalidTone {
            input: input.into(),
            expected: "positive, negative, neutral, professional, unprofessional, urgent, friendly",
        }
    }

    /// Creates a remote classification error.
    #[cfg(feature = "remote")]
    pub fn remote(message: impl Into<String>) -> Self {
        ZoomsiftError::Remote {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ZoomsiftError::Io(_))
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ZoomsiftError::InvalidDate { .. })
    }

    /// Returns `true` if this is an access-gate denial.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, ZoomsiftError::AccessDenied)
    }

    /// Returns `true` if the gate had no reference secret configured.
    pub fn is_server_key_missing(&self) -> bool {
        matches!(self, ZoomsiftError::ServerKeyMissing { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ZoomsiftError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_invalid_date_display() {
        let err = ZoomsiftError::invalid_date("not-a-date");
        let display = err.to_string();
        assert!(display.contains("not-a-date"));
        assert!(display.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_invalid_tone_display() {
        let err = ZoomsiftError::invalid_tone("angry");
        let display = err.to_string();
        assert!(display.contains("angry"));
        assert!(display.contains("neutral"));
    }

    #[test]
    fn test_access_denied_display() {
        let err = ZoomsiftError::AccessDenied;
        assert!(err.to_string().contains("Access denied"));
    }

    #[test]
    fn test_server_key_missing_display() {
        let err = ZoomsiftError::ServerKeyMissing {
            env_var: "ZOOM_FILTER_API_KEY",
        };
        let display = err.to_string();
        assert!(display.contains("not configured"));
        assert!(display.contains("ZOOM_FILTER_API_KEY"));
    }

    #[cfg(feature = "remote")]
    #[test]
    fn test_remote_display() {
        let err = ZoomsiftError::remote("HTTP 503");
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ZoomsiftError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_methods() {
        let io_err = ZoomsiftError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_invalid_date());
        assert!(!io_err.is_access_denied());

        let date_err = ZoomsiftError::invalid_date("bad");
        assert!(date_err.is_invalid_date());
        assert!(!date_err.is_io());

        let denied = ZoomsiftError::AccessDenied;
        assert!(denied.is_access_denied());
        assert!(!denied.is_server_key_missing());

        let missing = ZoomsiftError::ServerKeyMissing {
            env_var: "ZOOM_FILTER_API_KEY",
        };
        assert!(missing.is_server_key_missing());
        assert!(!missing.is_access_denied());
    }

    #[test]
    fn test_from_csv_error() {
        let io_err = std::io::Error::other("test");
        let csv_err = csv::Error::from(io_err);
        let err: ZoomsiftError = csv_err.into();
        assert!(err.to_string().contains("CSV error"));
    }

    #[test]
    fn test_error_debug() {
        let err = ZoomsiftError::invalid_date("bad");
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidDate"));
    }
}
