//! Access gate for the filtering session.
//!
//! A single shared secret guards access: the submitted key is compared
//! against a reference secret held in the `ZOOM_FILTER_API_KEY` environment
//! variable, and a match yields an opaque [`SessionToken`] that the rest of
//! the library requires for protected operations. Denial distinguishes a
//! wrong key from a gate with no secret configured at all.
//!
//! There is no rate limiting, hashing, or server-side session state; this
//! is a shared-secret gate, not an authentication system.
//!
//! # Example
//!
//! ```
//! use zoomsift::gate::AccessGate;
//!
//! let gate = AccessGate::new("s3cret");
//! assert!(gate.verify("s3cret").is_ok());
//! assert!(gate.verify("wrong").unwrap_err().is_access_denied());
//! ```

use std::env;

use crate::error::{Result, ZoomsiftError};

/// Environment variable holding the reference secret.
pub const API_KEY_ENV: &str = "ZOOM_FILTER_API_KEY";

/// Opaque evidence that the access gate was passed.
///
/// The token wraps the accepted key and is held by the client session as its
/// "have I passed the gate" flag; it carries no other meaning and is never
/// inspected by the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Returns the token's opaque value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Compares submitted keys against the configured reference secret.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    reference: Option<String>,
}

impl AccessGate {
    /// Creates a gate with an explicit reference secret.
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
        }
    }

    /// Creates a gate from the [`API_KEY_ENV`] environment variable.
    ///
    /// An unset variable produces a gate that denies every submission with
    /// [`ZoomsiftError::ServerKeyMissing`].
    pub fn from_env() -> Self {
        Self {
            reference: env::var(API_KEY_ENV).ok(),
        }
    }

    /// Returns `true` if a reference secret is configured.
    pub fn is_configured(&self) -> bool {
        self.reference.is_some()
    }

    /// Verifies a submitted key.
    ///
    /// # Errors
    ///
    /// - [`ZoomsiftError::ServerKeyMissing`] when no reference secret is
    ///   configured (the submission was never compared)
    /// - [`ZoomsiftError::AccessDenied`] when the key does not match
    pub fn verify(&self, submitted: &str) -> Result<SessionToken> {
        let reference = self
            .reference
            .as_deref()
            .ok_or(ZoomsiftError::ServerKeyMissing {
                env_var: API_KEY_ENV,
            })?;

        if submitted == reference {
            Ok(SessionToken(submitted.to_string()))
        } else {
            Err(ZoomsiftError::AccessDenied)
        }
    }
}
