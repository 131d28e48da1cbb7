//! Error types for CMS requests.
//!
//! These never reach page handlers; the client logs them and degrades.

use thiserror::Error;

/// Result alias for CMS operations.
pub type CmsResult<T> = Result<T, CmsError>;

/// Failure modes of a CMS call.
#[derive(Debug, Error)]
pub enum CmsError {
    /// The HTTP client could not be constructed.
    #[error("failed to build cms http client")]
    ClientBuild {
        /// Underlying reqwest error.
        source: reqwest::Error,
    },
    /// The collection URL could not be derived from the base URL.
    #[error("invalid cms url")]
    Url {
        /// Collection path.
        collection: &'static str,
        /// Underlying parse error.
        source: url::ParseError,
    },
    /// Transport failed (connect, timeout, body read).
    #[error("cms request failed")]
    Request {
        /// Collection path.
        collection: &'static str,
        /// Underlying reqwest error.
        source: reqwest::Error,
    },
    /// The CMS answered with a non-success status.
    #[error("cms returned an error status")]
    Status {
        /// Collection path.
        collection: &'static str,
        /// HTTP status code.
        status: u16,
    },
    /// The body was not the expected `{ "data": [...] }` document.
    #[error("cms response could not be decoded")]
    Decode {
        /// Collection path.
        collection: &'static str,
        /// Underlying serde error.
        source: serde_json::Error,
    },
}

impl CmsError {
    /// HTTP status when the CMS answered, for logging.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
