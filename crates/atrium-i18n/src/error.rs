//! Error types for message loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::locale::Locale;
use crate::namespace::Namespace;

/// Result alias for i18n operations.
pub type I18nResult<T> = Result<T, I18nError>;

/// Failures raised while loading or decoding message bundles.
#[derive(Debug, Error)]
pub enum I18nError {
    /// No bundle exists for the (locale, namespace) pair.
    #[error("message namespace missing")]
    MissingNamespace {
        /// Locale being loaded.
        locale: Locale,
        /// Namespace that was not found.
        namespace: Namespace,
        /// Location probed, when file-backed.
        path: Option<PathBuf>,
    },
    /// Reading a bundle from disk failed for a reason other than absence.
    #[error("failed to read message bundle")]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// A bundle was not valid JSON.
    #[error("failed to parse message bundle")]
    Parse {
        /// Locale being loaded.
        locale: Locale,
        /// Namespace being loaded.
        namespace: Namespace,
        /// Underlying serde error.
        source: serde_json::Error,
    },
    /// A structured record embedded in a bundle did not match its expected shape.
    #[error("malformed message record")]
    MalformedRecord {
        /// Locale being loaded.
        locale: Locale,
        /// Namespace containing the record.
        namespace: Namespace,
        /// Dotted key path of the record list.
        key: &'static str,
        /// Machine-readable reason for the failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn i18n_error_display_and_source() {
        let missing = I18nError::MissingNamespace {
            locale: Locale::Ar,
            namespace: Namespace::Home,
            path: None,
        };
        assert_eq!(missing.to_string(), "message namespace missing");
        assert!(missing.source().is_none());

        let read = I18nError::Read {
            path: PathBuf::from("locales/en/home.json"),
            source: io::Error::other("denied"),
        };
        assert_eq!(read.to_string(), "failed to read message bundle");
        assert!(read.source().is_some());

        let malformed = I18nError::MalformedRecord {
            locale: Locale::En,
            namespace: Namespace::Home,
            key: "team.members",
            reason: "missing field `name`".to_string(),
        };
        assert_eq!(malformed.to_string(), "malformed message record");
    }
}
