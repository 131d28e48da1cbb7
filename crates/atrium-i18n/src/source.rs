//! Message stores keyed by (locale, namespace).

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{I18nError, I18nResult};
use crate::locale::Locale;
use crate::namespace::Namespace;

/// Read-only store of raw message bundles.
pub trait MessageSource: Send + Sync {
    /// Load and parse one namespace for one locale.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::MissingNamespace`] when the pair does not exist and a read or
    /// parse error when it exists but cannot be decoded.
    fn load(&self, locale: Locale, namespace: Namespace) -> I18nResult<Value>;
}

/// Bundles laid out on disk as `<root>/<locale>/<namespace>.json`.
#[derive(Clone, Debug)]
pub struct FsMessageSource {
    root: PathBuf,
}

impl FsMessageSource {
    /// Create a source rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory holding one folder per locale.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, locale: Locale, namespace: Namespace) -> PathBuf {
        self.root
            .join(locale.code())
            .join(format!("{}.json", namespace.name()))
    }
}

impl MessageSource for FsMessageSource {
    fn load(&self, locale: Locale, namespace: Namespace) -> I18nResult<Value> {
        let path = self.path_for(locale, namespace);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(I18nError::MissingNamespace {
                    locale,
                    namespace,
                    path: Some(path),
                });
            }
            Err(source) => return Err(I18nError::Read { path, source }),
        };
        parse_bundle(locale, namespace, &raw)
    }
}

/// In-memory bundles, used for embedded assets and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryMessageSource {
    entries: HashMap<(Locale, Namespace), String>,
}

impl MemoryMessageSource {
    /// Empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register raw JSON for a (locale, namespace) pair, replacing any previous entry.
    #[must_use]
    pub fn with(mut self, locale: Locale, namespace: Namespace, raw: impl Into<String>) -> Self {
        self.entries.insert((locale, namespace), raw.into());
        self
    }
}

impl MessageSource for MemoryMessageSource {
    fn load(&self, locale: Locale, namespace: Namespace) -> I18nResult<Value> {
        let raw = self
            .entries
            .get(&(locale, namespace))
            .ok_or(I18nError::MissingNamespace {
                locale,
                namespace,
                path: None,
            })?;
        parse_bundle(locale, namespace, raw)
    }
}

fn parse_bundle(locale: Locale, namespace: Namespace, raw: &str) -> I18nResult<Value> {
    serde_json::from_str(raw).map_err(|source| I18nError::Parse {
        locale,
        namespace,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_source_reports_missing_pairs() {
        let source = MemoryMessageSource::new().with(Locale::En, Namespace::Footer, "{}");
        assert!(source.load(Locale::En, Namespace::Footer).is_ok());
        assert!(matches!(
            source.load(Locale::Ar, Namespace::Footer),
            Err(I18nError::MissingNamespace {
                locale: Locale::Ar,
                namespace: Namespace::Footer,
                path: None,
            })
        ));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let source = MemoryMessageSource::new().with(Locale::En, Namespace::Home, "{ nope");
        assert!(matches!(
            source.load(Locale::En, Namespace::Home),
            Err(I18nError::Parse { .. })
        ));
    }

    #[test]
    fn fs_source_maps_absent_file_to_missing_namespace() {
        let source = FsMessageSource::new("/definitely/not/here");
        match source.load(Locale::Ar, Namespace::Search) {
            Err(I18nError::MissingNamespace { path: Some(path), .. }) => {
                assert!(path.ends_with("ar/search.json"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
