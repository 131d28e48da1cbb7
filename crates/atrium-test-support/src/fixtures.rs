//! Temporary locale directories for loader and HTTP tests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Locale codes shipped with the site.
pub const LOCALES: [&str; 2] = ["en", "ar"];
/// Namespace file stems shipped with the site.
pub const NAMESPACES: [&str; 5] = ["navbar", "home", "services", "search", "footer"];

macro_rules! bundle {
    ($locale:literal, $namespace:literal) => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../locales/",
            $locale,
            "/",
            $namespace,
            ".json"
        ))
    };
}

fn shipped_bundle(locale: &str, namespace: &str) -> Option<&'static str> {
    let raw = match (locale, namespace) {
        ("en", "navbar") => bundle!("en", "navbar"),
        ("en", "home") => bundle!("en", "home"),
        ("en", "services") => bundle!("en", "services"),
        ("en", "search") => bundle!("en", "search"),
        ("en", "footer") => bundle!("en", "footer"),
        ("ar", "navbar") => bundle!("ar", "navbar"),
        ("ar", "home") => bundle!("ar", "home"),
        ("ar", "services") => bundle!("ar", "services"),
        ("ar", "search") => bundle!("ar", "search"),
        ("ar", "footer") => bundle!("ar", "footer"),
        _ => return None,
    };
    Some(raw)
}

/// A `tempfile`-backed copy of the shipped `locales/` tree that tests may break at will.
pub struct LocaleFixture {
    dir: TempDir,
}

impl LocaleFixture {
    /// Seed a fresh directory with every shipped bundle.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory or any bundle file cannot be written.
    pub fn shipped() -> Result<Self> {
        let fixture = Self::empty()?;
        for locale in LOCALES {
            for namespace in NAMESPACES {
                if let Some(raw) = shipped_bundle(locale, namespace) {
                    fixture.write(locale, namespace, raw)?;
                }
            }
        }
        Ok(fixture)
    }

    /// An empty locale root.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn empty() -> Result<Self> {
        let dir = tempfile::tempdir().context("failed to create locale fixture directory")?;
        Ok(Self { dir })
    }

    /// Root to hand to the filesystem message source.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of one bundle file.
    #[must_use]
    pub fn bundle_path(&self, locale: &str, namespace: &str) -> PathBuf {
        self.dir
            .path()
            .join(locale)
            .join(format!("{namespace}.json"))
    }

    /// Write (or overwrite) one bundle.
    ///
    /// # Errors
    ///
    /// Returns an error if the locale directory or the file cannot be written.
    pub fn write(&self, locale: &str, namespace: &str, raw: &str) -> Result<()> {
        let path = self.bundle_path(locale, namespace);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, raw).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Delete one bundle to simulate a missing namespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    pub fn remove(&self, locale: &str, namespace: &str) -> Result<()> {
        let path = self.bundle_path(locale, namespace);
        fs::remove_file(&path).with_context(|| format!("failed to remove {}", path.display()))
    }
}
