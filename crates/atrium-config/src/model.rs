//! Typed site configuration and its environment loader.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use atrium_i18n::{DEFAULT_LOCALE, Locale};
use serde::Serialize;
use url::Url;

use crate::defaults;
use crate::error::ConfigResult;
use crate::validate::{
    parse_bind_addr, parse_http_url, parse_locale, parse_log_format, parse_millis,
};

/// Listener address variable.
pub const ENV_BIND_ADDR: &str = "ATRIUM_BIND_ADDR";
/// Message bundle root variable.
pub const ENV_LOCALES_DIR: &str = "ATRIUM_LOCALES_DIR";
/// Fallback locale variable.
pub const ENV_DEFAULT_LOCALE: &str = "ATRIUM_DEFAULT_LOCALE";
/// CMS origin variable.
pub const ENV_CMS_URL: &str = "ATRIUM_CMS_URL";
/// CMS request timeout variable, in milliseconds.
pub const ENV_CMS_TIMEOUT_MS: &str = "ATRIUM_CMS_TIMEOUT_MS";
/// Hero rotation period variable, in milliseconds.
pub const ENV_HERO_INTERVAL_MS: &str = "ATRIUM_HERO_INTERVAL_MS";
/// Log filter variable.
pub const ENV_LOG_LEVEL: &str = "ATRIUM_LOG_LEVEL";
/// Log output format variable.
pub const ENV_LOG_FORMAT: &str = "ATRIUM_LOG_FORMAT";

/// Explicit log output selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatSetting {
    /// One JSON object per line.
    Json,
    /// Human-readable output.
    Pretty,
}

/// Validated runtime configuration for the site server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Socket the HTTP listener binds.
    pub bind_addr: SocketAddr,
    /// Root of the message bundle tree.
    pub locales_dir: PathBuf,
    /// Locale used when neither cookie nor header decides.
    pub default_locale: Locale,
    /// CMS origin; media paths are resolved against it.
    pub cms_url: Url,
    /// Per-request CMS timeout.
    pub cms_timeout: Duration,
    /// Hero auto-advance period.
    pub hero_interval: Duration,
    /// Log filter directive.
    pub log_level: String,
    /// Log output format; `None` picks by build profile.
    pub log_format: Option<LogFormatSetting>,
}

impl SiteConfig {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::InvalidField`] naming the first variable that failed.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using `lookup` to read variables. Unset and blank values take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::InvalidField`] naming the first variable that failed.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bind_addr = parse_bind_addr(
            ENV_BIND_ADDR,
            read(ENV_BIND_ADDR).as_deref().unwrap_or(defaults::BIND_ADDR),
        )?;
        let locales_dir = PathBuf::from(
            read(ENV_LOCALES_DIR).unwrap_or_else(|| defaults::LOCALES_DIR.to_string()),
        );
        let default_locale = match read(ENV_DEFAULT_LOCALE) {
            Some(raw) => parse_locale(ENV_DEFAULT_LOCALE, &raw)?,
            None => DEFAULT_LOCALE,
        };
        let cms_url = parse_http_url(
            ENV_CMS_URL,
            read(ENV_CMS_URL).as_deref().unwrap_or(defaults::CMS_URL),
        )?;
        let cms_timeout = match read(ENV_CMS_TIMEOUT_MS) {
            Some(raw) => parse_millis(ENV_CMS_TIMEOUT_MS, &raw, Duration::from_millis(1))?,
            None => defaults::CMS_TIMEOUT,
        };
        let hero_interval = match read(ENV_HERO_INTERVAL_MS) {
            Some(raw) => parse_millis(ENV_HERO_INTERVAL_MS, &raw, defaults::HERO_INTERVAL_MIN)?,
            None => defaults::HERO_INTERVAL,
        };
        let log_level = read(ENV_LOG_LEVEL).unwrap_or_else(|| defaults::LOG_LEVEL.to_string());
        let log_format = read(ENV_LOG_FORMAT)
            .map(|raw| parse_log_format(ENV_LOG_FORMAT, &raw))
            .transpose()?;

        Ok(Self {
            bind_addr,
            locales_dir,
            default_locale,
            cms_url,
            cms_timeout,
            hero_interval,
            log_level,
            log_format,
        })
    }
}
