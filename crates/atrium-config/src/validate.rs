//! Per-field parsing helpers.

use std::net::SocketAddr;
use std::time::Duration;

use atrium_i18n::Locale;
use url::Url;

use crate::error::{ConfigError, ConfigResult};
use crate::model::LogFormatSetting;

pub(crate) fn parse_bind_addr(field: &'static str, raw: &str) -> ConfigResult<SocketAddr> {
    raw.trim()
        .parse::<SocketAddr>()
        .map_err(|_| ConfigError::invalid(field, raw, "not_a_socket_address"))
}

pub(crate) fn parse_locale(field: &'static str, raw: &str) -> ConfigResult<Locale> {
    Locale::from_code(raw).ok_or_else(|| ConfigError::invalid(field, raw, "unsupported_locale"))
}

pub(crate) fn parse_http_url(field: &'static str, raw: &str) -> ConfigResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|_| ConfigError::invalid(field, raw, "not_a_url"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::invalid(field, raw, "unsupported_scheme"));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(ConfigError::invalid(field, raw, "missing_host"));
    }
    Ok(url)
}

pub(crate) fn parse_millis(
    field: &'static str,
    raw: &str,
    minimum: Duration,
) -> ConfigResult<Duration> {
    let millis = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::invalid(field, raw, "not_an_integer"))?;
    let duration = Duration::from_millis(millis);
    if duration < minimum {
        return Err(ConfigError::invalid(field, raw, "below_minimum"));
    }
    Ok(duration)
}

pub(crate) fn parse_log_format(field: &'static str, raw: &str) -> ConfigResult<LogFormatSetting> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "json" => Ok(LogFormatSetting::Json),
        "pretty" => Ok(LogFormatSetting::Pretty),
        _ => Err(ConfigError::invalid(field, raw, "unknown_log_format")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_requires_port() {
        assert!(parse_bind_addr("X", "0.0.0.0:8080").is_ok());
        assert!(parse_bind_addr("X", "[::1]:80").is_ok());
        let err = parse_bind_addr("X", "localhost").unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidField {
                field: "X",
                value: "localhost".into(),
                reason: "not_a_socket_address",
            }
        );
    }

    #[test]
    fn locale_must_be_supported() {
        assert_eq!(parse_locale("X", "AR").ok(), Some(Locale::Ar));
        assert!(parse_locale("X", "fr").is_err());
    }

    #[test]
    fn cms_url_must_be_http_with_host() {
        assert!(parse_http_url("X", "https://cms.example.com").is_ok());
        assert!(parse_http_url("X", "ftp://cms.example.com").is_err());
        assert!(parse_http_url("X", "mailto:team@example.com").is_err());
        assert!(parse_http_url("X", "not a url").is_err());
    }

    #[test]
    fn millis_enforce_minimum() {
        let min = Duration::from_millis(1_000);
        assert_eq!(parse_millis("X", "1000", min).ok(), Some(min));
        assert!(parse_millis("X", "999", min).is_err());
        assert!(parse_millis("X", "-5", min).is_err());
        assert!(parse_millis("X", "soon", min).is_err());
    }

    #[test]
    fn log_format_is_case_insensitive() {
        assert_eq!(parse_log_format("X", "JSON").ok(), Some(LogFormatSetting::Json));
        assert_eq!(parse_log_format("X", " pretty ").ok(), Some(LogFormatSetting::Pretty));
        assert!(parse_log_format("X", "xml").is_err());
    }
}
