//! Request-time locale negotiation.
//!
//! # Design
//! - Inputs are explicit: the stored cookie value and the raw `Accept-Language` header.
//! - The result is always a supported locale; unsupported values silently fall through.
//! - The winning source is reported so callers can log and count it.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Where the resolved locale came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleSource {
    /// A supported value stored in the preference cookie.
    Cookie,
    /// The first supported tag in `Accept-Language`.
    Header,
    /// Neither input named a supported locale.
    Default,
}

impl LocaleSource {
    /// Stable label for logs and metrics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cookie => "cookie",
            Self::Header => "header",
            Self::Default => "default",
        }
    }
}

/// Outcome of locale negotiation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Selected locale.
    pub locale: Locale,
    /// Input that decided the locale.
    pub source: LocaleSource,
}

/// Resolve the active locale for a request.
///
/// The cookie wins when it holds a supported code, then the first supported tag of the
/// `Accept-Language` header, then `default`.
#[must_use]
pub fn resolve_locale(
    cookie: Option<&str>,
    accept_language: Option<&str>,
    default: Locale,
) -> Resolution {
    if let Some(locale) = cookie.and_then(Locale::from_code) {
        return Resolution {
            locale,
            source: LocaleSource::Cookie,
        };
    }
    if let Some(locale) = accept_language.and_then(parse_accept_language) {
        return Resolution {
            locale,
            source: LocaleSource::Header,
        };
    }
    Resolution {
        locale: default,
        source: LocaleSource::Default,
    }
}

/// First supported locale named by an `Accept-Language` value, in header order.
///
/// Quality weights are ignored; region subtags (`ar-SA`) match their primary language.
#[must_use]
pub fn parse_accept_language(value: &str) -> Option<Locale> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .find_map(|part| {
            let tag = part.split(';').next().unwrap_or(part).trim();
            let primary = tag.split(['-', '_']).next().unwrap_or(tag);
            Locale::from_code(primary)
        })
}

/// Coerce a requested locale code to a supported one, falling back to `default`.
#[must_use]
pub fn coerce_locale(requested: &str, default: Locale) -> Locale {
    Locale::from_code(requested).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::DEFAULT_LOCALE;

    #[test]
    fn supported_cookie_wins_regardless_of_header() {
        let headers = [None, Some(""), Some("en-US,en;q=0.9"), Some("ar"), Some("*")];
        for locale in Locale::all() {
            for header in headers {
                let resolved = resolve_locale(Some(locale.code()), header, DEFAULT_LOCALE);
                assert_eq!(resolved.locale, locale);
                assert_eq!(resolved.source, LocaleSource::Cookie);
            }
        }
    }

    #[test]
    fn unsupported_cookie_falls_through_to_header() {
        for cookie in ["fr", "", "ar-SA", "english", " "] {
            let resolved = resolve_locale(Some(cookie), Some("ar-SA,ar;q=0.9"), Locale::En);
            assert_eq!(resolved.locale, Locale::Ar, "cookie {cookie:?}");
            assert_eq!(resolved.source, LocaleSource::Header);
        }
    }

    #[test]
    fn unsupported_cookie_and_header_fall_back_to_default() {
        let resolved = resolve_locale(Some("de"), Some("fr-FR,de;q=0.5"), Locale::Ar);
        assert_eq!(resolved.locale, Locale::Ar);
        assert_eq!(resolved.source, LocaleSource::Default);

        let resolved = resolve_locale(None, None, Locale::En);
        assert_eq!(resolved.source, LocaleSource::Default);
    }

    #[test]
    fn header_scan_takes_first_supported_tag() {
        assert_eq!(parse_accept_language("fr-CA, ar;q=0.8, en;q=0.5"), Some(Locale::Ar));
        assert_eq!(parse_accept_language("EN-gb"), Some(Locale::En));
        assert_eq!(parse_accept_language(" , ;q=1"), None);
        assert_eq!(parse_accept_language("*"), None);
    }

    #[test]
    fn coerce_replaces_unsupported_requests_with_default() {
        assert_eq!(coerce_locale("ar", Locale::En), Locale::Ar);
        assert_eq!(coerce_locale("xx", Locale::En), Locale::En);
    }
}
