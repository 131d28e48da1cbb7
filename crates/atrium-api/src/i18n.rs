//! # Design
//!
//! - Resolve the request locale once, before any handler runs.
//! - Inputs are the `ATRIUM_LOCALE` cookie and `Accept-Language`; nothing else is consulted.
//! - The outcome travels as a request extension and is recorded on the request span.

use std::sync::Arc;

use atrium_i18n::{
    LOCALE_COOKIE, Locale, LocaleSource, Resolution, TextDirection, cookie_value, resolve_locale,
};
use atrium_telemetry::record_locale;
use axum::{
    body::Body,
    extract::State,
    http::{
        HeaderMap, Request,
        header::{ACCEPT_LANGUAGE, COOKIE},
    },
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::state::ApiState;

/// Locale negotiated for the current request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestLocale {
    /// Active locale.
    pub locale: Locale,
    /// Input that decided it.
    pub source: LocaleSource,
}

impl RequestLocale {
    /// Layout direction of the active locale.
    #[must_use]
    pub const fn direction(self) -> TextDirection {
        self.locale.direction()
    }
}

impl From<Resolution> for RequestLocale {
    fn from(resolution: Resolution) -> Self {
        Self {
            locale: resolution.locale,
            source: resolution.source,
        }
    }
}

/// Resolve the locale from request headers.
///
/// Every `Cookie` header is searched for the preference cookie; the first match wins.
#[must_use]
pub fn negotiate(headers: &HeaderMap, default: Locale) -> RequestLocale {
    let cookie = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|header| cookie_value(header, LOCALE_COOKIE));
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    resolve_locale(cookie, accept_language, default).into()
}

pub(crate) async fn with_locale(
    State(state): State<Arc<ApiState>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let locale = negotiate(req.headers(), state.default_locale);
    state.telemetry.inc_locale_resolution(locale.source.as_str());
    record_locale(locale.locale.code(), locale.source.as_str());
    debug!(
        locale = locale.locale.code(),
        source = locale.source.as_str(),
        "request locale resolved"
    );
    req.extensions_mut().insert(locale);
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn cookie_beats_header() {
        let locale = negotiate(
            &headers(&[("cookie", "ATRIUM_LOCALE=ar"), ("accept-language", "en-US")]),
            Locale::En,
        );
        assert_eq!(locale.locale, Locale::Ar);
        assert_eq!(locale.source, LocaleSource::Cookie);
        assert_eq!(locale.direction(), TextDirection::Rtl);
    }

    #[test]
    fn later_cookie_headers_are_searched() {
        let locale = negotiate(
            &headers(&[("cookie", "theme=dark"), ("cookie", "ATRIUM_LOCALE=ar")]),
            Locale::En,
        );
        assert_eq!(locale.source, LocaleSource::Cookie);
    }

    #[test]
    fn unsupported_cookie_falls_through_to_header() {
        let locale = negotiate(
            &headers(&[("cookie", "ATRIUM_LOCALE=fr"), ("accept-language", "ar-EG,en;q=0.8")]),
            Locale::En,
        );
        assert_eq!(locale.locale, Locale::Ar);
        assert_eq!(locale.source, LocaleSource::Header);
    }

    #[test]
    fn no_inputs_use_default() {
        let locale = negotiate(&HeaderMap::new(), Locale::Ar);
        assert_eq!(locale.locale, Locale::Ar);
        assert_eq!(locale.source, LocaleSource::Default);
    }
}
