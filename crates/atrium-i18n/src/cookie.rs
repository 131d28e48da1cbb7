//! Locale preference cookie encoding.

use crate::locale::Locale;

/// Name of the preference cookie.
pub const LOCALE_COOKIE: &str = "ATRIUM_LOCALE";
/// One year, in seconds.
pub const LOCALE_COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

/// Extract a cookie value from a raw `Cookie` request header.
#[must_use]
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().trim_matches('"'))
    })
}

/// `Set-Cookie` value persisting `locale` site-wide for a year.
#[must_use]
pub fn locale_set_cookie(locale: Locale) -> String {
    format!(
        "{LOCALE_COOKIE}={}; Path=/; Max-Age={LOCALE_COOKIE_MAX_AGE_SECS}; SameSite=Lax",
        locale.code()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_finds_named_pair() {
        let header = "theme=dark; ATRIUM_LOCALE=ar;session=abc";
        assert_eq!(cookie_value(header, LOCALE_COOKIE), Some("ar"));
        assert_eq!(cookie_value(header, "session"), Some("abc"));
        assert_eq!(cookie_value(header, "missing"), None);
        assert_eq!(cookie_value("ATRIUM_LOCALE=\"en\"", LOCALE_COOKIE), Some("en"));
        assert_eq!(cookie_value("garbage", LOCALE_COOKIE), None);
    }

    #[test]
    fn set_cookie_is_site_wide_and_long_lived() {
        let header = locale_set_cookie(Locale::Ar);
        assert!(header.starts_with("ATRIUM_LOCALE=ar;"));
        assert!(header.contains("Path=/"));
        assert!(header.contains("Max-Age=31536000"));
    }
}
