//! Supported locales and the layout direction each one implies.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    En,
    /// Arabic.
    Ar,
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: Locale = Locale::En;

impl Locale {
    /// All supported locales, in negotiation order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Ar]
    }

    /// Two-letter code used in cookies, paths and the `lang` attribute.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Human-friendly label for the locale switcher.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }

    /// Layout direction implied by the locale.
    #[must_use]
    pub const fn direction(self) -> TextDirection {
        match self {
            Self::Ar => TextDirection::Rtl,
            Self::En => TextDirection::Ltr,
        }
    }

    /// The other supported locale; backs the two-state switcher.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Parse an exact supported code. Surrounding whitespace and case are ignored.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let trimmed = code.trim();
        Self::all()
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(trimmed))
    }
}

impl Display for Locale {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}

/// Horizontal reading direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    /// Whether the layout is mirrored.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arabic_is_the_only_rtl_locale() {
        for locale in Locale::all() {
            assert_eq!(locale.direction().is_rtl(), locale == Locale::Ar);
        }
        assert_eq!(Locale::Ar.direction().as_str(), "rtl");
    }

    #[test]
    fn from_code_rejects_unsupported_values() {
        assert_eq!(Locale::from_code(" AR "), Some(Locale::Ar));
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code("en-US"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn toggled_swaps_between_the_two_locales() {
        assert_eq!(Locale::En.toggled(), Locale::Ar);
        assert_eq!(Locale::Ar.toggled().toggled(), Locale::Ar);
    }

    #[test]
    fn serde_uses_lowercase_codes() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Locale::Ar)?, "\"ar\"");
        let parsed: TextDirection = serde_json::from_str("\"rtl\"")?;
        assert_eq!(parsed, TextDirection::Rtl);
        Ok(())
    }
}
