//! Message namespaces loaded independently per locale.

use serde::{Deserialize, Serialize};

/// A named group of translation keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    /// Top navigation strings and the services menu.
    Navbar,
    /// Landing page: hero slides, team and clients sections.
    Home,
    /// Services page.
    Services,
    /// Search page.
    Search,
    /// Footer strings and links.
    Footer,
}

impl Namespace {
    /// Every namespace a render requires.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Navbar,
            Self::Home,
            Self::Services,
            Self::Search,
            Self::Footer,
        ]
    }

    /// File stem of the bundle (`<locale>/<name>.json`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Navbar => "navbar",
            Self::Home => "home",
            Self::Services => "services",
            Self::Search => "search",
            Self::Footer => "footer",
        }
    }

    /// Parse a namespace name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|namespace| namespace.name() == name)
    }
}
