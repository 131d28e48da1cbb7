//! Fail-fast message loading and the shared per-locale catalog.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::bundle::MessageBundle;
use crate::error::I18nResult;
use crate::locale::Locale;
use crate::namespace::Namespace;
use crate::records::{HomeContent, ServicesPage, decode_home, decode_services};
use crate::source::MessageSource;

/// Everything one locale needs to render: raw bundle plus decoded page records.
#[derive(Clone, Debug, PartialEq)]
pub struct LocaleMessages {
    /// Raw namespaces for string lookups.
    pub bundle: MessageBundle,
    /// Decoded landing page.
    pub home: HomeContent,
    /// Decoded services page.
    pub services: ServicesPage,
}

/// Load every namespace for `locale` and decode its typed records.
///
/// # Errors
///
/// Fails on the first missing, unreadable or malformed namespace; no partial bundle is
/// ever returned.
pub fn load_messages(source: &dyn MessageSource, locale: Locale) -> I18nResult<LocaleMessages> {
    let mut namespaces = BTreeMap::new();
    for namespace in Namespace::all() {
        let tree = source.load(locale, namespace)?;
        debug!(
            locale = locale.code(),
            namespace = namespace.name(),
            "message namespace loaded"
        );
        namespaces.insert(namespace, tree);
    }
    let bundle = MessageBundle::new(locale, namespaces);
    let home = decode_home(&bundle)?;
    let services = decode_services(&bundle)?;
    Ok(LocaleMessages {
        bundle,
        home,
        services,
    })
}

/// Read-only messages for every supported locale, shared across requests.
#[derive(Clone, Debug)]
pub struct MessageCatalog {
    en: Arc<LocaleMessages>,
    ar: Arc<LocaleMessages>,
}

impl MessageCatalog {
    /// Load all supported locales from `source`.
    ///
    /// # Errors
    ///
    /// Propagates the first load failure of any locale.
    pub fn load(source: &dyn MessageSource) -> I18nResult<Self> {
        let catalog = Self {
            en: Arc::new(load_messages(source, Locale::En)?),
            ar: Arc::new(load_messages(source, Locale::Ar)?),
        };
        info!(
            locales = Locale::all().len(),
            namespaces = Namespace::all().len(),
            "message catalog loaded"
        );
        Ok(catalog)
    }

    /// Messages for a locale.
    #[must_use]
    pub fn get(&self, locale: Locale) -> Arc<LocaleMessages> {
        match locale {
            Locale::En => Arc::clone(&self.en),
            Locale::Ar => Arc::clone(&self.ar),
        }
    }
}
