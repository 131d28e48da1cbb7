//! Shared API state.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use atrium_cms::ContentSource;
use atrium_i18n::{Locale, LocaleMessages, MessageCatalog};
use atrium_telemetry::Metrics;

/// Dependencies shared by every request handler.
pub struct ApiState {
    pub(crate) catalog: Arc<MessageCatalog>,
    pub(crate) content: Arc<dyn ContentSource>,
    pub(crate) telemetry: Metrics,
    pub(crate) default_locale: Locale,
    pub(crate) hero_interval: Duration,
}

impl ApiState {
    /// Bundle the loaded catalog, content source and metrics handle.
    #[must_use]
    pub fn new(
        catalog: Arc<MessageCatalog>,
        content: Arc<dyn ContentSource>,
        telemetry: Metrics,
        default_locale: Locale,
        hero_interval: Duration,
    ) -> Self {
        Self {
            catalog,
            content,
            telemetry,
            default_locale,
            hero_interval,
        }
    }

    /// Messages for `locale`.
    pub(crate) fn messages(&self, locale: Locale) -> Arc<LocaleMessages> {
        self.catalog.get(locale)
    }

    /// Hero auto-advance period in whole milliseconds.
    pub(crate) fn hero_interval_ms(&self) -> u64 {
        u64::try_from(self.hero_interval.as_millis()).unwrap_or(u64::MAX)
    }
}

impl fmt::Debug for ApiState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ApiState")
            .field("default_locale", &self.default_locale)
            .field("hero_interval", &self.hero_interval)
            .finish_non_exhaustive()
    }
}
