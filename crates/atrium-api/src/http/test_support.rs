//! Fixtures shared by handler tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use atrium_cms::{
    CmsClientRecord, CmsTeamMember, ContentSource, SocialLink, StaticContentSource,
};
use atrium_i18n::{FsMessageSource, Locale, LocaleSource, MessageCatalog};
use atrium_telemetry::Metrics;
use atrium_test_support::LocaleFixture;

use crate::i18n::RequestLocale;
use crate::state::ApiState;

pub(crate) fn shipped_catalog() -> anyhow::Result<Arc<MessageCatalog>> {
    let fixture = LocaleFixture::shipped()?;
    let catalog = MessageCatalog::load(&FsMessageSource::new(fixture.root()))?;
    Ok(Arc::new(catalog))
}

pub(crate) fn sample_content() -> StaticContentSource {
    StaticContentSource::new(
        vec![CmsTeamMember {
            id: Some(1),
            name: "Omar Khalil".to_string(),
            position: Some("Tax Partner".to_string()),
            image_url: Some("http://cms.test/uploads/omar.jpg".to_string()),
            social_links: vec![SocialLink {
                label: "linkedin".to_string(),
                href: "https://linkedin.com/in/omar".to_string(),
            }],
        }],
        vec![CmsClientRecord {
            id: Some(7),
            name: "Lina Haddad".to_string(),
            company: Some("Haddad Logistics".to_string()),
            message: Some("Clear advice, delivered on time.".to_string()),
            image_url: None,
        }],
    )
}

pub(crate) fn state_with(content: Arc<dyn ContentSource>) -> anyhow::Result<Arc<ApiState>> {
    Ok(Arc::new(ApiState::new(
        shipped_catalog()?,
        content,
        Metrics::new()?,
        Locale::En,
        Duration::from_millis(6_000),
    )))
}

pub(crate) fn test_state() -> anyhow::Result<Arc<ApiState>> {
    state_with(Arc::new(sample_content()))
}

pub(crate) const fn request_locale(locale: Locale) -> RequestLocale {
    RequestLocale {
        locale,
        source: LocaleSource::Cookie,
    }
}

/// Content source that counts lookups and returns nothing.
#[derive(Default)]
pub(crate) struct CountingSource {
    calls: AtomicUsize,
}

impl CountingSource {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentSource for CountingSource {
    async fn team_members(&self, _query: Option<&str>) -> Vec<CmsTeamMember> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Vec::new()
    }

    async fn clients(&self, _query: Option<&str>) -> Vec<CmsClientRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Vec::new()
    }
}
