//! Typed page view models built from the active locale's bundles.

use std::sync::Arc;

use atrium_api_models::{
    FooterResponse, HeroView, HomeResponse, NewsletterLabels, ServicesResponse,
};
use atrium_i18n::Namespace;
use axum::{Extension, Json, extract::State};
use chrono::{Datelike, Utc};

use crate::i18n::RequestLocale;
use crate::state::ApiState;

pub(crate) async fn home(
    State(state): State<Arc<ApiState>>,
    Extension(locale): Extension<RequestLocale>,
) -> Json<HomeResponse> {
    let messages = state.messages(locale.locale);
    let content = &messages.home;
    Json(HomeResponse {
        locale: locale.locale,
        dir: locale.direction(),
        hero: HeroView {
            interval_ms: state.hero_interval_ms(),
            slides: content.slides.clone(),
        },
        team: content.team.clone(),
        clients: content.clients.clone(),
    })
}

pub(crate) async fn services(
    State(state): State<Arc<ApiState>>,
    Extension(locale): Extension<RequestLocale>,
) -> Json<ServicesResponse> {
    let messages = state.messages(locale.locale);
    Json(ServicesResponse {
        locale: locale.locale,
        dir: locale.direction(),
        page: messages.services.clone(),
    })
}

pub(crate) async fn footer(
    State(state): State<Arc<ApiState>>,
    Extension(locale): Extension<RequestLocale>,
) -> Json<FooterResponse> {
    let messages = state.messages(locale.locale);
    let bundle = &messages.bundle;
    Json(FooterResponse {
        locale: locale.locale,
        dir: locale.direction(),
        contacts: bundle.text(Namespace::Footer, "contacts"),
        links: bundle.strings(Namespace::Footer, "links"),
        rights: bundle.text(Namespace::Footer, "rights"),
        year: Utc::now().year(),
        newsletter: NewsletterLabels {
            placeholder: bundle.text(Namespace::Footer, "emailPlaceholder"),
            subscribe: bundle.text(Namespace::Footer, "subscribe"),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::{request_locale, test_state};
    use atrium_i18n::{Locale, TextDirection};

    #[tokio::test]
    async fn home_carries_slides_interval_and_sections() -> anyhow::Result<()> {
        let state = test_state()?;
        let Json(body) = home(State(state), Extension(request_locale(Locale::En))).await;
        assert_eq!(body.hero.interval_ms, 6_000);
        assert!(!body.hero.slides.is_empty());
        assert!(!body.team.members.is_empty());
        assert!(!body.clients.slides.is_empty());
        assert_eq!(body.dir, TextDirection::Ltr);
        Ok(())
    }

    #[tokio::test]
    async fn arabic_home_is_rtl_and_translated() -> anyhow::Result<()> {
        let state = test_state()?;
        let Json(en) = home(State(Arc::clone(&state)), Extension(request_locale(Locale::En))).await;
        let Json(ar) = home(State(state), Extension(request_locale(Locale::Ar))).await;
        assert_eq!(ar.dir, TextDirection::Rtl);
        assert_ne!(en.team.title, ar.team.title);
        Ok(())
    }

    #[tokio::test]
    async fn services_page_has_three_sections() -> anyhow::Result<()> {
        let state = test_state()?;
        let Json(body) = services(State(state), Extension(request_locale(Locale::En))).await;
        assert_eq!(body.page.sections.len(), 3);
        assert_eq!(body.page.title, "Our Services");
        Ok(())
    }

    #[tokio::test]
    async fn footer_lists_links_and_current_year() -> anyhow::Result<()> {
        let state = test_state()?;
        let Json(body) = footer(State(state), Extension(request_locale(Locale::En))).await;
        assert_eq!(body.links.len(), 5);
        assert_eq!(body.contacts, "Contacts");
        assert_eq!(body.newsletter.subscribe, "Subscribe");
        assert_eq!(body.year, Utc::now().year());
        Ok(())
    }
}
