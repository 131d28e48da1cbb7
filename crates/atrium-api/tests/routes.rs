use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use atrium_api::{ApiServer, ApiState};
use atrium_api_models::{FooterResponse, HomeResponse, SearchResponse, ServicesResponse};
use atrium_cms::{CmsClientRecord, StaticContentSource};
use atrium_i18n::{FsMessageSource, Locale, MessageCatalog, TextDirection};
use atrium_telemetry::Metrics;
use atrium_test_support::LocaleFixture;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

fn router(default_locale: Locale) -> Result<Router> {
    let fixture = LocaleFixture::shipped()?;
    let catalog = MessageCatalog::load(&FsMessageSource::new(fixture.root()))?;
    let content = StaticContentSource::new(
        Vec::new(),
        vec![CmsClientRecord {
            id: Some(3),
            name: "Nadia Farouk".to_string(),
            company: Some("Farouk Foods".to_string()),
            message: None,
            image_url: Some("http://cms.test/uploads/nadia.png".to_string()),
        }],
    );
    let state = ApiState::new(
        Arc::new(catalog),
        Arc::new(content),
        Metrics::new()?,
        default_locale,
        Duration::from_millis(4_500),
    );
    Ok(ApiServer::new(Arc::new(state)).into_router())
}

async fn get_json<T: DeserializeOwned>(router: Router, request: Request<Body>) -> Result<T> {
    let response = router.oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&body)?)
}

#[tokio::test]
async fn accept_language_selects_arabic_home() -> Result<()> {
    let home: HomeResponse = get_json(
        router(Locale::En)?,
        Request::get("/v1/home")
            .header(header::ACCEPT_LANGUAGE, "ar-SA,en;q=0.5")
            .body(Body::empty())?,
    )
    .await?;
    assert_eq!(home.locale, Locale::Ar);
    assert_eq!(home.dir, TextDirection::Rtl);
    assert_eq!(home.hero.interval_ms, 4_500);
    Ok(())
}

#[tokio::test]
async fn configured_default_applies_without_inputs() -> Result<()> {
    let services: ServicesResponse = get_json(
        router(Locale::Ar)?,
        Request::get("/v1/services").body(Body::empty())?,
    )
    .await?;
    assert_eq!(services.locale, Locale::Ar);
    Ok(())
}

#[tokio::test]
async fn search_filters_clients_by_name() -> Result<()> {
    let search: SearchResponse = get_json(
        router(Locale::En)?,
        Request::get("/v1/search?q=nadia").body(Body::empty())?,
    )
    .await?;
    assert_eq!(search.query, "nadia");
    assert_eq!(search.clients.len(), 1);
    assert_eq!(search.clients[0].company.as_deref(), Some("Farouk Foods"));
    assert!(search.team_members.is_empty());
    Ok(())
}

#[tokio::test]
async fn footer_follows_cookie_locale() -> Result<()> {
    let footer: FooterResponse = get_json(
        router(Locale::En)?,
        Request::get("/v1/footer")
            .header(header::COOKIE, "ATRIUM_LOCALE=ar")
            .body(Body::empty())?,
    )
    .await?;
    assert_eq!(footer.locale, Locale::Ar);
    assert_eq!(footer.links.len(), 5);
    Ok(())
}
