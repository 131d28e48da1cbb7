//! Locale introspection and switching.

use std::sync::Arc;

use atrium_api_models::{
    LocaleOption, LocaleResponse, LocaleUpdateRequest, LocaleUpdateResponse, ProblemInvalidParam,
};
use atrium_i18n::{Locale, coerce_locale, locale_set_cookie};
use axum::{
    Extension, Json,
    extract::State,
    http::{HeaderName, header::SET_COOKIE},
};
use tracing::info;

use crate::http::constants::DEFAULT_REVALIDATE_PATH;
use crate::http::errors::ApiError;
use crate::i18n::RequestLocale;
use crate::state::ApiState;

pub(crate) async fn get_locale(Extension(locale): Extension<RequestLocale>) -> Json<LocaleResponse> {
    Json(LocaleResponse {
        locale: locale.locale,
        dir: locale.direction(),
        lang: locale.locale.code().to_string(),
        source: locale.source,
        supported: Locale::all().into_iter().map(LocaleOption::from).collect(),
    })
}

/// Persist the locale preference. Unsupported codes store the default locale.
pub(crate) async fn put_locale(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<LocaleUpdateRequest>,
) -> Result<([(HeaderName, String); 1], Json<LocaleUpdateResponse>), ApiError> {
    let revalidate = request
        .path
        .as_deref()
        .map_or(DEFAULT_REVALIDATE_PATH, str::trim);
    validate_path(revalidate)?;

    let locale = coerce_locale(request.locale.trim(), state.default_locale);
    info!(
        requested = %request.locale,
        locale = locale.code(),
        path = revalidate,
        "locale preference updated"
    );
    Ok((
        [(SET_COOKIE, locale_set_cookie(locale))],
        Json(LocaleUpdateResponse {
            locale,
            dir: locale.direction(),
            revalidate: revalidate.to_string(),
        }),
    ))
}

fn validate_path(path: &str) -> Result<(), ApiError> {
    if path.starts_with('/') && !path.starts_with("//") {
        return Ok(());
    }
    Err(
        ApiError::bad_request("revalidation path must be site-relative").with_invalid_params(
            vec![ProblemInvalidParam {
                pointer: "/path".to_string(),
                message: "must start with a single '/'".to_string(),
            }],
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::{request_locale, test_state};
    use atrium_i18n::{LocaleSource, TextDirection};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn update(locale: &str, path: Option<&str>) -> Json<LocaleUpdateRequest> {
        Json(LocaleUpdateRequest {
            locale: locale.to_string(),
            path: path.map(ToString::to_string),
        })
    }

    #[tokio::test]
    async fn get_locale_describes_the_resolution() {
        let Json(body) = get_locale(Extension(request_locale(Locale::Ar))).await;
        assert_eq!(body.locale, Locale::Ar);
        assert_eq!(body.dir, TextDirection::Rtl);
        assert_eq!(body.lang, "ar");
        assert_eq!(body.source, LocaleSource::Cookie);
        assert_eq!(body.supported.len(), 2);
    }

    #[tokio::test]
    async fn put_locale_sets_a_year_long_cookie() -> anyhow::Result<()> {
        let state = test_state()?;
        let ([(name, cookie)], Json(body)) = put_locale(State(state), update("ar", Some("/services")))
            .await
            .map_err(|err| anyhow::anyhow!("{err:?}"))?;
        assert_eq!(name, SET_COOKIE);
        assert!(cookie.starts_with("ATRIUM_LOCALE=ar;"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=31536000"));
        assert_eq!(body.locale, Locale::Ar);
        assert_eq!(body.dir, TextDirection::Rtl);
        assert_eq!(body.revalidate, "/services");
        Ok(())
    }

    #[tokio::test]
    async fn unsupported_locale_stores_default() -> anyhow::Result<()> {
        let state = test_state()?;
        let ([(_, cookie)], Json(body)) = put_locale(State(state), update("fr", None))
            .await
            .map_err(|err| anyhow::anyhow!("{err:?}"))?;
        assert_eq!(body.locale, Locale::En);
        assert_eq!(body.revalidate, "/");
        assert!(cookie.starts_with("ATRIUM_LOCALE=en;"));
        Ok(())
    }

    #[tokio::test]
    async fn off_site_paths_are_rejected() -> anyhow::Result<()> {
        for path in ["https://evil.test/", "//evil.test", "services"] {
            let state = test_state()?;
            let Err(err) = put_locale(State(state), update("ar", Some(path))).await else {
                anyhow::bail!("path {path} was accepted");
            };
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
        Ok(())
    }
}
