//! Raw message bundles for client-side rendering.

use std::sync::Arc;

use atrium_api_models::MessagesResponse;
use atrium_i18n::Namespace;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde_json::{Map, Value};

use crate::http::errors::ApiError;
use crate::i18n::RequestLocale;
use crate::state::ApiState;

pub(crate) async fn get_messages(
    State(state): State<Arc<ApiState>>,
    Extension(locale): Extension<RequestLocale>,
) -> Json<MessagesResponse> {
    let messages = state.messages(locale.locale);
    Json(MessagesResponse {
        locale: locale.locale,
        dir: locale.direction(),
        messages: messages.bundle.to_json(),
    })
}

pub(crate) async fn get_namespace(
    State(state): State<Arc<ApiState>>,
    Extension(locale): Extension<RequestLocale>,
    Path(name): Path<String>,
) -> Result<Json<MessagesResponse>, ApiError> {
    let namespace = Namespace::from_name(&name)
        .ok_or_else(|| ApiError::not_found(format!("unknown message namespace '{name}'")))?;
    let messages = state.messages(locale.locale);
    let tree = messages
        .bundle
        .namespace(namespace)
        .cloned()
        .ok_or_else(|| ApiError::internal("message namespace not loaded"))?;

    let mut map = Map::new();
    map.insert(namespace.name().to_string(), tree);
    Ok(Json(MessagesResponse {
        locale: locale.locale,
        dir: locale.direction(),
        messages: Value::Object(map),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::{request_locale, test_state};
    use atrium_i18n::{Locale, TextDirection};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn all_namespaces_are_served() -> anyhow::Result<()> {
        let state = test_state()?;
        let Json(body) = get_messages(State(state), Extension(request_locale(Locale::Ar))).await;
        assert_eq!(body.dir, TextDirection::Rtl);
        for namespace in Namespace::all() {
            assert!(body.messages.get(namespace.name()).is_some(), "{namespace:?}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn single_namespace_is_keyed_by_name() -> anyhow::Result<()> {
        let state = test_state()?;
        let Json(body) = get_namespace(
            State(state),
            Extension(request_locale(Locale::En)),
            Path("footer".to_string()),
        )
        .await
        .map_err(|err| anyhow::anyhow!("{err:?}"))?;
        assert_eq!(body.messages["footer"]["subscribe"], "Subscribe");
        assert!(body.messages.get("home").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_namespace_is_not_found() -> anyhow::Result<()> {
        let state = test_state()?;
        let Err(err) = get_namespace(
            State(state),
            Extension(request_locale(Locale::En)),
            Path("blog".to_string()),
        )
        .await
        else {
            anyhow::bail!("unknown namespace was served");
        };
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
        Ok(())
    }
}
