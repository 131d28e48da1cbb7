//! HTTP client helpers (REST).

use atrium_api_models::{
    FooterResponse, HomeResponse, LocaleResponse, LocaleUpdateRequest, LocaleUpdateResponse,
    MessagesResponse, SearchResponse, ServicesResponse,
};
use atrium_i18n::{Locale, Namespace};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let response = Request::get(&format!("{}{}", self.base_url, path))
            .send()
            .await?;
        if !response.ok() {
            anyhow::bail!("GET {path} returned {}", response.status());
        }
        Ok(response.json::<T>().await?)
    }

    pub(crate) async fn fetch_locale(&self) -> anyhow::Result<LocaleResponse> {
        self.get_json("/v1/locale").await
    }

    pub(crate) async fn fetch_namespace(
        &self,
        namespace: Namespace,
    ) -> anyhow::Result<MessagesResponse> {
        self.get_json(&format!("/v1/messages/{}", namespace.name()))
            .await
    }

    pub(crate) async fn fetch_home(&self) -> anyhow::Result<HomeResponse> {
        self.get_json("/v1/home").await
    }

    pub(crate) async fn fetch_services(&self) -> anyhow::Result<ServicesResponse> {
        self.get_json("/v1/services").await
    }

    pub(crate) async fn fetch_footer(&self) -> anyhow::Result<FooterResponse> {
        self.get_json("/v1/footer").await
    }

    pub(crate) async fn search(&self, query: &str) -> anyhow::Result<SearchResponse> {
        self.get_json(&format!("/v1/search?q={}", urlencoding::encode(query)))
            .await
    }

    pub(crate) async fn set_locale(
        &self,
        locale: Locale,
        path: &str,
    ) -> anyhow::Result<LocaleUpdateResponse> {
        let body = LocaleUpdateRequest {
            locale: locale.code().to_string(),
            path: Some(path.to_string()),
        };
        let response = Request::put(&format!("{}/v1/locale", self.base_url))
            .json(&body)?
            .send()
            .await?;
        if !response.ok() {
            anyhow::bail!("PUT /v1/locale returned {}", response.status());
        }
        Ok(response.json::<LocaleUpdateResponse>().await?)
    }
}
