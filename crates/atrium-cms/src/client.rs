//! HTTP client for the CMS REST API.
//!
//! # Design
//! - `fetch` is fallible and typed; the public lookups wrap it and degrade to empty.
//! - Failures are logged once here and counted; callers never see them.

use std::time::Duration;

use atrium_telemetry::{Metrics, current_request_id, current_route};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::collection::Collection;
use crate::error::{CmsError, CmsResult};
use crate::records::{CmsClientRecord, CmsTeamMember, Envelope, RawClient, RawTeamMember};

/// Query parameter carrying the case-insensitive name filter.
pub const NAME_FILTER_PARAM: &str = "filters[$or][0][name][$containsi]";

/// CMS client bound to one origin.
#[derive(Clone)]
pub struct CmsClient {
    http: Client,
    base: Url,
    metrics: Option<Metrics>,
}

impl CmsClient {
    /// Build a client for `base` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError::ClientBuild`] if the TLS backend cannot be initialised.
    pub fn new(base: Url, timeout: Duration, metrics: Option<Metrics>) -> CmsResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| CmsError::ClientBuild { source })?;
        Ok(Self {
            http,
            base: with_trailing_slash(base),
            metrics,
        })
    }

    /// Origin used for API calls and media resolution.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// `{base}/api/{collection}?[name filter]&populate=*`.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError::Url`] if the base URL cannot be extended.
    pub fn collection_url(&self, collection: Collection, query: Option<&str>) -> CmsResult<Url> {
        let mut url = self
            .base
            .join(&format!("api/{}", collection.path()))
            .map_err(|source| CmsError::Url {
                collection: collection.path(),
                source,
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(query) = query {
                pairs.append_pair(NAME_FILTER_PARAM, query);
            }
            pairs.append_pair("populate", "*");
        }
        Ok(url)
    }

    /// Fetch and decode the `data` array of a collection.
    ///
    /// # Errors
    ///
    /// Returns the first transport, status or decode failure.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        collection: Collection,
        query: Option<&str>,
    ) -> CmsResult<Vec<T>> {
        let name = collection.path();
        let url = self.collection_url(collection, query)?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| CmsError::Request {
                collection: name,
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status {
                collection: name,
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await.map_err(|source| CmsError::Request {
            collection: name,
            source,
        })?;
        let envelope: Envelope<T> =
            serde_json::from_slice(&body).map_err(|source| CmsError::Decode {
                collection: name,
                source,
            })?;
        debug!(collection = name, count = envelope.data.len(), "cms fetch complete");
        Ok(envelope.data)
    }

    /// Team members whose name contains `query`, or all of them for `None`.
    pub async fn lookup_team_members(&self, query: Option<&str>) -> Vec<CmsTeamMember> {
        let result = self
            .fetch::<RawTeamMember>(Collection::TeamMembers, query)
            .await;
        self.degrade(Collection::TeamMembers, result)
            .into_iter()
            .map(|member| member.into_record(&self.base))
            .collect()
    }

    /// Clients whose name contains `query`, or all of them for `None`.
    pub async fn lookup_clients(&self, query: Option<&str>) -> Vec<CmsClientRecord> {
        let result = self.fetch::<RawClient>(Collection::Clients, query).await;
        self.degrade(Collection::Clients, result)
            .into_iter()
            .map(|client| client.into_record(&self.base))
            .collect()
    }

    fn degrade<T>(&self, collection: Collection, result: CmsResult<Vec<T>>) -> Vec<T> {
        match result {
            Ok(items) => items,
            Err(err) => {
                warn!(
                    collection = collection.path(),
                    status = err.status(),
                    request_id = %current_request_id().unwrap_or_default(),
                    route = %current_route().unwrap_or_default(),
                    error = %err,
                    "cms lookup failed; returning no results"
                );
                if let Some(metrics) = &self.metrics {
                    metrics.inc_cms_failure(collection.path());
                }
                Vec::new()
            }
        }
    }
}

fn with_trailing_slash(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn client(base: &str) -> Result<CmsClient> {
        Ok(CmsClient::new(Url::parse(base)?, Duration::from_secs(1), None)?)
    }

    #[test]
    fn search_url_carries_filter_and_populate() -> Result<()> {
        let url =
            client("http://localhost:1337")?.collection_url(Collection::Clients, Some("acme"))?;
        assert_eq!(url.path(), "/api/clients");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                (NAME_FILTER_PARAM.to_string(), "acme".to_string()),
                ("populate".to_string(), "*".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn list_url_has_no_filter() -> Result<()> {
        let url = client("http://localhost:1337")?.collection_url(Collection::TeamMembers, None)?;
        assert_eq!(url.query(), Some("populate=*"));
        Ok(())
    }

    #[test]
    fn base_path_is_preserved() -> Result<()> {
        let url = client("https://example.com/cms")?.collection_url(Collection::Clients, None)?;
        assert_eq!(url.path(), "/cms/api/clients");
        Ok(())
    }
}
