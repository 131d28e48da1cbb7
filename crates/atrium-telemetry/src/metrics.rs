//! Prometheus-backed metrics registry.
//!
//! # Design
//! - Collector registration stays private; callers only see increment helpers.
//! - Label values come from closed sets (routes, locale sources, CMS collections).

use std::sync::Arc;

use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use serde::Serialize;

use crate::error::{TelemetryError, TelemetryResult};

/// Metrics registry shared across the server.
#[derive(Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    registry: Registry,
    http_requests_total: IntCounterVec,
    locale_resolutions_total: IntCounterVec,
    cms_failures_total: IntCounterVec,
}

/// Point-in-time counters surfaced by the health endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    /// Requests whose locale came from the preference cookie.
    pub locale_from_cookie: u64,
    /// Requests whose locale came from `Accept-Language`.
    pub locale_from_header: u64,
    /// Requests that fell through to the default locale.
    pub locale_from_default: u64,
    /// CMS calls that degraded to an empty result.
    pub cms_failures: u64,
}

const CMS_COLLECTIONS: [&str; 2] = ["team-members", "clients"];

impl Metrics {
    /// Build a registry with the standard collectors.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::MetricsRegister`] if a collector cannot be registered.
    pub fn new() -> TelemetryResult<Self> {
        let registry = Registry::new();
        let http_requests_total = register(
            &registry,
            "http_requests_total",
            "Total HTTP requests served",
            &["route", "code"],
        )?;
        let locale_resolutions_total = register(
            &registry,
            "locale_resolutions_total",
            "Locale negotiations by deciding input",
            &["source"],
        )?;
        let cms_failures_total = register(
            &registry,
            "cms_failures_total",
            "CMS calls that degraded to empty results",
            &["collection"],
        )?;

        Ok(Self {
            inner: Arc::new(MetricsInner {
                registry,
                http_requests_total,
                locale_resolutions_total,
                cms_failures_total,
            }),
        })
    }

    /// Count a served request.
    pub fn inc_http_request(&self, route: &str, status: u16) {
        self.inner
            .http_requests_total
            .with_label_values(&[route, &status.to_string()])
            .inc();
    }

    /// Count a locale negotiation; `source` is `cookie`, `header` or `default`.
    pub fn inc_locale_resolution(&self, source: &str) {
        self.inner
            .locale_resolutions_total
            .with_label_values(&[source])
            .inc();
    }

    /// Count a degraded CMS call.
    pub fn inc_cms_failure(&self, collection: &str) {
        self.inner
            .cms_failures_total
            .with_label_values(&[collection])
            .inc();
    }

    /// Render the registry in the Prometheus text exposition format.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the output is not UTF-8.
    pub fn render(&self) -> TelemetryResult<String> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.inner.registry.gather(), &mut buffer)
            .map_err(|source| TelemetryError::MetricsEncode { source })?;
        String::from_utf8(buffer).map_err(|source| TelemetryError::MetricsUtf8 { source })
    }

    /// Snapshot the counters reported by the health endpoint.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        let locale = |source: &str| {
            self.inner
                .locale_resolutions_total
                .with_label_values(&[source])
                .get()
        };
        MetricsSnapshot {
            locale_from_cookie: locale("cookie"),
            locale_from_header: locale("header"),
            locale_from_default: locale("default"),
            cms_failures: CMS_COLLECTIONS
                .iter()
                .map(|collection| {
                    self.inner
                        .cms_failures_total
                        .with_label_values(&[*collection])
                        .get()
                })
                .sum(),
        }
    }
}

fn register(
    registry: &Registry,
    name: &'static str,
    help: &str,
    labels: &[&str],
) -> TelemetryResult<IntCounterVec> {
    let counter = IntCounterVec::new(Opts::new(name, help), labels)
        .map_err(|source| TelemetryError::MetricsRegister { name, source })?;
    registry
        .register(Box::new(counter.clone()))
        .map_err(|source| TelemetryError::MetricsRegister { name, source })?;
    Ok(counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_render_with_labels() -> TelemetryResult<()> {
        let metrics = Metrics::new()?;
        metrics.inc_http_request("/v1/home", 200);
        metrics.inc_locale_resolution("header");
        metrics.inc_cms_failure("clients");

        let rendered = metrics.render()?;
        assert!(rendered.contains("http_requests_total{code=\"200\",route=\"/v1/home\"} 1"));
        assert!(rendered.contains("locale_resolutions_total{source=\"header\"} 1"));
        assert!(rendered.contains("cms_failures_total{collection=\"clients\"} 1"));
        Ok(())
    }

    #[test]
    fn snapshot_sums_by_source_and_collection() -> TelemetryResult<()> {
        let metrics = Metrics::new()?;
        metrics.inc_locale_resolution("cookie");
        metrics.inc_locale_resolution("cookie");
        metrics.inc_locale_resolution("default");
        metrics.inc_cms_failure("clients");
        metrics.inc_cms_failure("team-members");

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.locale_from_cookie, 2);
        assert_eq!(snapshot.locale_from_header, 0);
        assert_eq!(snapshot.locale_from_default, 1);
        assert_eq!(snapshot.cms_failures, 2);
        Ok(())
    }

    #[test]
    fn clones_share_the_registry() -> TelemetryResult<()> {
        let metrics = Metrics::new()?;
        metrics.clone().inc_cms_failure("clients");
        assert_eq!(metrics.snapshot().cms_failures, 1);
        Ok(())
    }
}
