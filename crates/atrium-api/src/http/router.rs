//! Router construction and server host for the API.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    http::{
        HeaderName, Method,
        header::{ACCEPT_LANGUAGE, CONTENT_TYPE},
    },
    middleware,
    routing::get,
};
use atrium_telemetry::{http_trace_layer, propagate_request_id_layer, set_request_id_layer};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::error::{ApiServerError, ApiServerResult};
use crate::http::constants::HEADER_REQUEST_ID;
use crate::http::health::{health, metrics};
use crate::http::locale::{get_locale, put_locale};
use crate::http::messages::{get_messages, get_namespace};
use crate::http::pages::{footer, home, services};
use crate::http::search::search;
use crate::http::telemetry::HttpMetricsLayer;
use crate::i18n::with_locale;
use crate::state::ApiState;

/// Axum router wrapper that hosts the Atrium API.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Build the router over shared state.
    #[must_use]
    pub fn new(state: Arc<ApiState>) -> Self {
        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
            .allow_headers([
                CONTENT_TYPE,
                ACCEPT_LANGUAGE,
                HeaderName::from_static(HEADER_REQUEST_ID),
            ]);
        let layered = ServiceBuilder::new()
            .layer(set_request_id_layer())
            .layer(propagate_request_id_layer())
            .layer(http_trace_layer())
            .layer(HttpMetricsLayer::new(state.telemetry.clone()));

        let router = Self::public_routes()
            .merge(Self::v1_routes(&state))
            .layer(cors_layer)
            .route_layer(layered)
            .with_state(state);

        Self { router }
    }

    fn public_routes() -> Router<Arc<ApiState>> {
        Router::new()
            .route("/health", get(health))
            .route("/metrics", get(metrics))
    }

    fn v1_routes(state: &Arc<ApiState>) -> Router<Arc<ApiState>> {
        let resolve_locale = middleware::from_fn_with_state(state.clone(), with_locale);

        Router::new()
            .route("/v1/locale", get(get_locale).put(put_locale))
            .route("/v1/messages", get(get_messages))
            .route("/v1/messages/{namespace}", get(get_namespace))
            .route("/v1/home", get(home))
            .route("/v1/services", get(services))
            .route("/v1/search", get(search))
            .route("/v1/footer", get(footer))
            .route_layer(resolve_locale)
    }

    /// The assembled router, for embedding or in-process testing.
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server terminates unexpectedly.
    pub async fn serve<F>(self, addr: SocketAddr, shutdown: F) -> ApiServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ApiServerError::Bind { addr, source })?;
        info!(%addr, "starting api");
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|source| ApiServerError::Serve { source })?;
        info!("api stopped");
        Ok(())
    }
}
