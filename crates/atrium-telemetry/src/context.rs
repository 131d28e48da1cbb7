//! Application span and per-request context.
//!
//! # Design
//! - Request id and matched route live in task-local storage for the whole handler.
//! - The negotiated locale is recorded on the request span once middleware resolves it.

use std::future::Future;
use std::sync::Arc;

use tracing::{Span, span::Entered};

use crate::init::build_sha;

/// Keeps the application-level span entered for the lifetime of the process.
pub struct GlobalContextGuard {
    _guard: Entered<'static>,
}

impl GlobalContextGuard {
    /// Enter the `app` span tagged with `service` and the build SHA.
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        let service = service.into();
        let span: &'static Span = Box::leak(Box::new(
            tracing::info_span!("app", service = %service, build_sha = %build_sha()),
        ));
        Self {
            _guard: span.enter(),
        }
    }
}

/// Record the negotiated locale and which input decided it on the current span.
pub fn record_locale(locale: &str, source: &str) {
    let span = Span::current();
    span.record("locale", tracing::field::display(locale));
    span.record("locale_source", tracing::field::display(source));
}

/// Request identifier of the in-flight request, if any.
#[must_use]
pub fn current_request_id() -> Option<String> {
    ACTIVE_REQUEST_CONTEXT
        .try_with(|ctx| ctx.request_id.as_ref().to_string())
        .ok()
}

/// Matched route of the in-flight request, if any.
#[must_use]
pub fn current_route() -> Option<String> {
    ACTIVE_REQUEST_CONTEXT
        .try_with(|ctx| ctx.route.as_ref().to_string())
        .ok()
}

/// Run `fut` with the request id and route visible to everything it awaits.
pub async fn with_request_context<Fut, T>(
    request_id: impl Into<String>,
    route: impl Into<String>,
    fut: Fut,
) -> T
where
    Fut: Future<Output = T>,
{
    let context = RequestContext {
        request_id: Arc::from(request_id.into()),
        route: Arc::from(route.into()),
    };
    ACTIVE_REQUEST_CONTEXT.scope(context, fut).await
}

#[derive(Clone)]
struct RequestContext {
    request_id: Arc<str>,
    route: Arc<str>,
}

tokio::task_local! {
    static ACTIVE_REQUEST_CONTEXT: RequestContext;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_guard_can_be_entered_and_dropped() {
        let guard = GlobalContextGuard::new("atrium-test");
        record_locale("ar", "cookie");
        drop(guard);
    }

    #[tokio::test]
    async fn request_context_is_scoped_to_the_future() {
        let output = with_request_context("req-7", "/v1/home", async {
            assert_eq!(current_request_id().as_deref(), Some("req-7"));
            assert_eq!(current_route().as_deref(), Some("/v1/home"));
            "rendered"
        })
        .await;
        assert_eq!(output, "rendered");
        assert!(current_request_id().is_none());
        assert!(current_route().is_none());
    }
}
