//! Tower layers for request ids and HTTP spans.

use std::time::Duration;

use http::{HeaderMap, Request, Response};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, HttpMakeClassifier, MakeSpan, OnResponse, TraceLayer};
use tracing::Span;

use crate::init::build_sha;

/// Header carrying the request identifier.
pub const HEADER_REQUEST_ID: &str = "x-request-id";

/// Generates an `x-request-id` for requests that arrive without one.
#[must_use]
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Copies `x-request-id` from the request onto the response.
#[must_use]
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// Request id from `headers`, or an empty string.
#[must_use]
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(HEADER_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// Opens the `http.request` span with empty slots for locale, status and latency.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "http.request",
            method = %request.method(),
            route = %request.uri().path(),
            request_id = %request_id(request.headers()),
            build_sha = %build_sha(),
            locale = tracing::field::Empty,
            locale_source = tracing::field::Empty,
            status_code = tracing::field::Empty,
            latency_ms = tracing::field::Empty
        )
    }
}

/// Records status and latency on the request span.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordResponse;

impl<B> OnResponse<B> for RecordResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, span: &Span) {
        span.record("status_code", response.status().as_u16());
        span.record(
            "latency_ms",
            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
        );
    }
}

/// Trace layer wired with [`RequestSpan`] and [`RecordResponse`].
#[must_use]
pub fn http_trace_layer() -> TraceLayer<HttpMakeClassifier, RequestSpan, DefaultOnRequest, RecordResponse>
{
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(RecordResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn layers_can_be_constructed() {
        let _set = set_request_id_layer();
        let _propagate = propagate_request_id_layer();
        let _trace = http_trace_layer();
    }

    #[test]
    fn request_id_reads_header_or_defaults() {
        let mut headers = HeaderMap::new();
        assert_eq!(request_id(&headers), "");
        headers.insert(HEADER_REQUEST_ID, HeaderValue::from_static("abc"));
        assert_eq!(request_id(&headers), "abc");
    }

    #[test]
    fn request_span_accepts_response_fields() {
        let request = Request::builder().uri("/v1/home").body(()).unwrap_or_default();
        let span = RequestSpan.make_span(&request);
        RecordResponse.on_response(&Response::new(()), Duration::from_millis(3), &span);
    }
}
