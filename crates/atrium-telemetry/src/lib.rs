#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, unreachable_pub)]
#![allow(clippy::module_name_repetitions)]

//! Logging, request tracing and metrics for the Atrium server.
//!
//! Layout: `init.rs` (subscriber install + build SHA), `context.rs` (app span and
//! task-local request context), `layers.rs` (request-id and trace layers),
//! `metrics.rs` (Prometheus registry), `error.rs` (`TelemetryError`).

pub mod context;
pub mod error;
pub mod init;
pub mod layers;
pub mod metrics;

pub use context::{
    GlobalContextGuard, current_request_id, current_route, record_locale, with_request_context,
};
pub use error::{TelemetryError, TelemetryResult};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
pub use layers::{
    HEADER_REQUEST_ID, RecordResponse, RequestSpan, http_trace_layer, propagate_request_id_layer,
    request_id, set_request_id_layer,
};
pub use metrics::{Metrics, MetricsSnapshot};
