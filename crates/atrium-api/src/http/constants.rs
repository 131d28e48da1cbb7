//! Shared HTTP constants (headers, problem URIs).

pub(crate) const HEADER_REQUEST_ID: &str = atrium_telemetry::HEADER_REQUEST_ID;
pub(crate) const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";
pub(crate) const DEFAULT_REVALIDATE_PATH: &str = "/";

pub(crate) const PROBLEM_INTERNAL: &str = "https://atrium.dev/problems/internal";
pub(crate) const PROBLEM_BAD_REQUEST: &str = "https://atrium.dev/problems/bad-request";
pub(crate) const PROBLEM_NOT_FOUND: &str = "https://atrium.dev/problems/not-found";
