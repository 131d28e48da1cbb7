//! HTTP handlers, routing and middleware.

pub(crate) mod constants;
pub(crate) mod errors;
pub(crate) mod health;
pub(crate) mod locale;
pub(crate) mod messages;
pub(crate) mod pages;
pub mod router;
pub(crate) mod search;
pub(crate) mod telemetry;

#[cfg(test)]
pub(crate) mod test_support;
