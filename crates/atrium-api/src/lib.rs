#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, unreachable_pub)]
#![allow(clippy::module_name_repetitions)]

//! HTTP surface of the Atrium site.
//!
//! Layout: `state.rs` (shared catalog, content source and metrics), `i18n.rs`
//! (per-request locale middleware), `http/` (router, handlers, problem errors,
//! metrics layer), `error.rs` (`ApiServerError`).

pub mod error;
pub mod http;
pub mod i18n;
pub mod state;

pub use error::{ApiServerError, ApiServerResult};
pub use http::router::ApiServer;
pub use i18n::RequestLocale;
pub use state::ApiState;
