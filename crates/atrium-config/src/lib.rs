#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, unreachable_pub)]
#![allow(clippy::module_name_repetitions)]

//! Environment-driven site configuration.
//!
//! Layout: `defaults.rs` (fallback values), `error.rs` (`ConfigError`), `model.rs`
//! (`SiteConfig` and its loader), `validate.rs` (per-field parsing).

pub mod defaults;
pub mod error;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use model::{LogFormatSetting, SiteConfig};
