#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, unreachable_pub)]
#![allow(clippy::module_name_repetitions)]

//! Locale negotiation and message bundles for the Atrium site.
//!
//! Layout: `locale.rs` (supported set + direction), `resolve.rs` (cookie/header/default
//! negotiation), `cookie.rs` (preference cookie), `source.rs` (bundle stores),
//! `bundle.rs` (lookups), `records.rs` (typed page records), `catalog.rs` (fail-fast load).

pub mod bundle;
pub mod catalog;
pub mod cookie;
pub mod error;
pub mod locale;
pub mod namespace;
pub mod records;
pub mod resolve;
pub mod source;

pub use bundle::{MessageBundle, interpolate};
pub use catalog::{LocaleMessages, MessageCatalog, load_messages};
pub use cookie::{LOCALE_COOKIE, LOCALE_COOKIE_MAX_AGE_SECS, cookie_value, locale_set_cookie};
pub use error::{I18nError, I18nResult};
pub use locale::{DEFAULT_LOCALE, Locale, TextDirection};
pub use namespace::Namespace;
pub use records::{
    ClientSlide, ClientsSection, HomeContent, ServiceSection, ServicesPage, Slide, SlideId,
    TeamMember, TeamSection,
};
pub use resolve::{LocaleSource, Resolution, coerce_locale, parse_accept_language, resolve_locale};
pub use source::{FsMessageSource, MemoryMessageSource, MessageSource};
