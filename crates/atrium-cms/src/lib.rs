#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, unreachable_pub)]
#![allow(clippy::module_name_repetitions)]

//! Read-only client for the headless CMS backing site search.
//!
//! Every public lookup degrades to an empty list on failure: search results are
//! decoration, never a reason to fail a page.

pub mod client;
pub mod collection;
pub mod error;
pub mod records;
pub mod source;

pub use client::CmsClient;
pub use collection::Collection;
pub use error::{CmsError, CmsResult};
pub use records::{CmsClientRecord, CmsTeamMember, SocialLink, resolve_media_url};
pub use source::{ContentSource, StaticContentSource};
