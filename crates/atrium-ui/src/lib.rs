#![forbid(unsafe_code)]
#![deny(unused_must_use, rustdoc::broken_intra_doc_links, rustdoc::bare_urls, missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, unreachable_pub)]
#![allow(clippy::module_name_repetitions)]
//! Atrium web front-end.
//!
//! Carousel reducers and presentation helpers compile everywhere so they can be tested
//! natively; components, routing and the HTTP client only build for wasm32.

pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

/// Element id the app mounts into when present.
pub const ROOT_ELEMENT_ID: &str = "root";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_element_id_matches_index_html() {
        let index = include_str!("../index.html");
        assert!(index.contains(&format!("id=\"{ROOT_ELEMENT_ID}\"")));
    }
}
