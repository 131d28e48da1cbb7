#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, unreachable_pub)]
#![allow(clippy::module_name_repetitions)]

//! Shared HTTP DTOs for the Atrium public API.
//!
//! The server encodes these and the Yew front-end decodes them, so both sides agree
//! on one contract. Page records (`Slide`, `TeamSection`, ...) come straight from
//! the message bundles in `atrium-i18n`.

use atrium_i18n::{
    ClientsSection, Locale, LocaleSource, ServicesPage, Slide, TeamSection, TextDirection,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// RFC9457-compatible problem document surfaced on validation/runtime errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Parameters that failed validation, if applicable.
    pub invalid_params: Option<Vec<ProblemInvalidParam>>,
}

/// Invalid parameter pointer surfaced alongside a [`ProblemDetails`] payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemInvalidParam {
    /// JSON Pointer to the offending field.
    pub pointer: String,
    /// Human-readable description of the validation failure.
    pub message: String,
}

/// Liveness probe payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: String,
    /// Build SHA of the running binary.
    pub build: String,
}

/// A locale offered by the switcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleOption {
    /// Locale code.
    pub code: Locale,
    /// Name of the locale in its own script.
    pub label: String,
    /// Layout direction.
    pub dir: TextDirection,
}

impl From<Locale> for LocaleOption {
    fn from(locale: Locale) -> Self {
        Self {
            code: locale,
            label: locale.label().to_string(),
            dir: locale.direction(),
        }
    }
}

/// Locale negotiated for the current request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleResponse {
    /// Active locale.
    pub locale: Locale,
    /// Value for the document `dir` attribute.
    pub dir: TextDirection,
    /// Value for the document `lang` attribute.
    pub lang: String,
    /// Input that decided the locale.
    pub source: LocaleSource,
    /// Every locale the site ships.
    pub supported: Vec<LocaleOption>,
}

/// Locale switch request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleUpdateRequest {
    /// Requested locale code; unsupported codes fall back to the default locale.
    pub locale: String,
    /// Page to re-render after switching; defaults to `/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Locale switch outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleUpdateResponse {
    /// Locale now stored in the preference cookie.
    pub locale: Locale,
    /// Layout direction of that locale.
    pub dir: TextDirection,
    /// Path the client should reload to pick up the new locale.
    pub revalidate: String,
}

/// Raw message namespaces for the active locale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessagesResponse {
    /// Active locale.
    pub locale: Locale,
    /// Layout direction.
    pub dir: TextDirection,
    /// Namespace name to message tree.
    pub messages: Value,
}

/// Hero carousel payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeroView {
    /// Auto-advance period in milliseconds.
    pub interval_ms: u64,
    /// Slides in display order.
    pub slides: Vec<Slide>,
}

/// Landing page view model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HomeResponse {
    /// Active locale.
    pub locale: Locale,
    /// Layout direction.
    pub dir: TextDirection,
    /// Hero banner.
    pub hero: HeroView,
    /// Team carousel.
    pub team: TeamSection,
    /// Client testimonials carousel.
    pub clients: ClientsSection,
}

/// Services page view model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServicesResponse {
    /// Active locale.
    pub locale: Locale,
    /// Layout direction.
    pub dir: TextDirection,
    /// Page content.
    pub page: ServicesPage,
}

/// Query string of the search page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text name filter.
    #[serde(default)]
    pub q: Option<String>,
}

/// Static labels of the search page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchLabels {
    /// Back-link label.
    pub back: String,
    /// Input placeholder.
    pub placeholder: String,
    /// Submit button label.
    pub submit: String,
    /// Heading of the team members list.
    pub team_members: String,
    /// Heading of the clients list.
    pub clients: String,
    /// Shown when a query matched nothing.
    pub no_results: String,
    /// Closing note.
    pub footer_note: String,
}

/// External profile link of a team member hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLinkView {
    /// Network name.
    pub label: String,
    /// Absolute URL.
    pub href: String,
}

/// Team member search hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamMemberHit {
    /// Display name.
    pub name: String,
    /// Job title.
    pub position: Option<String>,
    /// Absolute photo URL.
    pub image_url: Option<String>,
    /// Profile links.
    pub social_links: Vec<SocialLinkView>,
}

/// Client search hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientHit {
    /// Contact name.
    pub name: String,
    /// Company name.
    pub company: Option<String>,
    /// Testimonial text.
    pub message: Option<String>,
    /// Absolute photo URL.
    pub image_url: Option<String>,
}

/// Search page view model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    /// Active locale.
    pub locale: Locale,
    /// Layout direction.
    pub dir: TextDirection,
    /// Trimmed query; empty when none was given.
    pub query: String,
    /// Results heading; an ellipsis stands in for a missing query.
    pub heading: String,
    /// Static labels.
    pub labels: SearchLabels,
    /// Matching team members.
    pub team_members: Vec<TeamMemberHit>,
    /// Matching clients.
    pub clients: Vec<ClientHit>,
}

impl SearchResponse {
    /// Whether a query was run and matched nothing.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        !self.query.is_empty() && self.team_members.is_empty() && self.clients.is_empty()
    }
}

/// Newsletter strings of the footer (display only).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsletterLabels {
    /// Input placeholder.
    pub placeholder: String,
    /// Button label.
    pub subscribe: String,
}

/// Footer view model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FooterResponse {
    /// Active locale.
    pub locale: Locale,
    /// Layout direction.
    pub dir: TextDirection,
    /// Contacts column heading.
    pub contacts: String,
    /// Quick links.
    pub links: Vec<String>,
    /// Rights notice.
    pub rights: String,
    /// Copyright year.
    pub year: i32,
    /// Newsletter strings.
    pub newsletter: NewsletterLabels,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_details_omit_empty_fields() -> Result<(), serde_json::Error> {
        let problem = ProblemDetails {
            kind: "https://atrium.dev/problems/not-found".to_string(),
            title: "resource not found".to_string(),
            status: 404,
            detail: None,
            invalid_params: None,
        };
        let value = serde_json::to_value(&problem)?;
        assert_eq!(value["type"], "https://atrium.dev/problems/not-found");
        assert!(value.get("detail").is_none());
        assert!(value.get("invalid_params").is_none());
        Ok(())
    }

    #[test]
    fn locale_option_carries_label_and_direction() {
        let option = LocaleOption::from(Locale::Ar);
        assert_eq!(option.dir, TextDirection::Rtl);
        assert_eq!(option.label, Locale::Ar.label());
    }

    #[test]
    fn update_request_path_is_optional() -> Result<(), serde_json::Error> {
        let request: LocaleUpdateRequest = serde_json::from_str(r#"{"locale":"ar"}"#)?;
        assert_eq!(request.locale, "ar");
        assert!(request.path.is_none());
        Ok(())
    }

    #[test]
    fn empty_result_needs_a_query() {
        let mut response = SearchResponse {
            locale: Locale::En,
            dir: TextDirection::Ltr,
            query: String::new(),
            heading: String::new(),
            labels: SearchLabels {
                back: String::new(),
                placeholder: String::new(),
                submit: String::new(),
                team_members: String::new(),
                clients: String::new(),
                no_results: String::new(),
                footer_note: String::new(),
            },
            team_members: Vec::new(),
            clients: Vec::new(),
        };
        assert!(!response.is_empty_result());
        response.query = "zed".to_string();
        assert!(response.is_empty_result());
    }
}
