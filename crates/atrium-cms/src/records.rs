//! Records returned by the CMS and their site-facing form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// Labelled external profile link of a team member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Network name as stored in the CMS (`linkedin`, `x`, ...).
    pub label: String,
    /// Absolute profile URL.
    pub href: String,
}

/// Team member search hit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CmsTeamMember {
    /// CMS identifier.
    pub id: Option<u64>,
    /// Display name.
    pub name: String,
    /// Job title.
    pub position: Option<String>,
    /// Absolute portrait URL.
    pub image_url: Option<String>,
    /// Profile links, ordered by label.
    pub social_links: Vec<SocialLink>,
}

/// Client search hit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CmsClientRecord {
    /// CMS identifier.
    pub id: Option<u64>,
    /// Contact name.
    pub name: String,
    /// Company name.
    pub company: Option<String>,
    /// Testimonial text.
    pub message: Option<String>,
    /// Absolute logo or portrait URL.
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default = "Vec::new")]
    pub(crate) data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMedia {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTeamMember {
    #[serde(default)]
    id: Option<u64>,
    name: String,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    image: Option<RawMedia>,
    #[serde(default)]
    social_links: Option<BTreeMap<String, Value>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawClient {
    #[serde(default)]
    id: Option<u64>,
    name: String,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    image: Option<RawMedia>,
}

impl RawTeamMember {
    pub(crate) fn into_record(self, base: &Url) -> CmsTeamMember {
        let social_links = self
            .social_links
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(label, href)| match href {
                Value::String(href) if !href.trim().is_empty() => Some(SocialLink { label, href }),
                _ => None,
            })
            .collect();
        CmsTeamMember {
            id: self.id,
            name: self.name,
            position: self.position,
            image_url: media_url(base, self.image),
            social_links,
        }
    }
}

impl RawClient {
    pub(crate) fn into_record(self, base: &Url) -> CmsClientRecord {
        CmsClientRecord {
            id: self.id,
            name: self.name,
            company: self.company,
            message: self.message,
            image_url: media_url(base, self.image),
        }
    }
}

fn media_url(base: &Url, media: Option<RawMedia>) -> Option<String> {
    media
        .and_then(|media| media.url)
        .and_then(|url| resolve_media_url(base, &url))
}

/// Make a CMS media path absolute. Upload paths are relative to the CMS origin.
#[must_use]
pub fn resolve_media_url(base: &Url, raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(absolute) = Url::parse(raw) {
        return Some(absolute.into());
    }
    base.join(raw).ok().map(Into::into)
}
