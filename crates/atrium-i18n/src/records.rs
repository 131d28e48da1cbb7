//! Typed records embedded in message bundles.
//!
//! # Design
//! - Bundles carry lists of slides, team members and testimonials as raw JSON.
//! - Each list is decoded once at load time; a malformed entry fails the whole bundle.
//! - Use sites only ever see validated records.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::MessageBundle;
use crate::error::{I18nError, I18nResult};
use crate::namespace::Namespace;

/// Identifier of a hero slide; bundles use either numbers or strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlideId {
    /// Numeric identifier.
    Number(i64),
    /// Textual identifier.
    Text(String),
}

/// Hero banner slide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Stable slide identifier.
    pub id: SlideId,
    /// Portrait shown beside the slide text.
    pub portrait_url: String,
    /// Headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Supporting paragraph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Call-to-action label; rendered only alongside `cta_href`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
    /// Call-to-action target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_href: Option<String>,
}

impl Slide {
    /// Label and target of the call to action, when both are present.
    #[must_use]
    pub fn call_to_action(&self) -> Option<(&str, &str)> {
        match (self.cta_label.as_deref(), self.cta_href.as_deref()) {
            (Some(label), Some(href)) if !label.is_empty() && !href.is_empty() => {
                Some((label, href))
            }
            _ => None,
        }
    }
}

/// Team member card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Display name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Photo URL.
    pub photo: String,
    /// `tel:` link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// WhatsApp link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    /// `mailto:` link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Client testimonial slide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSlide {
    /// Client photo URL.
    pub photo: String,
    /// Testimonial text.
    pub quote: String,
    /// Client name.
    pub name: String,
    /// Client role or company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Shape checks beyond what serde enforces.
trait Validate {
    fn validate(&self) -> Result<(), String>;
}

fn require(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("field `{field}` must not be empty"));
    }
    Ok(())
}

impl Validate for Slide {
    fn validate(&self) -> Result<(), String> {
        if let SlideId::Text(id) = &self.id {
            require("id", id)?;
        }
        require("portraitUrl", &self.portrait_url)
    }
}

impl Validate for TeamMember {
    fn validate(&self) -> Result<(), String> {
        require("name", &self.name)?;
        require("position", &self.position)?;
        require("photo", &self.photo)
    }
}

impl Validate for ClientSlide {
    fn validate(&self) -> Result<(), String> {
        require("photo", &self.photo)?;
        require("quote", &self.quote)?;
        require("name", &self.name)
    }
}

/// Team section of the landing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSection {
    /// Section heading.
    pub title: String,
    /// Section intro.
    pub description: String,
    /// Cards, in display order.
    pub members: Vec<TeamMember>,
}

/// Clients section of the landing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientsSection {
    /// Section heading.
    pub title: String,
    /// Section intro.
    pub subtitle: String,
    /// Testimonials, in display order.
    pub slides: Vec<ClientSlide>,
}

/// Landing page content decoded from the `home` namespace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeContent {
    /// Hero carousel slides.
    pub slides: Vec<Slide>,
    /// Team carousel.
    pub team: TeamSection,
    /// Client testimonials carousel.
    pub clients: ClientsSection,
}

/// One block of the services page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSection {
    /// Block heading.
    pub title: String,
    /// Optional lead paragraph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    /// Bullet points.
    pub bullets: Vec<String>,
}

/// Services page content decoded from the `services` namespace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesPage {
    /// Banner image.
    pub hero_image: String,
    /// Back-link label.
    pub back: String,
    /// Page heading.
    pub title: String,
    /// Lead paragraph.
    pub intro: String,
    /// General, corporate and individual blocks, in that order.
    pub sections: Vec<ServiceSection>,
    /// Closing note.
    pub footer_note: String,
}

const HOME_SLIDES: &str = "slides";
const HOME_TEAM_MEMBERS: &str = "team.members";
const HOME_CLIENT_SLIDES: &str = "clients.slides";
const SERVICE_SECTIONS: [&str; 3] = ["general", "corporate", "individual"];

/// Decode the landing page from a loaded bundle.
///
/// # Errors
///
/// Returns [`I18nError::MalformedRecord`] when any slide, member or testimonial is missing,
/// mistyped or has empty required fields.
pub fn decode_home(bundle: &MessageBundle) -> I18nResult<HomeContent> {
    Ok(HomeContent {
        slides: decode_list(bundle, Namespace::Home, HOME_SLIDES)?,
        team: TeamSection {
            title: bundle.text(Namespace::Home, "team.title"),
            description: bundle.text(Namespace::Home, "team.description"),
            members: decode_list(bundle, Namespace::Home, HOME_TEAM_MEMBERS)?,
        },
        clients: ClientsSection {
            title: bundle.text(Namespace::Home, "clients.title"),
            subtitle: bundle.text(Namespace::Home, "clients.subtitle"),
            slides: decode_list(bundle, Namespace::Home, HOME_CLIENT_SLIDES)?,
        },
    })
}

/// Decode the services page from a loaded bundle.
///
/// # Errors
///
/// Returns [`I18nError::MalformedRecord`] when a section's bullet list is not a list of
/// strings.
pub fn decode_services(bundle: &MessageBundle) -> I18nResult<ServicesPage> {
    let mut sections = Vec::with_capacity(SERVICE_SECTIONS.len());
    for name in SERVICE_SECTIONS {
        let base = format!("sections.{name}");
        let bullets = match bundle.raw(Namespace::Services, &format!("{base}.bullets")) {
            None => Vec::new(),
            Some(value) => serde_json::from_value::<Vec<String>>(value.clone()).map_err(|err| {
                I18nError::MalformedRecord {
                    locale: bundle.locale(),
                    namespace: Namespace::Services,
                    key: "sections.*.bullets",
                    reason: format!("{name}: {err}"),
                }
            })?,
        };
        sections.push(ServiceSection {
            title: bundle.text(Namespace::Services, &format!("{base}.title")),
            intro: bundle
                .raw(Namespace::Services, &format!("{base}.intro"))
                .and_then(Value::as_str)
                .map(ToString::to_string),
            bullets,
        });
    }
    Ok(ServicesPage {
        hero_image: bundle.text(Namespace::Services, "heroImage"),
        back: bundle.text(Namespace::Services, "back"),
        title: bundle.text(Namespace::Services, "title"),
        intro: bundle.text(Namespace::Services, "intro"),
        sections,
        footer_note: bundle.text(Namespace::Services, "footerNote"),
    })
}

fn decode_list<T>(bundle: &MessageBundle, namespace: Namespace, key: &'static str) -> I18nResult<Vec<T>>
where
    T: DeserializeOwned + Validate,
{
    let malformed = |reason: String| I18nError::MalformedRecord {
        locale: bundle.locale(),
        namespace,
        key,
        reason,
    };
    let Some(value) = bundle.raw(namespace, key) else {
        return Err(malformed("list missing".to_string()));
    };
    let Some(items) = value.as_array() else {
        return Err(malformed("expected a list".to_string()));
    };
    items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            let record = T::deserialize(item)
                .map_err(|err| malformed(format!("entry {position}: {err}")))?;
            record
                .validate()
                .map_err(|reason| malformed(format!("entry {position}: {reason}")))?;
            Ok(record)
        })
        .collect()
}
