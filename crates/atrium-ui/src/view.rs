//! Pure presentation helpers shared by the components.

use atrium_carousel::{CarouselController, Side};
use atrium_i18n::{Locale, Namespace};
use serde_json::Value;

/// `transform` value sliding the carousel track to the current index.
#[must_use]
pub fn track_transform(carousel: &CarouselController) -> String {
    format!("transform: translateX({}%);", format_percent(carousel.translate_percent()))
}

/// `flex` value sizing one card to the current items-per-view.
#[must_use]
pub fn item_basis(carousel: &CarouselController) -> String {
    format!("flex: 0 0 {}%;", format_percent(carousel.item_basis_percent()))
}

fn format_percent(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    let text = format!("{rounded:.4}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Utility classes for a side navigation button.
#[must_use]
pub fn nav_button_class(side: Side, enabled: bool) -> String {
    let edge = match side {
        Side::Left => "left-0",
        Side::Right => "right-0",
    };
    let state = if enabled {
        ""
    } else {
        " opacity-40 pointer-events-none"
    };
    format!(
        "absolute {edge} top-1/2 -translate-y-1/2 z-10 rounded-full p-2 bg-white/80 ring-1 ring-black/10 hidden sm:inline-flex{state}"
    )
}

/// Utility classes for a hero pagination dot.
#[must_use]
pub const fn dot_class(active: bool) -> &'static str {
    if active {
        "h-2.5 w-2.5 rounded-full ring-1 ring-white/60 bg-white"
    } else {
        "h-2.5 w-2.5 rounded-full ring-1 ring-white/60 bg-white/30 hover:bg-white/60"
    }
}

/// Accessible label of the dot for slide `index`.
#[must_use]
pub fn dot_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}

/// Search page URL for a free-text query.
#[must_use]
pub fn search_href(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return "/search".to_string();
    }
    format!("/search?q={}", urlencoding::encode(query))
}

/// Compact label shown on the locale toggle.
#[must_use]
pub fn locale_badge(locale: Locale) -> String {
    locale.code().to_ascii_uppercase()
}

/// String at a dotted path of a `/v1/messages` payload; gaps render as `namespace.key`.
#[must_use]
pub fn message_text(messages: &Value, namespace: Namespace, path: &str) -> String {
    lookup(messages, namespace, path)
        .and_then(Value::as_str)
        .map_or_else(|| format!("{}.{path}", namespace.name()), ToString::to_string)
}

/// String list at a dotted path of a `/v1/messages` payload.
#[must_use]
pub fn message_list(messages: &Value, namespace: Namespace, path: &str) -> Vec<String> {
    lookup(messages, namespace, path)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn lookup<'a>(messages: &'a Value, namespace: Namespace, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(messages.get(namespace.name())?, |node, segment| node.get(segment))
}

/// Copyright line of the footer.
#[must_use]
pub fn copyright(year: i32, rights: &str) -> String {
    format!("© {year} {rights}")
}
