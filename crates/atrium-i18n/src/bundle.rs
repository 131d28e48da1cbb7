//! Per-locale message bundle with dotted-path lookups.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::locale::{Locale, TextDirection};
use crate::namespace::Namespace;

/// Every namespace of one locale, parsed and immutable.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MessageBundle {
    locale: Locale,
    namespaces: BTreeMap<Namespace, Value>,
}

impl MessageBundle {
    pub(crate) const fn new(locale: Locale, namespaces: BTreeMap<Namespace, Value>) -> Self {
        Self { locale, namespaces }
    }

    /// Locale backing this bundle.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Layout direction for the bundle's locale.
    #[must_use]
    pub const fn direction(&self) -> TextDirection {
        self.locale.direction()
    }

    /// Raw tree of one namespace.
    #[must_use]
    pub fn namespace(&self, namespace: Namespace) -> Option<&Value> {
        self.namespaces.get(&namespace)
    }

    /// All namespaces keyed by name, the shape handed to the front-end.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.namespaces
                .iter()
                .map(|(namespace, tree)| (namespace.name().to_string(), tree.clone()))
                .collect(),
        )
    }

    /// Structured value at a dotted path.
    #[must_use]
    pub fn raw(&self, namespace: Namespace, path: &str) -> Option<&Value> {
        let mut node = self.namespaces.get(&namespace)?;
        for segment in path.split('.') {
            node = node.get(segment)?;
        }
        Some(node)
    }

    /// String at a dotted path.
    ///
    /// A missing key renders as `namespace.path` so gaps stay visible on the page.
    #[must_use]
    pub fn text(&self, namespace: Namespace, path: &str) -> String {
        match self.raw(namespace, path).and_then(Value::as_str) {
            Some(text) => text.to_string(),
            None => {
                debug!(
                    locale = self.locale.code(),
                    namespace = namespace.name(),
                    key = path,
                    "message key missing"
                );
                format!("{}.{path}", namespace.name())
            }
        }
    }

    /// String at a dotted path with `{name}` placeholders substituted.
    #[must_use]
    pub fn text_with(&self, namespace: Namespace, path: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.text(namespace, path), args)
    }

    /// List of strings at a dotted path; non-string entries are skipped.
    #[must_use]
    pub fn strings(&self, namespace: Namespace, path: &str) -> Vec<String> {
        self.raw(namespace, path)
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
}

/// Replace `{name}` placeholders with the matching argument; unknown placeholders stay as-is.
#[must_use]
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        let name = &tail[1..close];
        match args.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }
    out.push_str(rest);
    out
}
