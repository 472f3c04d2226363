use std::cmp::Ordering;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::config::{KeyOrderName, StringifyOptions};

/// Key ordering applied at every nesting level of the catalog.
#[derive(Debug, Clone, Copy)]
pub enum KeyOrder {
    /// Case-insensitive lexicographic, ties broken case-sensitively.
    CaseInsensitive,
    CaseSensitive,
    /// Keep map insertion order.
    Insertion,
    /// Caller-supplied comparator, for library use.
    Custom(fn(&str, &str) -> Ordering),
}

#[derive(Debug, Clone)]
pub struct SerializeOptions {
    pub indent: String,
    pub order: KeyOrder,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            order: KeyOrder::CaseInsensitive,
        }
    }
}

impl SerializeOptions {
    /// Resolve the configured overrides against the defaults.
    pub fn from_config(options: Option<&StringifyOptions>) -> Self {
        let mut resolved = Self::default();
        if let Some(options) = options {
            if let Some(width) = options.indent {
                resolved.indent = " ".repeat(width);
            }
            resolved.order = match options.key_order {
                Some(KeyOrderName::CaseSensitive) => KeyOrder::CaseSensitive,
                Some(KeyOrderName::Insertion) => KeyOrder::Insertion,
                Some(KeyOrderName::CaseInsensitive) | None => KeyOrder::CaseInsensitive,
            };
        }
        resolved
    }
}

/// Serialize the catalog tree to pretty JSON.
///
/// Output is deterministic: keys are ordered at every nesting level, so
/// re-running extraction over unchanged input yields byte-identical text
/// regardless of the order keys were discovered in.
pub fn serialize(tree: &Value, options: &SerializeOptions) -> Result<String> {
    let ordered = reorder(tree, options.order);

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(options.indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    ordered
        .serialize(&mut serializer)
        .context("Failed to serialize catalog")?;
    String::from_utf8(buf).context("Serialized catalog is not valid UTF-8")
}

fn reorder(node: &Value, order: KeyOrder) -> Value {
    match node {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            match order {
                KeyOrder::CaseInsensitive => {
                    entries.sort_by(|(a, _), (b, _)| compare_case_insensitive(a.as_str(), b.as_str()));
                }
                KeyOrder::CaseSensitive => entries.sort_by(|(a, _), (b, _)| a.cmp(b)),
                KeyOrder::Insertion => {}
                KeyOrder::Custom(cmp) => {
                    entries.sort_by(|(a, _), (b, _)| cmp(a.as_str(), b.as_str()));
                }
            }
            let mut ordered = Map::new();
            for (key, value) in entries {
                ordered.insert(key.clone(), reorder(value, order));
            }
            Value::Object(ordered)
        }
        other => other.clone(),
    }
}

fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
