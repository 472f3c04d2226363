use serde_json::{Map, Value};

use crate::aggregate::FlatTranslations;

/// Result of reshaping the flat mapping, plus any structural warnings.
#[derive(Debug)]
pub struct TreeOutcome {
    pub tree: Value,
    pub warnings: Vec<String>,
}

/// Build the output structure from the frozen flat mapping.
///
/// With `namespace` off the tree is the flat mapping itself. With it on,
/// every key is split on `.` and each segment becomes one nesting level.
/// When one key's path is a strict prefix of another's, the namespace wins:
/// the leaf value is discarded and surfaced as a warning.
pub fn build(flat: &FlatTranslations, namespace: bool) -> TreeOutcome {
    let mut warnings = Vec::new();
    let mut root = Map::new();

    if !namespace {
        for (key, value) in flat.iter() {
            root.insert(key.clone(), Value::String(value.clone()));
        }
        return TreeOutcome {
            tree: Value::Object(root),
            warnings,
        };
    }

    for (key, value) in flat.iter() {
        insert_nested(&mut root, key, value, &mut warnings);
    }

    TreeOutcome {
        tree: Value::Object(root),
        warnings,
    }
}

/// Insert one dotted key, creating intermediate objects as needed.
fn insert_nested(root: &mut Map<String, Value>, key: &str, value: &str, warnings: &mut Vec<String>) {
    let segments: Vec<&str> = key.split('.').collect();
    let mut current = root;

    for (depth, segment) in segments.iter().enumerate() {
        let last = depth == segments.len() - 1;

        if last {
            if let Some(Value::Object(_)) = current.get(*segment) {
                // A namespace already grew here; the leaf loses.
                warnings.push(format!(
                    "Namespace collision: dropping value for key '{}' because it is also used as a namespace",
                    key
                ));
                return;
            }
            current.insert(segment.to_string(), Value::String(value.to_string()));
            return;
        }

        let slot = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            let prefix = segments[..=depth].join(".");
            warnings.push(format!(
                "Namespace collision: dropping value for key '{}' because it is also used as a namespace",
                prefix
            ));
            *slot = Value::Object(Map::new());
        }
        // The slot is always an object at this point.
        current = slot.as_object_mut().unwrap();
    }
}

/// Replace every empty leaf value with its fully-qualified dotted path, so a
/// translator sees `"NS1.NS2.VAL1"` instead of `""` for an untranslated key.
/// Applied after the tree is fully built; leaf values only.
pub fn fill_empty_leaves(tree: &mut Value) {
    fill_at(tree, "");
}

fn fill_at(node: &mut Value, path: &str) {
    let Value::Object(map) = node else { return };

    for (key, child) in map.iter_mut() {
        let child_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", path, key)
        };
        match child {
            Value::Object(_) => fill_at(child, &child_path),
            Value::String(s) if s.is_empty() => *s = child_path,
            _ => {}
        }
    }
}
