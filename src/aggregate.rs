use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// The run-wide flat key/default-value mapping.
///
/// Owned exclusively by the extraction pipeline: mutated only while files are
/// being processed, frozen once the tree builder and serializer take over.
#[derive(Debug, Default)]
pub struct FlatTranslations {
    entries: BTreeMap<String, String>,
}

impl FlatTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one file's extracted pairs.
    ///
    /// A new key is inserted with its value. An existing key keeps its value
    /// unless that value is empty and the new one is not: a discovered
    /// default (plural synthesis) wins over a previously recorded empty
    /// default, but two non-empty defaults never overwrite each other.
    pub fn merge(&mut self, pairs: impl IntoIterator<Item = (String, String)>) {
        for (key, value) in pairs {
            match self.entries.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                Entry::Occupied(mut slot) => {
                    if slot.get().is_empty() && !value.is_empty() {
                        slot.insert(value);
                    }
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
