// Dictionary store - keyword to emoji glyph mappings held in memory
// Custom entries are protected from bulk merges; see merge.rs

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A dictionary entry: every glyph a keyword can translate to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    /// Candidate glyphs, never empty while the entry is stored
    pub glyphs: Vec<String>,
    /// Whether the entry was added by a user and must survive bulk merges
    #[serde(default)]
    pub custom: bool,
}

impl DictionaryEntry {
    /// Entry created by a bulk merge
    pub fn merged(glyph: impl Into<String>) -> Self {
        Self {
            glyphs: vec![glyph.into()],
            custom: false,
        }
    }

    /// Entry created by an administrative add
    pub fn custom(glyph: impl Into<String>) -> Self {
        Self {
            glyphs: vec![glyph.into()],
            custom: true,
        }
    }
}

/// Normalize a keyword into its store key: trimmed and lowercase
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

/// In-memory store for dictionary entries
///
/// Keys iterate in sorted order; `nth` and snapshots depend on it.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct DictionaryStore {
    /// Entries indexed by normalized keyword
    entries: BTreeMap<String, DictionaryEntry>,
}

impl DictionaryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a snapshot previously taken by the caller
    ///
    /// Keys are normalized and entries without glyphs are dropped.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, DictionaryEntry)>,
    {
        let mut store = Self::new();
        for (keyword, entry) in entries {
            store.insert(&keyword, entry);
        }
        store
    }

    /// Number of keywords in the store
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no keywords
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry for an already-normalized keyword
    pub fn get(&self, keyword: &str) -> Option<&DictionaryEntry> {
        self.entries.get(keyword)
    }

    /// Get the stored keyword and entry for an already-normalized keyword
    pub fn get_key_value(&self, keyword: &str) -> Option<(&String, &DictionaryEntry)> {
        self.entries.get_key_value(keyword)
    }

    /// Whether an already-normalized keyword is present
    pub fn contains(&self, keyword: &str) -> bool {
        self.entries.contains_key(keyword)
    }

    /// Entry at a position in key order, used for uniform sampling
    pub fn nth(&self, index: usize) -> Option<(&String, &DictionaryEntry)> {
        self.entries.iter().nth(index)
    }

    /// Insert or replace an entry
    ///
    /// Returns false (and stores nothing) when the keyword normalizes to an
    /// empty string or the entry carries no non-empty glyphs.
    pub fn insert(&mut self, keyword: &str, mut entry: DictionaryEntry) -> bool {
        let key = normalize_keyword(keyword);
        entry.glyphs.retain(|glyph| !glyph.trim().is_empty());
        if key.is_empty() || entry.glyphs.is_empty() {
            return false;
        }
        self.entries.insert(key, entry);
        true
    }

    /// Mutable access for the merge engine
    pub(crate) fn get_mut(&mut self, keyword: &str) -> Option<&mut DictionaryEntry> {
        self.entries.get_mut(keyword)
    }

    /// Delete a keyword entirely
    pub fn remove(&mut self, keyword: &str) -> Option<DictionaryEntry> {
        self.entries.remove(&normalize_keyword(keyword))
    }

    /// Drop every entry that is not custom
    pub fn retain_custom(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.custom);
        before - self.entries.len()
    }
}

// Snapshots are restored through `insert` so stale keys and empty entries
// never reach the map
impl<'de> Deserialize<'de> for DictionaryStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = BTreeMap::<String, DictionaryEntry>::deserialize(deserializer)?;
        Ok(Self::from_entries(entries))
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
