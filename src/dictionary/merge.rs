// Merge engine - bulk dataset ingestion and administrative edits
// Bulk merges append to merged entries and never touch custom ones

use serde::Serialize;

use super::store::{normalize_keyword, DictionaryEntry, DictionaryStore};

/// Counts describing what a bulk merge did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSummary {
    /// New keywords created
    pub inserted: usize,
    /// Glyphs appended to existing merged keywords
    pub appended: usize,
    /// Pairs ignored because the keyword is custom
    pub protected: usize,
    /// Pairs ignored because the keyword or glyph was empty
    pub skipped: usize,
}

impl DictionaryStore {
    /// Merge (keyword, glyph) pairs into the store
    ///
    /// Repeated merges of the same dataset keep appending glyphs to merged
    /// entries. Callers wanting an exact refresh call `retain_custom` first.
    pub fn merge<I, K, G>(&mut self, dataset: I) -> MergeSummary
    where
        I: IntoIterator<Item = (K, G)>,
        K: AsRef<str>,
        G: AsRef<str>,
    {
        let mut summary = MergeSummary::default();

        for (keyword, glyph) in dataset {
            let key = normalize_keyword(keyword.as_ref());
            let glyph = glyph.as_ref();
            if key.is_empty() || glyph.trim().is_empty() {
                summary.skipped += 1;
                continue;
            }

            match self.get_mut(&key) {
                Some(entry) if entry.custom => summary.protected += 1,
                Some(entry) => {
                    entry.glyphs.push(glyph.to_string());
                    summary.appended += 1;
                }
                None => {
                    self.insert(&key, DictionaryEntry::merged(glyph));
                    summary.inserted += 1;
                }
            }
        }

        crate::debug!(
            "Merged dataset: {} inserted, {} appended, {} protected, {} skipped",
            summary.inserted,
            summary.appended,
            summary.protected,
            summary.skipped
        );
        summary
    }

    /// Map every keyword to a single custom glyph, overwriting prior entries
    ///
    /// Returns the number of keywords written. An empty glyph writes nothing.
    pub fn add_custom<I, K>(&mut self, glyph: &str, keywords: I) -> usize
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        if glyph.trim().is_empty() {
            return 0;
        }

        let mut written = 0;
        for keyword in keywords {
            if self.insert(keyword.as_ref(), DictionaryEntry::custom(glyph)) {
                written += 1;
            }
        }

        crate::info!("Added custom glyph {} for {} keyword(s)", glyph, written);
        written
    }

    /// Delete every listed keyword; missing keywords are ignored
    ///
    /// Returns the number of keywords that were actually present.
    pub fn remove_keywords<I, K>(&mut self, keywords: I) -> usize
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let removed = keywords
            .into_iter()
            .filter(|keyword| self.remove(keyword.as_ref()).is_some())
            .count();

        crate::info!("Removed {} keyword(s) from dictionary", removed);
        removed
    }
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod tests;
