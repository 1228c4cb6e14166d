// Translation module - turns phrases into emoji using the dictionary store
// Owns the store; callers serialize mutations and reads

pub mod lookup;
pub mod normalizer;
pub mod random;

use crate::config::{Delimiter, EmojiConfig};
use crate::dictionary::{DictionaryStore, MergeSummary};
use normalizer::{split_token, Normalizer};
use random::{RandomSource, SeededRandom, ThreadRandom};

/// Error types for translation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranslateError {
    /// Fallback sampling needs at least one dictionary entry
    #[error("No translations available: the dictionary is empty")]
    EmptyDictionary,
}

/// Result of translating a phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Translated phrase, untranslated tokens left as they were
    pub text: String,
    /// Number of tokens replaced by a glyph
    pub substituted: usize,
}

/// Translator facade: normalizer and lookup over an owned dictionary store
pub struct Translator {
    store: DictionaryStore,
    normalizer: Normalizer,
    delimiter: Delimiter,
    random: Box<dyn RandomSource>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// Create a translator with an empty store and default settings
    pub fn new() -> Self {
        Self {
            store: DictionaryStore::new(),
            normalizer: Normalizer::default(),
            delimiter: Delimiter::default(),
            random: Box::new(ThreadRandom),
        }
    }

    /// Create a translator from plugin configuration
    pub fn from_config(config: &EmojiConfig) -> Self {
        let random: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom),
        };
        Self {
            store: DictionaryStore::new(),
            normalizer: Normalizer::new(config.stopwords.iter().cloned()),
            delimiter: config.delimiter,
            random,
        }
    }

    /// Replace the random source
    pub fn with_random(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    /// Replace the dictionary store, e.g. with a snapshot the caller kept
    pub fn with_store(mut self, store: DictionaryStore) -> Self {
        self.store = store;
        self
    }

    /// Replace the delimiter policy
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read access to the store, e.g. for taking a snapshot
    pub fn store(&self) -> &DictionaryStore {
        &self.store
    }

    /// Merge a flattened (keyword, glyph) dataset
    pub fn merge<I, K, G>(&mut self, dataset: I) -> MergeSummary
    where
        I: IntoIterator<Item = (K, G)>,
        K: AsRef<str>,
        G: AsRef<str>,
    {
        self.store.merge(dataset)
    }

    /// Map keywords to a user-chosen glyph, protected from later merges
    pub fn add_custom<I, K>(&mut self, glyph: &str, keywords: I) -> usize
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.store.add_custom(glyph, keywords)
    }

    /// Delete keywords from the store
    pub fn remove_keywords<I, K>(&mut self, keywords: I) -> usize
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.store.remove_keywords(keywords)
    }

    /// Drop merged entries so the next merge is an exact refresh
    pub fn clear_non_custom(&mut self) -> usize {
        let dropped = self.store.retain_custom();
        crate::debug!("Cleared {} non-custom entries", dropped);
        dropped
    }

    /// Translate one token, keeping its surrounding punctuation
    fn translate_token(&mut self, token: &str) -> Option<String> {
        let split = split_token(token);
        let candidates = self.normalizer.candidates(split.core)?;
        let glyph = lookup::resolve(&self.store, &candidates, self.random.as_mut())?;
        Some(split.wrap(glyph))
    }

    /// Translate a phrase and report how many tokens were replaced
    pub fn translate(&mut self, phrase: &str) -> Translation {
        let mut substituted = 0;
        let tokens: Vec<String> = self
            .delimiter
            .split(phrase)
            .into_iter()
            .map(|token| match self.translate_token(token) {
                Some(translated) => {
                    substituted += 1;
                    translated
                }
                None => token.to_string(),
            })
            .collect();

        Translation {
            text: tokens.join(" ").trim_end().to_string(),
            substituted,
        }
    }

    /// Translate a phrase; untranslatable tokens are returned unchanged
    pub fn translate_phrase(&mut self, phrase: &str) -> String {
        self.translate(phrase).text
    }

    /// Translate a phrase, or describe a random dictionary entry when nothing
    /// in it could be translated
    pub fn translate_phrase_or_sample(&mut self, phrase: &str) -> Result<String, TranslateError> {
        let translation = self.translate(phrase);
        if translation.substituted > 0 && !translation.text.is_empty() {
            return Ok(translation.text);
        }

        let (keyword, glyph) = self.sample()?;
        crate::debug!("Nothing to translate in '{}', sampled '{}'", phrase, keyword);
        Ok(format!("Nothing to translate, so here is a {} {}", keyword, glyph))
    }

    /// Pick a uniformly random keyword and one of its glyphs
    pub fn sample(&mut self) -> Result<(String, String), TranslateError> {
        if self.store.is_empty() {
            return Err(TranslateError::EmptyDictionary);
        }

        let index = self.random.index(self.store.len());
        let (keyword, entry) = self
            .store
            .nth(index)
            .ok_or(TranslateError::EmptyDictionary)?;
        let glyph = lookup::choose_glyph(entry, self.random.as_mut())
            .ok_or(TranslateError::EmptyDictionary)?;

        Ok((keyword.clone(), glyph.to_string()))
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
