// Lookup engine - resolves normalized words against the dictionary store

use super::normalizer::Candidates;
use super::random::RandomSource;
use crate::dictionary::{DictionaryEntry, DictionaryStore};

/// Find the first entry matching the candidates: exact, singular, then plural
pub fn find_entry<'a>(
    store: &'a DictionaryStore,
    candidates: &Candidates,
) -> Option<(&'a str, &'a DictionaryEntry)> {
    candidates.keys().find_map(|key| {
        store
            .get_key_value(key)
            .map(|(keyword, entry)| (keyword.as_str(), entry))
    })
}

/// Pick one glyph of an entry uniformly at random
pub fn choose_glyph<'a>(entry: &'a DictionaryEntry, random: &mut dyn RandomSource) -> Option<&'a str> {
    match entry.glyphs.len() {
        0 => None,
        1 => entry.glyphs.first().map(String::as_str),
        len => entry.glyphs.get(random.index(len)).map(String::as_str),
    }
}

/// Resolve candidates to a single glyph, or None when nothing matches
pub fn resolve<'a>(
    store: &'a DictionaryStore,
    candidates: &Candidates,
    random: &mut dyn RandomSource,
) -> Option<&'a str> {
    let (keyword, entry) = find_entry(store, candidates)?;
    crate::trace!("Resolved '{}' via keyword '{}'", candidates.normalized, keyword);
    choose_glyph(entry, random)
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;
