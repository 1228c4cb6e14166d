// Word normalizer - peels punctuation off tokens and derives lookup candidates

/// Symbols stripped from either end of a token before lookup
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[]^_`{|}~";

/// Words that are never translated unless configured otherwise
pub const DEFAULT_STOPWORDS: &[&str] = &["it"];

/// Whether a character belongs to the punctuation set
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// A token broken into leading punctuation, core word and trailing punctuation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitToken<'a> {
    pub prefix: &'a str,
    pub core: &'a str,
    pub suffix: &'a str,
}

impl SplitToken<'_> {
    /// Rebuild the token around a replacement for the core word
    pub fn wrap(&self, replacement: &str) -> String {
        format!("{}{}{}", self.prefix, replacement, self.suffix)
    }
}

/// Split a token into its punctuation runs and core word
///
/// A token made only of punctuation ends up entirely in `prefix`.
pub fn split_token(token: &str) -> SplitToken<'_> {
    let rest = token.trim_start_matches(is_punctuation);
    let prefix = &token[..token.len() - rest.len()];
    let core = rest.trim_end_matches(is_punctuation);
    let suffix = &rest[core.len()..];

    SplitToken {
        prefix,
        core,
        suffix,
    }
}

/// Keys to probe for one word, in priority order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    /// Trimmed, lowercase word
    pub normalized: String,
    /// The word without a trailing `s`, when it looks plural
    pub singular: Option<String>,
    /// The word with an `s` appended, unless it is a single letter
    pub plural: Option<String>,
}

impl Candidates {
    /// Probe keys in order: exact, singular, plural
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.normalized.as_str())
            .chain(self.singular.as_deref())
            .chain(self.plural.as_deref())
    }
}

/// Derives lookup candidates from core words
#[derive(Debug, Clone)]
pub struct Normalizer {
    stopwords: Vec<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS.iter().map(|s| s.to_string()))
    }
}

impl Normalizer {
    /// Create a normalizer with a custom stopword list
    pub fn new<I>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|word| word.trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Normalize input text: lowercase and trim whitespace
    fn normalize(input: &str) -> String {
        input.trim().to_lowercase()
    }

    /// Whether a normalized word is a stopword
    pub fn is_stopword(&self, normalized: &str) -> bool {
        self.stopwords.iter().any(|word| word == normalized)
    }

    /// Derive singular/plural candidates for a core word
    ///
    /// Returns None for empty words and stopwords, which are never looked up.
    pub fn candidates(&self, core: &str) -> Option<Candidates> {
        let normalized = Self::normalize(core);
        if normalized.is_empty() || self.is_stopword(&normalized) {
            return None;
        }

        let len = normalized.chars().count();

        // Two-letter words are left alone so "as" never becomes "a"
        let singular = match normalized.strip_suffix('s') {
            Some(stem) if len > 2 => Some(stem.to_string()),
            _ => None,
        };

        // Single letters would pluralize into unrelated words
        let plural = (len != 1).then(|| format!("{}s", normalized));

        Some(Candidates {
            normalized,
            singular,
            plural,
        })
    }
}

#[cfg(test)]
#[path = "normalizer_test.rs"]
mod tests;
