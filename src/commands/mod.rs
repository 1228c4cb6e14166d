// Chat commands - the argument text after the trigger, parsed once into a Command

use serde::Serialize;
use std::str::SplitWhitespace;

/// Administrative keyword that refreshes the dictionary from the dataset source
pub const UPDATE: &str = "update";
/// Administrative keyword that maps keywords to a custom glyph
pub const ADD: &str = "add";
/// Administrative keyword that deletes keywords
pub const REMOVE: &str = "remove";

/// A parsed plugin command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Merge a freshly fetched dataset
    Update,
    /// Map every keyword to `glyph` as a custom entry
    Add { glyph: String, keywords: Vec<String> },
    /// Delete every keyword
    Remove { keywords: Vec<String> },
    /// Translate the text
    Translate { text: String },
}

/// Error types for malformed administrative commands
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// `add` was given no glyph
    #[error("Usage: add <emoji> <keyword>...")]
    MissingGlyph,
    /// An administrative command was given no keywords
    #[error("Usage: {0} needs at least one keyword")]
    MissingKeywords(&'static str),
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    /// Parse the text that follows the plugin trigger
    ///
    /// Only the first word selects an administrative command; anything else
    /// is translated verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();

        match words.next() {
            Some(UPDATE) => Ok(Command::Update),
            Some(ADD) => {
                let glyph = words.next().ok_or(CommandError::MissingGlyph)?.to_string();
                let keywords = collect_keywords(words);
                if keywords.is_empty() {
                    return Err(CommandError::MissingKeywords(ADD));
                }
                Ok(Command::Add { glyph, keywords })
            }
            Some(REMOVE) => {
                let keywords = collect_keywords(words);
                if keywords.is_empty() {
                    return Err(CommandError::MissingKeywords(REMOVE));
                }
                Ok(Command::Remove { keywords })
            }
            _ => Ok(Command::Translate {
                text: s.to_string(),
            }),
        }
    }
}

fn collect_keywords(words: SplitWhitespace<'_>) -> Vec<String> {
    words.map(str::to_string).collect()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
