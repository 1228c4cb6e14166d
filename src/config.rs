//! Plugin configuration.
//!
//! Settings are kept in a JSON document, every field optional. Missing files
//! and missing fields fall back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::translate::normalizer::DEFAULT_STOPWORDS;

/// Default command prefix, e.g. "/emoji hello"
pub const DEFAULT_COMMAND_PREFIX: &str = "/";

/// Default command name following the prefix
pub const DEFAULT_COMMAND_NAME: &str = "emoji";

/// How a phrase is cut into tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    /// Split on every single space; runs of spaces are kept as empty tokens
    #[default]
    Space,
    /// Split on `;`, trimming whitespace around each token
    Semicolon,
}

impl std::str::FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "space" => Ok(Delimiter::Space),
            "semicolon" => Ok(Delimiter::Semicolon),
            _ => Err(format!("Unknown delimiter: {}", s)),
        }
    }
}

impl Delimiter {
    /// Cut a phrase into tokens
    pub fn split<'a>(&self, phrase: &'a str) -> Vec<&'a str> {
        match self {
            Delimiter::Space => phrase.split(' ').collect(),
            Delimiter::Semicolon => phrase.split(';').map(str::trim).collect(),
        }
    }
}

/// Error types for configuration loading
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config: {0}")]
    Io(String),
    /// Configuration is not valid JSON for this schema
    #[error("Failed to parse config: {0}")]
    Parse(String),
    /// Command prefix and name cannot form a trigger
    #[error("Invalid command trigger: {0}")]
    InvalidTrigger(String),
}

/// Configuration for the emoji plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmojiConfig {
    /// Prefix that introduces bot commands
    pub command_prefix: String,
    /// Name of this plugin's command
    pub command_name: String,
    /// Token delimiter policy
    pub delimiter: Delimiter,
    /// Words never translated
    pub stopwords: Vec<String>,
    /// Seed for reproducible glyph choice; thread randomness when absent
    pub seed: Option<u64>,
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            command_prefix: DEFAULT_COMMAND_PREFIX.to_string(),
            command_name: DEFAULT_COMMAND_NAME.to_string(),
            delimiter: Delimiter::default(),
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            seed: None,
        }
    }
}

impl EmojiConfig {
    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a file, using defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        crate::debug!("Loading config from {:?}", path);

        if !path.exists() {
            crate::debug!("No config file found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// The full command trigger, e.g. "/emoji"
    pub fn trigger(&self) -> String {
        format!("{}{}", self.command_prefix, self.command_name)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
