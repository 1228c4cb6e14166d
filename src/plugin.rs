//! Chat plugin shell.
//!
//! Recognizes the plugin trigger in a chat line, parses the rest into a
//! [`Command`] and dispatches it to the translator. Delivery of the returned
//! reply is left to the host.

use regex::Regex;
use serde::Serialize;

use crate::commands::{Command, CommandError};
use crate::config::{ConfigError, EmojiConfig};
use crate::dataset::{DatasetError, DatasetSource};
use crate::translate::{TranslateError, Translator};

/// Credit line shown in the help entry
pub const CREDIT: &str =
    "inspiration and translations taken from https://github.com/notwaldorf/emoji-translate";

/// Error types surfaced by the plugin
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PluginError {
    /// The chat line does not start with this plugin's trigger
    #[error("Message is not an emoji command")]
    NotMatched,
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Translate(#[from] TranslateError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// One line of help output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpEntry {
    pub usage: String,
    pub description: String,
    pub credit: Option<String>,
}

/// Emoji translation plugin bound to a dataset source
pub struct EmojiPlugin<S: DatasetSource> {
    config: EmojiConfig,
    trigger: Regex,
    translator: Translator,
    source: S,
}

impl<S: DatasetSource> EmojiPlugin<S> {
    /// Create a plugin from configuration and a dataset source
    pub fn new(config: EmojiConfig, source: S) -> Result<Self, PluginError> {
        let translator = Translator::from_config(&config);
        Self::with_translator(config, source, translator)
    }

    /// Create a plugin around an existing translator, e.g. one restored from
    /// a snapshot or using a fixed random source
    pub fn with_translator(
        config: EmojiConfig,
        source: S,
        translator: Translator,
    ) -> Result<Self, PluginError> {
        let trigger = config.trigger();
        if trigger.trim().is_empty() {
            return Err(ConfigError::InvalidTrigger("trigger is empty".to_string()).into());
        }

        // Trigger must be followed by whitespace or the end of the line
        let pattern = format!(r"(?s)^\s*{}(?:\s+(?P<args>.*))?$", regex::escape(&trigger));
        let trigger = Regex::new(&pattern)
            .map_err(|e| ConfigError::InvalidTrigger(format!("{}: {}", trigger, e)))?;

        Ok(Self {
            config,
            trigger,
            translator,
            source,
        })
    }

    pub fn config(&self) -> &EmojiConfig {
        &self.config
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Whether a chat line is addressed to this plugin
    pub fn matches(&self, text: &str) -> bool {
        self.trigger.is_match(text)
    }

    /// Help entries for the host's help command
    pub fn help(&self) -> Vec<HelpEntry> {
        let trigger = self.config.trigger();
        vec![
            HelpEntry {
                usage: format!("{} \"<text>\"", trigger),
                description: "translates text into emoji.".to_string(),
                credit: Some(CREDIT.to_string()),
            },
            HelpEntry {
                usage: format!("{} update", trigger),
                description: "refreshes the emoji dictionary.".to_string(),
                credit: None,
            },
            HelpEntry {
                usage: format!("{} add <emoji> <keyword>...", trigger),
                description: "maps keywords to a custom emoji.".to_string(),
                credit: None,
            },
            HelpEntry {
                usage: format!("{} remove <keyword>...", trigger),
                description: "removes keywords from the dictionary.".to_string(),
                credit: None,
            },
        ]
    }

    /// Populate the dictionary from the source if it is still empty
    ///
    /// Returns whether a refresh happened.
    pub fn load(&mut self) -> Result<bool, PluginError> {
        if !self.translator.store().is_empty() {
            return Ok(false);
        }
        self.update()?;
        Ok(true)
    }

    /// Fetch the dataset and merge it, returning a summary reply
    pub fn update(&mut self) -> Result<String, PluginError> {
        let pairs = self.source.pairs()?;
        let summary = self.translator.merge(pairs);
        crate::info!(
            "Emoji dictionary updated: {} keywords ({} new, {} extended, {} custom kept)",
            self.translator.store().len(),
            summary.inserted,
            summary.appended,
            summary.protected
        );
        Ok(format!(
            "Updated emoji dictionary: {} new, {} extended, {} custom kept",
            summary.inserted, summary.appended, summary.protected
        ))
    }

    /// Handle a chat line addressed to the plugin
    pub fn run(&mut self, text: &str) -> Result<String, PluginError> {
        let args = self
            .trigger
            .captures(text)
            .ok_or(PluginError::NotMatched)?
            .name("args")
            .map(|m| m.as_str())
            .unwrap_or_default()
            .to_string();

        let command: Command = args.parse()?;
        self.dispatch(command)
    }

    /// Execute an already parsed command
    pub fn dispatch(&mut self, command: Command) -> Result<String, PluginError> {
        crate::debug!("Dispatching emoji command: {:?}", command);

        match command {
            Command::Update => self.update(),
            Command::Add { glyph, keywords } => {
                self.translator.add_custom(&glyph, &keywords);
                Ok(format!("Added {} for {}", glyph, keywords.join(", ")))
            }
            Command::Remove { keywords } => {
                let removed = self.translator.remove_keywords(&keywords);
                Ok(format!(
                    "Removed {} of {} keyword(s)",
                    removed,
                    keywords.len()
                ))
            }
            Command::Translate { text } => {
                if let Err(e) = self.load() {
                    crate::warn!("Failed to load emoji dictionary: {}", e);
                    // Nothing to fall back on; report why
                    if self.translator.store().is_empty() {
                        return Err(e);
                    }
                }
                Ok(self.translator.translate_phrase_or_sample(&text)?)
            }
        }
    }
}

#[cfg(test)]
#[path = "plugin_test.rs"]
mod tests;
