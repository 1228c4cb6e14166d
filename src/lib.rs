// Text-to-emoji translation for chat bots
//
// The translator owns an in-memory keyword dictionary; the plugin shell wires
// it to chat commands and a dataset source. Hosts deliver the replies.

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod commands;
pub mod config;
pub mod dataset;
pub mod dictionary;
pub mod plugin;
pub mod translate;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use commands::{Command, CommandError};
pub use config::{ConfigError, Delimiter, EmojiConfig};
pub use dataset::{parse_emojilib, DatasetError, DatasetSource, FileSource, StaticSource};
pub use dictionary::{DictionaryEntry, DictionaryStore, MergeSummary};
pub use plugin::{EmojiPlugin, HelpEntry, PluginError};
pub use translate::random::{RandomSource, SeededRandom, ThreadRandom};
pub use translate::{TranslateError, Translation, Translator};
