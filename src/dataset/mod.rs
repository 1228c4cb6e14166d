//! Bulk emoji datasets.
//!
//! A [`DatasetSource`] yields the raw payload; [`parse_emojilib`] flattens it
//! into (keyword, glyph) pairs for the merge engine. Network sources belong to
//! the host, which implements the trait over its own HTTP client.

mod emojilib;

pub use emojilib::parse_emojilib;

use std::fs;
use std::path::PathBuf;

/// Error types for dataset retrieval and parsing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    /// Failed to read the payload
    #[error("Failed to read dataset: {0}")]
    Io(String),
    /// Payload is not a valid emoji dataset
    #[error("Failed to parse dataset: {0}")]
    Parse(String),
    /// The source could not provide a payload
    #[error("Dataset source unavailable: {0}")]
    Source(String),
}

/// Provider of raw dataset payloads.
///
/// Implementations fetch from wherever the host keeps its emoji corpus.
pub trait DatasetSource {
    /// Fetch the raw JSON payload
    fn fetch(&self) -> Result<String, DatasetError>;

    /// Fetch and flatten the payload into (keyword, glyph) pairs
    fn pairs(&self) -> Result<Vec<(String, String)>, DatasetError> {
        parse_emojilib(&self.fetch()?)
    }
}

/// Reads the payload from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileSource {
    fn fetch(&self) -> Result<String, DatasetError> {
        crate::debug!("Reading emoji dataset from {:?}", self.path);
        fs::read_to_string(&self.path)
            .map_err(|e| DatasetError::Io(format!("{}: {}", self.path.display(), e)))
    }
}

/// Serves a payload held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    payload: Option<String>,
}

impl StaticSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
        }
    }

    /// A source with nothing to serve; every fetch fails
    pub fn empty() -> Self {
        Self::default()
    }
}

impl DatasetSource for StaticSource {
    fn fetch(&self) -> Result<String, DatasetError> {
        self.payload
            .clone()
            .ok_or_else(|| DatasetError::Source("no dataset configured".to_string()))
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
