// Dictionary module - keyword to emoji glyph store and its merge engine

mod merge;
mod store;

pub use merge::MergeSummary;
pub use store::{normalize_keyword, DictionaryEntry, DictionaryStore};
