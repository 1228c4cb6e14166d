// Emojilib payload adapter - flattens the bulk emoji JSON into (keyword, glyph) pairs
//
// Payload shape:
// { "grinning": { "keywords": ["face", "smile"], "char": "😀", ... }, "keys": [...] }

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::DatasetError;

/// Top-level member that indexes the emoji names and carries no glyph
const INDEX_KEY: &str = "keys";

/// One emoji record; unknown fields are ignored
#[derive(Debug, Clone, Deserialize)]
struct RawEmoji {
    #[serde(rename = "char", default)]
    glyph: Option<String>,
    #[serde(default)]
    keywords: Vec<String>,
}

/// Flatten an emojilib payload into (keyword, glyph) pairs
///
/// Every alias keyword maps to the glyph, followed by the emoji's own name.
/// Records without a glyph produce no pairs. Names are visited in sorted
/// order so the same payload always flattens the same way.
pub fn parse_emojilib(json: &str) -> Result<Vec<(String, String)>, DatasetError> {
    let records: BTreeMap<String, Value> =
        serde_json::from_str(json).map_err(|e| DatasetError::Parse(e.to_string()))?;

    let mut pairs = Vec::new();
    let mut without_glyph = 0;

    for (name, value) in records {
        if name == INDEX_KEY {
            continue;
        }

        let record: RawEmoji = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                crate::warn!("Skipping malformed emoji record '{}': {}", name, e);
                continue;
            }
        };

        let glyph = match record.glyph {
            Some(glyph) if !glyph.trim().is_empty() => glyph,
            _ => {
                without_glyph += 1;
                continue;
            }
        };

        for keyword in record.keywords {
            pairs.push((keyword, glyph.clone()));
        }
        pairs.push((name, glyph));
    }

    crate::debug!(
        "Flattened emoji payload into {} pairs ({} records without glyph)",
        pairs.len(),
        without_glyph
    );
    Ok(pairs)
}

#[cfg(test)]
#[path = "emojilib_test.rs"]
mod tests;
