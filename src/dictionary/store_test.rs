// Tests for DictionaryStore
// Test cases:
// - Keys are normalized on insert and remove
// - Entries with no usable glyphs are never stored
// - Snapshot round trip through serde keeps custom flags
// - Restored snapshots are normalized and lose empty entries
// - retain_custom drops merged entries only

use super::*;

#[test]
fn test_insert_normalizes_keyword() {
    let mut store = DictionaryStore::new();

    assert!(store.insert("  Cat ", DictionaryEntry::merged("🐱")));

    assert!(store.contains("cat"));
    assert!(!store.contains("Cat"));
    assert_eq!(store.get("cat").unwrap().glyphs, vec!["🐱".to_string()]);
}

#[test]
fn test_insert_rejects_empty_keyword_and_glyphs() {
    let mut store = DictionaryStore::new();

    assert!(!store.insert("   ", DictionaryEntry::merged("🐱")));
    assert!(!store.insert("cat", DictionaryEntry::merged("")));
    assert!(!store.insert(
        "cat",
        DictionaryEntry {
            glyphs: vec![],
            custom: true,
        }
    ));

    assert!(store.is_empty());
}

#[test]
fn test_insert_filters_blank_glyphs() {
    let mut store = DictionaryStore::new();
    let entry = DictionaryEntry {
        glyphs: vec!["".to_string(), "🐶".to_string(), " ".to_string()],
        custom: false,
    };

    assert!(store.insert("dog", entry));
    assert_eq!(store.get("dog").unwrap().glyphs, vec!["🐶".to_string()]);
}

#[test]
fn test_remove_deletes_key_entirely() {
    let mut store = DictionaryStore::new();
    store.insert("dog", DictionaryEntry::merged("🐶"));

    let removed = store.remove("DOG");

    assert!(removed.is_some());
    assert!(!store.contains("dog"));
    assert_eq!(store.len(), 0);
    assert!(store.remove("dog").is_none());
}

#[test]
fn test_nth_follows_key_order() {
    let mut store = DictionaryStore::new();
    store.insert("zebra", DictionaryEntry::merged("🦓"));
    store.insert("apple", DictionaryEntry::merged("🍎"));

    assert_eq!(store.nth(0).unwrap().0, "apple");
    assert_eq!(store.nth(1).unwrap().0, "zebra");
    assert!(store.nth(2).is_none());
}

#[test]
fn test_snapshot_round_trip_keeps_custom_flag() {
    let mut store = DictionaryStore::new();
    store.insert("cat", DictionaryEntry::custom("😺"));
    store.insert("dog", DictionaryEntry::merged("🐶"));

    let json = serde_json::to_string(&store).unwrap();
    let restored: DictionaryStore = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, store);
    assert!(restored.get("cat").unwrap().custom);
    assert!(!restored.get("dog").unwrap().custom);
}

#[test]
fn test_deserialize_entry_without_custom_defaults_to_false() {
    let json = r#"{"cat": {"glyphs": ["🐱"]}}"#;

    let store: DictionaryStore = serde_json::from_str(json).unwrap();

    assert!(!store.get("cat").unwrap().custom);
}

#[test]
fn test_from_entries_normalizes_and_drops_empty() {
    let store = DictionaryStore::from_entries(vec![
        ("Cat".to_string(), DictionaryEntry::merged("🐱")),
        ("ghost".to_string(), DictionaryEntry {
            glyphs: vec![],
            custom: false,
        }),
    ]);

    assert_eq!(store.len(), 1);
    assert!(store.contains("cat"));
}

#[test]
fn test_retain_custom_drops_merged_entries() {
    let mut store = DictionaryStore::new();
    store.insert("cat", DictionaryEntry::custom("😺"));
    store.insert("dog", DictionaryEntry::merged("🐶"));
    store.insert("fish", DictionaryEntry::merged("🐟"));

    let dropped = store.retain_custom();

    assert_eq!(dropped, 2);
    assert_eq!(store.len(), 1);
    assert!(store.contains("cat"));
}

#[test]
fn test_deserialize_normalizes_keys_and_drops_empty_entries() {
    let json = r#"{
        "cat": {"glyphs": []},
        " Dog": {"glyphs": ["🐶"], "custom": true},
        "fish": {"glyphs": ["", "🐟"]}
    }"#;

    let store: DictionaryStore = serde_json::from_str(json).unwrap();

    assert_eq!(store.len(), 2);
    assert!(!store.contains("cat"));
    assert!(!store.contains(" Dog"));
    assert!(store.get("dog").unwrap().custom);
    assert_eq!(store.get("fish").unwrap().glyphs, vec!["🐟".to_string()]);
    assert_eq!(store.nth(0).unwrap().0, "dog");
}
