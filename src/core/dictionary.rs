// File: src/core/dictionary.rs
use crate::core::types::GestureEntry;
use crate::error::DictionaryError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Reserved key of the inter-word space asset. Matched case-insensitively.
pub const SENTINEL_KEY: &str = "NOTHING";

/// One record of the JSON gesture mapping, as written by asset authors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(default)]
    pub letter: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub image_path: String,
}

/// The raw JSON mapping: token -> record.
pub type SourceMapping = BTreeMap<String, SourceRecord>;

/// An immutable lookup table from uppercase token to gesture entry.
///
/// The space sentinel is held apart from the word table, so a gloss word that
/// happens to spell the sentinel key is resolved like any other word.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureDictionary {
    entries: HashMap<String, GestureEntry>,
    sentinel: Option<GestureEntry>,
}

impl GestureDictionary {
    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::default()
    }

    /// Builds a dictionary from the authored JSON mapping.
    /// A record's label is its `letter`, or its `name` when `letter` is absent
    /// or empty.
    pub fn from_mapping(mapping: SourceMapping) -> Result<Self, DictionaryError> {
        Self::from_entries(mapping.into_iter().map(|(key, record)| GestureEntry {
            key,
            label: record.letter.filter(|l| !l.is_empty()).or(record.name),
            image_ref: record.image_path,
        }))
    }

    /// Normalizes keys to uppercase, validates every entry and pulls out the
    /// sentinel. Two keys that collapse to the same uppercase token are rejected.
    pub fn from_entries<I>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = GestureEntry>,
    {
        let mut dictionary = Self::default();

        for mut entry in entries {
            entry.key = entry.key.to_uppercase();
            validate(&entry)?;

            if entry.key == SENTINEL_KEY {
                if dictionary.sentinel.is_some() {
                    return Err(DictionaryError::DuplicateKey(entry.key));
                }
                dictionary.sentinel = Some(entry);
                continue;
            }

            if dictionary.entries.contains_key(&entry.key) {
                return Err(DictionaryError::DuplicateKey(entry.key));
            }
            dictionary.entries.insert(entry.key.clone(), entry);
        }

        Ok(dictionary)
    }

    /// Whole-word lookup. `word` must already be uppercase.
    pub fn word(&self, word: &str) -> Option<&GestureEntry> {
        self.entries.get(word)
    }

    /// Single-character lookup. `letter` must already be uppercase.
    pub fn letter(&self, letter: char) -> Option<&GestureEntry> {
        let mut buf = [0u8; 4];
        self.entries.get(&*letter.encode_utf8(&mut buf))
    }

    pub fn sentinel(&self) -> Option<&GestureEntry> {
        self.sentinel.as_ref()
    }

    /// Every entry, sentinel included, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &GestureEntry> {
        self.entries.values().chain(self.sentinel.iter())
    }

    /// Number of word and letter entries, not counting the sentinel.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(entry: &GestureEntry) -> Result<(), DictionaryError> {
    let reason = if entry.key.is_empty() {
        Some("key is empty")
    } else if entry.key.chars().any(char::is_whitespace) {
        Some("key contains whitespace")
    } else if entry.image_ref.trim().is_empty() {
        Some("image reference is empty")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(DictionaryError::InvalidEntry {
            key: entry.key.clone(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Programmatic construction, mostly for embedding and tests.
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    entries: Vec<GestureEntry>,
}

impl DictionaryBuilder {
    pub fn letter(mut self, letter: char, image_ref: &str) -> Self {
        self.entries
            .push(GestureEntry::new(&letter.to_string(), None, image_ref));
        self
    }

    pub fn sign(mut self, word: &str, label: Option<&str>, image_ref: &str) -> Self {
        self.entries.push(GestureEntry::new(word, label, image_ref));
        self
    }

    pub fn space(mut self, image_ref: &str) -> Self {
        self.entries
            .push(GestureEntry::new(SENTINEL_KEY, None, image_ref));
        self
    }

    pub fn build(self) -> Result<GestureDictionary, DictionaryError> {
        GestureDictionary::from_entries(self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(json: &str) -> SourceMapping {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_from_mapping_normalizes_keys_and_extracts_sentinel() {
        let dict = GestureDictionary::from_mapping(mapping(
            r#"{
                "a": {"letter": "A", "image_path": "/gestures/a.png"},
                "Hello": {"name": "hello", "image_path": "/gestures/hello.png"},
                "Nothing": {"image_path": "/gestures/nothing.png"}
            }"#,
        ))
        .unwrap();

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.letter('A').unwrap().image_ref, "/gestures/a.png");
        assert_eq!(dict.word("HELLO").unwrap().display_label(), "hello");
        assert_eq!(dict.sentinel().unwrap().image_ref, "/gestures/nothing.png");
        assert!(dict.word("NOTHING").is_none());
    }

    #[test]
    fn test_letter_preferred_over_name_for_label() {
        let dict = GestureDictionary::from_mapping(mapping(
            r#"{"B": {"letter": "B", "name": "bee", "image_path": "b.png"}}"#,
        ))
        .unwrap();

        assert_eq!(dict.word("B").unwrap().label.as_deref(), Some("B"));
    }

    #[test]
    fn test_empty_letter_falls_back_to_name() {
        let dict = GestureDictionary::from_mapping(mapping(
            r#"{"BEE": {"letter": "", "name": "bee", "image_path": "bee.png"}}"#,
        ))
        .unwrap();

        assert_eq!(dict.word("BEE").unwrap().display_label(), "bee");
    }

    #[test]
    fn test_entries_include_sentinel() {
        let dict = GestureDictionary::builder()
            .letter('A', "a.png")
            .space("nothing.png")
            .build()
            .unwrap();

        let mut keys: Vec<&str> = dict.entries().map(|e| e.key.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["A", SENTINEL_KEY]);
    }

    #[test]
    fn test_duplicate_after_normalization_is_rejected() {
        let result = GestureDictionary::builder()
            .sign("hi", None, "hi.png")
            .sign("HI", None, "hi2.png")
            .build();

        match result {
            Err(DictionaryError::DuplicateKey(key)) => assert_eq!(key, "HI"),
            other => panic!("Expected DuplicateKey, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_entries_are_rejected() {
        let empty_image = GestureDictionary::builder().letter('A', "  ").build();
        assert!(matches!(
            empty_image,
            Err(DictionaryError::InvalidEntry { reason: "image reference is empty", .. })
        ));

        let spaced_key = GestureDictionary::builder()
            .sign("THANK YOU", None, "ty.png")
            .build();
        assert!(matches!(
            spaced_key,
            Err(DictionaryError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn test_empty_dictionary_is_valid() {
        let dict = GestureDictionary::builder().build().unwrap();
        assert!(dict.is_empty());
        assert!(dict.sentinel().is_none());
        assert!(dict.letter('A').is_none());
    }
}
