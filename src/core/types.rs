// src/core/types.rs
use serde::{Deserialize, Serialize};

/// One dictionary record. `key` is already uppercase-normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureEntry {
    pub key: String,
    /// Display text. Absent for plain fingerspelling letters.
    pub label: Option<String>,
    /// Opaque reference to the visual asset.
    pub image_ref: String,
}

impl GestureEntry {
    pub fn new(key: &str, label: Option<&str>, image_ref: &str) -> Self {
        Self {
            key: key.to_uppercase(),
            label: label.map(str::to_string),
            image_ref: image_ref.to_string(),
        }
    }

    /// The text shown when this entry is played as a whole-word sign.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Sign,
    Fingerspell,
    Space,
}

/// One produced output unit.
///
/// Serializes to the shape the playback UI reads:
/// `{"letter", "image_path", "type", "isSpace"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureStep {
    #[serde(rename = "letter")]
    pub label: String,
    #[serde(rename = "image_path")]
    pub image_ref: String,
    #[serde(rename = "type")]
    pub kind: StepKind,
    #[serde(rename = "isSpace")]
    pub is_space: bool,
}

impl GestureStep {
    pub fn sign(entry: &GestureEntry) -> Self {
        Self {
            label: entry.display_label().to_string(),
            image_ref: entry.image_ref.clone(),
            kind: StepKind::Sign,
            is_space: false,
        }
    }

    /// `letter` is the uppercased source character, which may span more than
    /// one `char`.
    pub fn fingerspell(letter: &str, entry: &GestureEntry) -> Self {
        Self {
            label: letter.to_string(),
            image_ref: entry.image_ref.clone(),
            kind: StepKind::Fingerspell,
            is_space: false,
        }
    }

    pub fn space(sentinel: &GestureEntry) -> Self {
        Self {
            label: String::new(),
            image_ref: sentinel.image_ref.clone(),
            kind: StepKind::Space,
            is_space: true,
        }
    }
}

/// A character of the input that had no dictionary entry and produced no step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSymbol {
    /// 0-based index of the word in the split gloss.
    pub word_index: usize,
    pub symbol: char,
}

/// Steps plus the symbols that were dropped on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub steps: Vec<GestureStep>,
    pub skipped: Vec<SkippedSymbol>,
}

/// Result of running a raw transcript through the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub transcript: String,
    pub gloss: String,
    pub steps: Vec<GestureStep>,
}
