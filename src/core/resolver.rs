// File: src/core/resolver.rs
use crate::core::dictionary::GestureDictionary;
use crate::core::types::{GestureStep, Resolution, SkippedSymbol};
use crate::error::ResolutionError;

/// Resolves a gloss into an ordered list of gesture steps.
///
/// Each whitespace-separated word becomes one `Sign` step when the dictionary
/// knows it, otherwise one `Fingerspell` step per known character. Characters
/// without an entry are dropped. A `Space` step separates consecutive words
/// only when the dictionary carries the space sentinel.
pub fn resolve(
    gloss: &str,
    dictionary: Option<&GestureDictionary>,
) -> Result<Vec<GestureStep>, ResolutionError> {
    resolve_with_report(gloss, dictionary).map(|resolution| resolution.steps)
}

/// Same as [`resolve`], and also lists every character that produced no step.
pub fn resolve_with_report(
    gloss: &str,
    dictionary: Option<&GestureDictionary>,
) -> Result<Resolution, ResolutionError> {
    if gloss.trim().is_empty() {
        return Err(ResolutionError::EmptyInput);
    }
    let dictionary = dictionary.ok_or(ResolutionError::MissingDictionary)?;

    let words: Vec<&str> = gloss.split_whitespace().collect();
    let mut resolution = Resolution {
        steps: Vec::with_capacity(gloss.len()),
        skipped: Vec::new(),
    };

    for (word_index, &source_word) in words.iter().enumerate() {
        if let Some(entry) = dictionary.word(&source_word.to_uppercase()) {
            resolution.steps.push(GestureStep::sign(entry));
        } else {
            // One lookup per source character, even when its uppercase form
            // is longer ('ß' -> "SS"), so a word never yields more steps than
            // it has characters.
            for symbol in source_word.chars() {
                let folded: String = symbol.to_uppercase().collect();
                match dictionary.word(&folded) {
                    Some(entry) => resolution
                        .steps
                        .push(GestureStep::fingerspell(&folded, entry)),
                    None => resolution.skipped.push(SkippedSymbol { word_index, symbol }),
                }
            }
        }

        if word_index + 1 < words.len() {
            if let Some(sentinel) = dictionary.sentinel() {
                resolution.steps.push(GestureStep::space(sentinel));
            }
        }
    }

    Ok(resolution)
}
