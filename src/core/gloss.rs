// File: src/core/gloss.rs
use std::collections::HashMap;

const ARTICLES: [&str; 3] = ["A", "AN", "THE"];
const BE_VERBS: [&str; 8] = ["AM", "IS", "ARE", "WAS", "WERE", "BE", "BEEN", "BEING"];

const CONTRACTIONS: [(&str, &str); 7] = [
    ("I'M", "I"),
    ("YOU'RE", "YOU"),
    ("HE'S", "HE"),
    ("SHE'S", "SHE"),
    ("IT'S", "IT"),
    ("WE'RE", "WE"),
    ("THEY'RE", "THEY"),
];

const VERB_BASE_FORMS: [(&str, &str); 25] = [
    ("WENT", "GO"), ("GOING", "GO"), ("GOES", "GO"), ("GONE", "GO"),
    ("ATE", "EAT"), ("EATING", "EAT"), ("EATS", "EAT"), ("EATEN", "EAT"),
    ("SAW", "SEE"), ("SEEN", "SEE"), ("SEEING", "SEE"), ("SEES", "SEE"),
    ("DID", "DO"), ("DOING", "DO"), ("DOES", "DO"), ("DONE", "DO"),
    ("HAD", "HAVE"), ("HAS", "HAVE"), ("HAVING", "HAVE"),
    ("CAME", "COME"), ("COMING", "COME"), ("COMES", "COME"),
    ("BOUGHT", "BUY"), ("BUYING", "BUY"), ("BUYS", "BUY"),
];

/// A rule-based English transcript to ASL gloss converter.
///
/// Glosses are uppercase, drop articles and forms of "to be", and carry verbs
/// in their base form. Anything fancier belongs to the transcription service.
pub struct GlossConverter {
    contractions: HashMap<&'static str, &'static str>,
    verbs: HashMap<&'static str, &'static str>,
}

impl Default for GlossConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl GlossConverter {
    pub fn new() -> Self {
        Self {
            contractions: CONTRACTIONS.into_iter().collect(),
            verbs: VERB_BASE_FORMS.into_iter().collect(),
        }
    }

    /// Converts a transcript into a single-spaced gloss. May return an empty
    /// string when nothing survives the rules.
    pub fn to_gloss(&self, transcript: &str) -> String {
        let upper = transcript.to_uppercase().replace('\u{2019}', "'");

        upper
            .split_whitespace()
            .filter_map(|word| self.convert_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn convert_word(&self, word: &str) -> Option<String> {
        let trimmed = word.trim_matches(|c: char| !is_gloss_char(c) && c != '\'');

        let expanded = match self.contractions.get(trimmed) {
            Some(base) => base.to_string(),
            None => trimmed.strip_suffix("'S").unwrap_or(trimmed).to_string(),
        };

        let cleaned: String = expanded.chars().filter(|&c| is_gloss_char(c)).collect();
        if cleaned.is_empty() {
            return None;
        }
        if ARTICLES.contains(&cleaned.as_str()) || BE_VERBS.contains(&cleaned.as_str()) {
            return None;
        }

        match self.verbs.get(cleaned.as_str()) {
            Some(base) => Some(base.to_string()),
            None => Some(cleaned),
        }
    }
}

/// Word characters and hyphens survive; all other punctuation is dropped.
fn is_gloss_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}
