use crate::config::EngineConfig;
use crate::core::{dictionary::GestureDictionary, gloss::GlossConverter, resolver};
use crate::core::types::{GestureStep, Resolution, Translation};
use crate::error::{DictionaryError, ResolutionError};
use crate::persistence::load_dictionary;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

// The engine is the only owner of the "current" dictionary. Each dictionary is
// immutable; reloading swaps the Arc, and in-flight resolutions keep theirs.
pub struct GestureEngine {
    dictionary: RwLock<Option<Arc<GestureDictionary>>>,
    converter: GlossConverter,
    dictionary_path: Option<PathBuf>,
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureEngine {
    /// An engine with no dictionary. Resolution fails until one is installed.
    pub fn new() -> Self {
        Self {
            dictionary: RwLock::new(None),
            converter: GlossConverter::new(),
            dictionary_path: None,
        }
    }

    pub fn with_dictionary(dictionary: GestureDictionary) -> Self {
        let engine = Self::new();
        engine.install(dictionary);
        engine
    }

    /// Loads the configured dictionary. A load failure is logged and leaves the
    /// engine empty so callers see `MissingDictionary` instead of a crash.
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut engine = Self::new();
        engine.dictionary_path = Some(config.dictionary_path.clone());
        if let Err(e) = engine.reload() {
            warn!(
                path = %config.dictionary_path.display(),
                error = %e,
                "could not load gesture dictionary"
            );
        }
        engine
    }

    /// Atomically replaces the current dictionary.
    pub fn install(&self, dictionary: GestureDictionary) {
        let entries = dictionary.len();
        let has_space = dictionary.sentinel().is_some();
        let fresh = Arc::new(dictionary);

        let mut slot = self.dictionary.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(fresh);
        info!(entries, has_space, "installed gesture dictionary");
    }

    /// Re-reads the configured path. The current dictionary stays in place
    /// when loading fails.
    pub fn reload(&self) -> Result<(), DictionaryError> {
        let Some(path) = &self.dictionary_path else {
            return Ok(());
        };
        let dictionary = load_dictionary(path)?;
        self.install(dictionary);
        Ok(())
    }

    /// The dictionary in effect right now.
    pub fn dictionary(&self) -> Option<Arc<GestureDictionary>> {
        self.dictionary
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn resolve(&self, gloss: &str) -> Result<Vec<GestureStep>, ResolutionError> {
        self.resolve_with_report(gloss).map(|resolution| resolution.steps)
    }

    pub fn resolve_with_report(&self, gloss: &str) -> Result<Resolution, ResolutionError> {
        let dictionary = self.dictionary();
        let resolution = resolver::resolve_with_report(gloss, dictionary.as_deref())?;

        if !resolution.skipped.is_empty() {
            debug!(skipped = ?resolution.skipped, "symbols without a gesture");
        }
        debug!(gloss, steps = resolution.steps.len(), "resolved gloss");
        Ok(resolution)
    }

    /// Transcript -> gloss -> steps.
    pub fn translate(&self, transcript: &str) -> Result<Translation, ResolutionError> {
        let gloss = self.converter.to_gloss(transcript);
        let steps = self.resolve(&gloss)?;
        Ok(Translation {
            transcript: transcript.to_string(),
            gloss,
            steps,
        })
    }

    pub fn converter(&self) -> &GlossConverter {
        &self.converter
    }
}
