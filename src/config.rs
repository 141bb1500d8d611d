// File: src/config.rs
use crate::core::playback::DEFAULT_INTERVAL;
use crate::error::ConfigError;
use ::config::builder::{ConfigBuilder, DefaultState};
use ::config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DICTIONARY_PATH_VAR: &str = "GESTURE_DICTIONARY_PATH";
pub const PLAYBACK_INTERVAL_VAR: &str = "GESTURE_PLAYBACK_INTERVAL_MS";

const ENV_PREFIX: &str = "GESTURE";
const CONFIG_FILE: &str = "gesture";

const DEFAULT_DICTIONARY_PATH: &str = "data/gesture_mapping.json";

/// Engine settings. Defaults first, then an optional file, then environment overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// JSON mapping, or a `.bin` snapshot.
    pub dictionary_path: PathBuf,
    pub playback_interval_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            playback_interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
        }
    }
}

impl EngineConfig {
    /// Defaults, then an optional `gesture.toml`, then `GESTURE_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX));

        Self::finish(settings)
    }

    /// Defaults overridden by an explicit set of `GESTURE_*` variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Map<String, String> = vars.into_iter().collect();
        let settings = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(Environment::with_prefix(ENV_PREFIX).source(Some(vars)));

        Self::finish(settings)
    }

    fn finish(settings: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dictionary_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: DICTIONARY_PATH_VAR,
                value: String::new(),
            });
        }
        if self.playback_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                var: PLAYBACK_INTERVAL_VAR,
                value: self.playback_interval_ms.to_string(),
            });
        }
        Ok(())
    }

    pub fn playback_interval(&self) -> Duration {
        Duration::from_millis(self.playback_interval_ms)
    }
}
