// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;

pub use crate::config::EngineConfig;
pub use crate::core::dictionary::GestureDictionary;
pub use crate::core::engine::GestureEngine;
pub use crate::core::resolver::{resolve, resolve_with_report};
pub use crate::core::types::{GestureEntry, GestureStep, StepKind};
pub use crate::error::{ConfigError, DictionaryError, ResolutionError};
