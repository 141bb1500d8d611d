pub mod dictionary;
pub mod engine;
pub mod gloss;
pub mod playback;
pub mod resolver;
pub mod types;
