//! Spelling suggestion engine.
//!
//! This module builds an n-gram hash index over a fixed dictionary once and
//! answers "did you mean?" queries against it: candidate generation from
//! the index, deduplication, edit-distance scoring with a length-adaptive
//! threshold, and assembly of the results ordered by distance.

pub mod alphabet;
pub mod candidates;
pub mod config;
pub mod dedup;
pub mod dictionary;
pub mod engine;
pub mod index;
pub mod suggest;

// Re-export commonly used types
pub use alphabet::Alphabet;
pub use config::{EngineConfig, ThresholdConfig, ThresholdTier};
pub use dictionary::{DictionaryLoader, MalformedPolicy, WordList};
pub use engine::{AutocorrectEngine, EngineStats};
pub use suggest::{Suggestion, SuggestionResult};
