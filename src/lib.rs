//! # Autocorrect
//!
//! Suggests dictionary words similar to a possibly misspelled token.
//!
//! ## Features
//!
//! - N-gram hash index built once over a fixed dictionary
//! - Substitution-only matching for short words
//! - Levenshtein scoring with a threshold that grows with query length
//! - Results grouped by edit distance, closest first
//!
//! ## Example
//!
//! ```
//! use autocorrect::spelling::{AutocorrectEngine, SuggestionResult};
//!
//! let engine = AutocorrectEngine::build(["cat", "cats", "cot", "dog"]).unwrap();
//!
//! assert_eq!(engine.suggest("cat"), SuggestionResult::ExactMatch);
//! assert_eq!(engine.suggest("cxt").words(), vec!["cat", "cot"]);
//! ```

pub mod cli;
pub mod error;
pub mod spelling;
pub mod util;

pub mod prelude {
    pub use crate::error::{AutocorrectError, Result};
    pub use crate::spelling::{
        Alphabet, AutocorrectEngine, EngineConfig, SuggestionResult, ThresholdConfig,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
