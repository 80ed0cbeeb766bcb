//! Error types for the autocorrect library.
//!
//! All fallible operations return [`AutocorrectError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use autocorrect::error::{AutocorrectError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(AutocorrectError::configuration("ngram length must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for autocorrect operations.
#[derive(Error, Debug)]
pub enum AutocorrectError {
    /// A character outside the configured alphabet was encoded.
    #[error("Invalid character {ch:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Character offset within the word.
        position: usize,
    },

    /// Engine configuration that can never produce a usable index.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed dictionary source.
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// I/O errors (dictionary and config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with AutocorrectError.
pub type Result<T> = std::result::Result<T, AutocorrectError>;

impl AutocorrectError {
    /// Create a new invalid character error.
    pub fn invalid_character(ch: char, position: usize) -> Self {
        AutocorrectError::InvalidCharacter { ch, position }
    }

    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        AutocorrectError::Configuration(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        AutocorrectError::Dictionary(msg.into())
    }

    /// Whether the error came from rejected input rather than setup.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AutocorrectError::InvalidCharacter { .. })
    }
}
