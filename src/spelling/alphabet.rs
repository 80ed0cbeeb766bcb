//! Character codec for n-gram hashing.
//!
//! Every accepted character maps to a digit in `[0, R)` so that a window of
//! `n` characters reads as an `n`-digit base-`R` number.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{AutocorrectError, Result};

/// The fixed set of characters a word may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// Lowercase `a`-`z` plus apostrophe (R = 27).
    #[default]
    Standard,
    /// Lowercase `a`-`z`, hyphen and apostrophe (R = 28).
    Extended,
}

impl Alphabet {
    /// Number of distinct symbols, the radix `R` of every window hash.
    pub fn radix(self) -> u64 {
        match self {
            Alphabet::Standard => 27,
            Alphabet::Extended => 28,
        }
    }

    /// Encode a single character.
    ///
    /// Letters map to 0-25. The apostrophe always takes the highest code,
    /// `R - 1`; in the extended alphabet the hyphen sits just below it.
    pub fn encode(self, ch: char) -> Option<u8> {
        match (self, ch) {
            (_, 'a'..='z') => Some(ch as u8 - b'a'),
            (Alphabet::Standard, '\'') => Some(26),
            (Alphabet::Extended, '-') => Some(26),
            (Alphabet::Extended, '\'') => Some(27),
            _ => None,
        }
    }

    /// Check whether a character belongs to this alphabet.
    pub fn contains(self, ch: char) -> bool {
        self.encode(ch).is_some()
    }

    /// Encode a whole word, failing on the first character outside the alphabet.
    pub fn encode_word(self, word: &str) -> Result<Vec<u8>> {
        word.chars()
            .enumerate()
            .map(|(position, ch)| {
                self.encode(ch)
                    .ok_or_else(|| AutocorrectError::invalid_character(ch, position))
            })
            .collect()
    }

    /// Validate a word without keeping its codes.
    pub fn validate(self, word: &str) -> Result<()> {
        match word.chars().enumerate().find(|&(_, ch)| !self.contains(ch)) {
            Some((position, ch)) => Err(AutocorrectError::invalid_character(ch, position)),
            None => Ok(()),
        }
    }

    /// Human readable name, as used in config files.
    pub fn name(self) -> &'static str {
        match self {
            Alphabet::Standard => "standard",
            Alphabet::Extended => "extended",
        }
    }
}
