//! Dictionary file loading.
//!
//! A dictionary file is a flat word list, one word per line. It may start
//! with a line holding the number of words that follow; when present, exactly
//! that many entries are read. Every entry is checked against the alphabet
//! before it can reach the index.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use clap::ValueEnum;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{AutocorrectError, Result};
use crate::spelling::alphabet::Alphabet;

/// What to do with an entry containing characters outside the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Log a warning and leave the entry out.
    #[default]
    Skip,
    /// Fail the whole load.
    Reject,
}

/// Words read from a dictionary source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Accepted words in file order.
    pub words: Vec<String>,
    /// Entries left out under [`MalformedPolicy::Skip`].
    pub skipped: usize,
}

impl WordList {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Reads and validates dictionary word lists.
#[derive(Debug, Clone, Copy)]
pub struct DictionaryLoader {
    alphabet: Alphabet,
    policy: MalformedPolicy,
}

impl DictionaryLoader {
    /// Create a loader validating against `alphabet`, skipping malformed entries.
    pub fn new(alphabet: Alphabet) -> Self {
        DictionaryLoader {
            alphabet,
            policy: MalformedPolicy::default(),
        }
    }

    /// Set the policy for malformed entries.
    pub fn with_policy(mut self, policy: MalformedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Load a dictionary file.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<WordList> {
        let file = File::open(path)?;
        self.load_from_reader(BufReader::new(file))
    }

    /// Load a dictionary from any buffered reader.
    pub fn load_from_reader<R: BufRead>(&self, reader: R) -> Result<WordList> {
        let mut list = WordList::default();
        let mut declared: Option<usize> = None;
        let mut header_seen = false;

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let entry = line.trim();
            if entry.is_empty() {
                continue;
            }

            if !header_seen {
                header_seen = true;
                if let Ok(count) = entry.parse::<usize>() {
                    declared = Some(count);
                    continue;
                }
            }

            if let Some(count) = declared
                && list.words.len() + list.skipped == count
            {
                warn!(
                    "Ignoring dictionary lines from line {} on: header declared {count} words",
                    line_num + 1
                );
                break;
            }

            match self.alphabet.validate(entry) {
                Ok(()) => list.words.push(entry.to_string()),
                Err(e) => match self.policy {
                    MalformedPolicy::Skip => {
                        warn!(
                            "Skipping dictionary entry {entry:?} on line {}: {e}",
                            line_num + 1
                        );
                        list.skipped += 1;
                    }
                    MalformedPolicy::Reject => {
                        return Err(AutocorrectError::dictionary(format!(
                            "line {}: {e}",
                            line_num + 1
                        )));
                    }
                },
            }
        }

        if let Some(count) = declared {
            let found = list.words.len() + list.skipped;
            if found < count {
                return Err(AutocorrectError::dictionary(format!(
                    "expected {count} words, found {found}"
                )));
            }
        }

        Ok(list)
    }
}
