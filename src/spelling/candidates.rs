//! Candidate generation.
//!
//! Picks the dictionary words worth scoring for a query, together with the
//! distance mode and threshold they are scored with. Short queries are
//! compared against every short word by substitutions only; longer queries
//! collect the buckets of their n-gram windows and use the full edit
//! distance with a length-dependent threshold.

use crate::spelling::config::ThresholdConfig;
use crate::spelling::index::{DictionaryIndex, WordId};
use crate::util::levenshtein::DistanceMode;

/// Words to score for one query, with the rules to score them by.
///
/// The pool may repeat words and is in no particular order beyond bucket
/// order; see [`Deduplicator`](crate::spelling::dedup::Deduplicator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    pub candidates: Vec<WordId>,
    pub threshold: usize,
    pub mode: DistanceMode,
}

impl CandidatePool {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Selects candidate pools from a [`DictionaryIndex`].
#[derive(Debug, Clone, Copy)]
pub struct CandidateGenerator<'a> {
    index: &'a DictionaryIndex,
    thresholds: &'a ThresholdConfig,
}

impl<'a> CandidateGenerator<'a> {
    pub fn new(index: &'a DictionaryIndex, thresholds: &'a ThresholdConfig) -> Self {
        CandidateGenerator { index, thresholds }
    }

    /// Build the pool for a query already encoded with the index's alphabet.
    ///
    /// A query longer than `short_len` but shorter than `n` has no windows
    /// and gets an empty pool.
    pub fn generate(&self, codes: &[u8]) -> CandidatePool {
        if codes.len() <= self.index.short_len() {
            return CandidatePool {
                candidates: self.index.short_words().to_vec(),
                threshold: self.thresholds.short_threshold,
                mode: DistanceMode::Restricted,
            };
        }

        let candidates = self
            .index
            .window_hashes(codes)
            .into_iter()
            .flat_map(|hash| self.index.bucket(hash).iter().copied())
            .collect();

        CandidatePool {
            candidates,
            threshold: self.thresholds.for_length(codes.len()),
            mode: DistanceMode::Full,
        }
    }
}
