//! The autocorrect engine.
//!
//! Ties the pipeline together: a query is encoded, checked against the
//! vocabulary, turned into a candidate pool, deduplicated, scored and
//! assembled into a [`SuggestionResult`].
//!
//! The engine holds no per-query state. Everything a query needs beyond the
//! read-only index is allocated inside [`AutocorrectEngine::suggest`], so a
//! built engine can be shared between threads behind a plain reference.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::candidates::CandidateGenerator;
use crate::spelling::config::EngineConfig;
use crate::spelling::dedup::Deduplicator;
use crate::spelling::index::DictionaryIndex;
use crate::spelling::suggest::{SuggestionAssembler, SuggestionResult};

/// Suggests dictionary words close to a possibly misspelled query.
#[derive(Debug, Clone)]
pub struct AutocorrectEngine {
    index: DictionaryIndex,
    config: EngineConfig,
    assembler: SuggestionAssembler,
}

impl AutocorrectEngine {
    /// Build an engine over `words` with the default configuration.
    pub fn build<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(words, EngineConfig::default())
    }

    /// Build an engine over `words` with a custom configuration.
    ///
    /// Fails with a configuration error for unusable settings, or with an
    /// invalid character error for a word outside the alphabet.
    pub fn with_config<I, S>(words: I, config: EngineConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = DictionaryIndex::build(words, &config)?;
        let assembler = SuggestionAssembler::new(config.sort_groups, config.max_suggestions);

        Ok(AutocorrectEngine {
            index,
            config,
            assembler,
        })
    }

    /// Suggest words for `query`.
    ///
    /// A query containing characters outside the alphabet yields no
    /// suggestions; use [`try_suggest`](Self::try_suggest) to see why.
    pub fn suggest(&self, query: &str) -> SuggestionResult {
        self.try_suggest(query).unwrap_or_else(|e| {
            debug!("Rejected query {query:?}: {e}");
            SuggestionResult::Suggestions(Vec::new())
        })
    }

    /// Suggest words for `query`, failing on characters outside the alphabet.
    pub fn try_suggest(&self, query: &str) -> Result<SuggestionResult> {
        let codes = self.config.alphabet.encode_word(query)?;

        if self.index.contains(query) {
            debug!("Query {query:?} is a dictionary word");
            return Ok(SuggestionResult::ExactMatch);
        }

        let generator = CandidateGenerator::new(&self.index, &self.config.thresholds);
        let pool = generator.generate(&codes);

        let mut dedup = Deduplicator::new(self.index.len());
        let unique = dedup.dedupe(pool.candidates.iter().copied());

        debug!(
            "Query {query:?}: {} mode, threshold {}, {} candidates ({} unique)",
            pool.mode.name(),
            pool.threshold,
            pool.len(),
            unique.len()
        );

        Ok(self.assembler.assemble(
            query,
            unique.iter().map(|&id| self.index.word(id)),
            pool.threshold,
            pool.mode,
        ))
    }

    /// Check if a word is in the dictionary.
    pub fn is_correct(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// The underlying index.
    pub fn index(&self) -> &DictionaryIndex {
        &self.index
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get statistics about the engine.
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            words: self.index.len(),
            short_words: self.index.short_words().len(),
            buckets: self.index.bucket_count(),
            bucket_entries: self.index.bucket_entries(),
            ngram: self.index.ngram(),
            alphabet_size: self.config.alphabet.radix(),
        }
    }
}

/// Statistics about a built engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Number of distinct dictionary words.
    pub words: usize,
    /// Words eligible for the short-word path.
    pub short_words: usize,
    /// Non-empty n-gram buckets.
    pub buckets: usize,
    /// Word entries across all buckets.
    pub bucket_entries: usize,
    /// Window length.
    pub ngram: usize,
    /// Alphabet radix.
    pub alphabet_size: u64,
}
