//! N-gram hash index over a fixed dictionary.
//!
//! Each word of length at least `n` is filed under the rolling hash of every
//! `n`-character window it contains. A query that shares a window with a
//! dictionary word therefore finds it by looking up that window's bucket,
//! without scanning the whole dictionary. Words too short to be worth the
//! n-gram path are also kept in a separate short-word list.
//!
//! Buckets are a sparse map keyed by hash, so memory grows with the
//! dictionary rather than with the `R^n` hash space.

use std::time::Instant;

use ahash::AHashMap;
use log::info;

use crate::error::Result;
use crate::spelling::alphabet::Alphabet;
use crate::spelling::config::EngineConfig;

/// Dense identifier of a distinct dictionary word.
pub type WordId = usize;

/// Rolling polynomial hash over the `n`-character windows of a word.
#[derive(Debug, Clone, Copy)]
pub struct WindowHasher {
    ngram: usize,
    radix: u64,
    /// `R^(n-1)`: the weight of the character leaving the window.
    head: u64,
}

impl WindowHasher {
    /// Create a hasher for windows of `ngram` characters in base `radix`.
    ///
    /// The caller guarantees `radix^ngram` fits in a `u64`; see
    /// [`EngineConfig::hash_space`].
    pub fn new(ngram: usize, radix: u64) -> Self {
        let head = (1..ngram).fold(1u64, |acc, _| acc * radix);
        WindowHasher { ngram, radix, head }
    }

    /// Hash of every window, in order. Words shorter than `n` have none.
    ///
    /// The first `n - 1` codes seed the hash; each following code shifts the
    /// oldest digit out and appends itself, yielding `len - n + 1` values.
    pub fn hashes(&self, codes: &[u8]) -> Vec<u64> {
        if self.ngram == 0 || codes.len() < self.ngram {
            return Vec::new();
        }

        let mut hash = codes[..self.ngram - 1]
            .iter()
            .fold(0u64, |acc, &code| acc * self.radix + u64::from(code));

        let mut hashes = Vec::with_capacity(codes.len() - self.ngram + 1);
        for &code in &codes[self.ngram - 1..] {
            // Dropping the leading digit before the shift keeps the value below R^n.
            hash = (hash % self.head) * self.radix + u64::from(code);
            hashes.push(hash);
        }
        hashes
    }
}

/// Build-once, read-only index of the dictionary.
#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    alphabet: Alphabet,
    short_len: usize,
    hasher: WindowHasher,
    /// Distinct words in first-seen order; a word's position is its id.
    words: Vec<String>,
    ids: AHashMap<String, WordId>,
    buckets: AHashMap<u64, Vec<WordId>>,
    short_words: Vec<WordId>,
}

impl DictionaryIndex {
    /// Build the index from a word list.
    ///
    /// Fails on the first word containing a character outside the alphabet;
    /// callers that want to skip such words filter them beforehand (see
    /// [`crate::spelling::dictionary`]). Repeated words are indexed once.
    pub fn build<I, S>(words: I, config: &EngineConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        let start = Instant::now();

        let mut index = DictionaryIndex {
            alphabet: config.alphabet,
            short_len: config.short_len,
            hasher: WindowHasher::new(config.ngram, config.alphabet.radix()),
            words: Vec::new(),
            ids: AHashMap::new(),
            buckets: AHashMap::new(),
            short_words: Vec::new(),
        };

        for word in words {
            index.insert(word.as_ref())?;
        }

        info!(
            "Built n-gram index: {} words, {} buckets, {} short words in {:?}",
            index.words.len(),
            index.buckets.len(),
            index.short_words.len(),
            start.elapsed()
        );

        Ok(index)
    }

    fn insert(&mut self, word: &str) -> Result<()> {
        let codes = self.alphabet.encode_word(word)?;
        if self.ids.contains_key(word) {
            return Ok(());
        }

        let id = self.words.len();
        self.words.push(word.to_string());
        self.ids.insert(word.to_string(), id);

        // A word repeating a window is filed under that hash once per occurrence.
        for hash in self.hasher.hashes(&codes) {
            self.buckets.entry(hash).or_default().push(id);
        }

        if codes.len() <= self.short_len {
            self.short_words.push(id);
        }

        Ok(())
    }

    /// Window hashes of an already-encoded query.
    pub fn window_hashes(&self, codes: &[u8]) -> Vec<u64> {
        self.hasher.hashes(codes)
    }

    /// Words filed under `hash`, in insertion order.
    pub fn bucket(&self, hash: u64) -> &[WordId] {
        self.buckets.get(&hash).map_or(&[], Vec::as_slice)
    }

    /// All words no longer than `short_len`.
    pub fn short_words(&self) -> &[WordId] {
        &self.short_words
    }

    /// The word behind an id.
    pub fn word(&self, id: WordId) -> &str {
        &self.words[id]
    }

    /// Id of a dictionary word, if present.
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.ids.get(word).copied()
    }

    /// Whether `word` is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.ids.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of non-empty buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total entries across all buckets.
    pub fn bucket_entries(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn ngram(&self) -> usize {
        self.hasher.ngram
    }

    pub fn short_len(&self) -> usize {
        self.short_len
    }
}
