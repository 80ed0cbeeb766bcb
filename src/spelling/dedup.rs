//! Candidate deduplication.
//!
//! Candidate pools repeat words freely: a word sharing three windows with the
//! query shows up three times. Because every distinct word has a dense
//! [`WordId`], a bit per dictionary word is an exact membership marker, with
//! no hashing of the words themselves and no collisions to resolve.

use bit_vec::BitVec;

use crate::spelling::index::WordId;

/// Per-query membership marker over the word ids of one dictionary.
#[derive(Debug, Clone)]
pub struct Deduplicator {
    seen: BitVec,
}

impl Deduplicator {
    /// Create a marker for a dictionary of `vocabulary_size` words.
    pub fn new(vocabulary_size: usize) -> Self {
        Deduplicator {
            seen: BitVec::from_elem(vocabulary_size, false),
        }
    }

    /// Mark `id` as seen. Returns `true` the first time an id is offered.
    pub fn insert(&mut self, id: WordId) -> bool {
        if id >= self.seen.len() {
            self.seen.grow(id + 1 - self.seen.len(), false);
        }
        if self.seen[id] {
            return false;
        }
        self.seen.set(id, true);
        true
    }

    /// Whether `id` has already been seen.
    pub fn contains(&self, id: WordId) -> bool {
        self.seen.get(id).unwrap_or(false)
    }

    /// Drop repeated ids, keeping the order of first occurrence.
    pub fn dedupe<I>(&mut self, candidates: I) -> Vec<WordId>
    where
        I: IntoIterator<Item = WordId>,
    {
        candidates.into_iter().filter(|&id| self.insert(id)).collect()
    }
}
