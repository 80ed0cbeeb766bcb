//! Suggestion assembly.
//!
//! Scored candidates are grouped by edit distance and the groups are
//! concatenated closest first. Within a group, candidates keep the order they
//! arrived in unless alphabetical ordering is requested.

use serde::{Deserialize, Serialize};

use crate::util::levenshtein::DistanceMode;

/// A suggested dictionary word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the query, under the mode the query was scored with.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, distance: usize) -> Self {
        Suggestion { word, distance }
    }
}

/// Outcome of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "suggestions", rename_all = "snake_case")]
pub enum SuggestionResult {
    /// The query is itself a dictionary word.
    ExactMatch,
    /// Words within the threshold, ordered by ascending distance.
    Suggestions(Vec<Suggestion>),
}

impl SuggestionResult {
    pub fn is_exact_match(&self) -> bool {
        matches!(self, SuggestionResult::ExactMatch)
    }

    /// The suggestions, empty for an exact match.
    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            SuggestionResult::ExactMatch => &[],
            SuggestionResult::Suggestions(suggestions) => suggestions,
        }
    }

    /// Suggested words in order.
    pub fn words(&self) -> Vec<&str> {
        self.suggestions()
            .iter()
            .map(|suggestion| suggestion.word.as_str())
            .collect()
    }

    /// Number of suggestions.
    pub fn len(&self) -> usize {
        self.suggestions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions().is_empty()
    }
}

/// Groups scored candidates by distance and orders the final list.
#[derive(Debug, Clone, Default)]
pub struct SuggestionAssembler {
    sort_groups: bool,
    max_suggestions: Option<usize>,
}

impl SuggestionAssembler {
    /// Create an assembler.
    pub fn new(sort_groups: bool, max_suggestions: Option<usize>) -> Self {
        SuggestionAssembler {
            sort_groups,
            max_suggestions,
        }
    }

    /// Score deduplicated `candidates` against `query` and assemble the result.
    ///
    /// Returns [`SuggestionResult::ExactMatch`] as soon as any candidate is at
    /// distance 0. Candidates beyond `threshold` are discarded.
    pub fn assemble<'w, I>(
        &self,
        query: &str,
        candidates: I,
        threshold: usize,
        mode: DistanceMode,
    ) -> SuggestionResult
    where
        I: IntoIterator<Item = &'w str>,
    {
        // groups[d] holds the candidates at distance d; groups[0] stays empty
        let mut groups: Vec<Vec<&str>> = Vec::new();

        for candidate in candidates {
            match mode.distance_within(candidate, query, threshold) {
                Some(0) => return SuggestionResult::ExactMatch,
                Some(distance) => {
                    if groups.len() <= distance {
                        groups.resize_with(distance + 1, Vec::new);
                    }
                    groups[distance].push(candidate);
                }
                None => {}
            }
        }

        let mut suggestions = Vec::new();
        for (distance, mut group) in groups.into_iter().enumerate().skip(1) {
            if self.sort_groups {
                group.sort_unstable();
            }
            suggestions.extend(
                group
                    .into_iter()
                    .map(|word| Suggestion::new(word.to_string(), distance)),
            );
        }

        if let Some(limit) = self.max_suggestions {
            suggestions.truncate(limit);
        }

        SuggestionResult::Suggestions(suggestions)
    }
}
