//! Edit distance algorithms used to score suggestions.
//!
//! Two measures are provided: the classic Levenshtein distance and a
//! restricted, substitution-only distance (Hamming distance) for words of
//! equal length. [`DistanceMode`] selects between them per query.

use std::cmp::min;

use serde::{Deserialize, Serialize};

/// Distance reported for pairs the restricted measure cannot compare.
///
/// Larger than any threshold, so such pairs fall out at the threshold check.
pub const NOT_COMPARABLE: usize = usize::MAX;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    // Keep the shorter string along the row
    let (long, short) = if s1_chars.len() >= s2_chars.len() {
        (s1_chars, s2_chars)
    } else {
        (s2_chars, s1_chars)
    };

    if short.is_empty() {
        return long.len();
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &sc) in short.iter().enumerate() {
            curr_row[j + 1] = if lc == sc {
                prev_row[j]
            } else {
                1 + min(
                    min(
                        prev_row[j + 1], // deletion
                        curr_row[j],     // insertion
                    ),
                    prev_row[j], // substitution
                )
            };
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}

/// Calculate Levenshtein distance, giving up once it must exceed `threshold`.
///
/// Returns `None` when the distance is larger than `threshold`.
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    let (long, short) = if s1_chars.len() >= s2_chars.len() {
        (s1_chars, s2_chars)
    } else {
        (s2_chars, s1_chars)
    };

    // Every alignment pays at least the length difference
    if long.len() - short.len() > threshold {
        return None;
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &sc) in short.iter().enumerate() {
            let substitution = prev_row[j] + usize::from(lc != sc);
            curr_row[j + 1] = substitution.min(prev_row[j + 1] + 1).min(curr_row[j] + 1);
        }

        // Row minima never decrease
        if curr_row.iter().min().is_some_and(|&min| min > threshold) {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    Some(prev_row[short.len()]).filter(|&distance| distance <= threshold)
}

/// Count the positions at which two equal-length strings differ.
///
/// Strings of different length are not comparable and yield [`NOT_COMPARABLE`].
pub fn hamming_distance(s1: &str, s2: &str) -> usize {
    let mut chars1 = s1.chars();
    let mut chars2 = s2.chars();
    let mut distance = 0;

    loop {
        match (chars1.next(), chars2.next()) {
            (Some(a), Some(b)) => {
                if a != b {
                    distance += 1;
                }
            }
            (None, None) => return distance,
            _ => return NOT_COMPARABLE,
        }
    }
}

/// Which distance a query is scored with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMode {
    /// Levenshtein distance: insertions, deletions and substitutions.
    Full,
    /// Substitutions only, between words of the same length.
    Restricted,
}

impl DistanceMode {
    /// Distance if it is at most `threshold`, otherwise `None`.
    pub fn distance_within(self, s1: &str, s2: &str, threshold: usize) -> Option<usize> {
        match self {
            DistanceMode::Full => levenshtein_distance_threshold(s1, s2, threshold),
            DistanceMode::Restricted => {
                let distance = hamming_distance(s1, s2);
                (distance != NOT_COMPARABLE && distance <= threshold).then_some(distance)
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DistanceMode::Full => "full",
            DistanceMode::Restricted => "restricted",
        }
    }
}
