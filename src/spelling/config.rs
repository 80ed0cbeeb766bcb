//! Engine configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AutocorrectError, Result};
use crate::spelling::alphabet::Alphabet;
use crate::util::levenshtein::NOT_COMPARABLE;

/// One step of the length-adaptive threshold policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdTier {
    /// Smallest query length this tier applies to.
    pub min_len: usize,
    /// Maximum admissible edit distance for such queries.
    pub max_distance: usize,
}

impl ThresholdTier {
    /// Create a new tier.
    pub fn new(min_len: usize, max_distance: usize) -> Self {
        ThresholdTier {
            min_len,
            max_distance,
        }
    }
}

/// Maps a query length to the maximum edit distance a suggestion may have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Tiers ordered by strictly increasing `min_len`, the first at length 0.
    pub tiers: Vec<ThresholdTier>,
    /// Fixed threshold for the short-word (substitution-only) path.
    pub short_threshold: usize,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        ThresholdConfig {
            tiers: vec![
                ThresholdTier::new(0, 2),
                ThresholdTier::new(9, 3),
                ThresholdTier::new(13, 4),
            ],
            short_threshold: 1,
        }
    }
}

impl ThresholdConfig {
    /// A policy that allows the same distance for every length.
    pub fn fixed(max_distance: usize) -> Self {
        ThresholdConfig {
            tiers: vec![ThresholdTier::new(0, max_distance)],
            ..Default::default()
        }
    }

    /// Threshold for a query of `len` characters on the n-gram path.
    pub fn for_length(&self, len: usize) -> usize {
        self.tiers
            .iter()
            .take_while(|tier| tier.min_len <= len)
            .last()
            .map_or(0, |tier| tier.max_distance)
    }

    /// Largest threshold any query can resolve to.
    pub fn max_threshold(&self) -> usize {
        self.tiers
            .iter()
            .map(|tier| tier.max_distance)
            .max()
            .unwrap_or(0)
            .max(self.short_threshold)
    }

    /// Check that the tiers cover every length exactly once.
    pub fn validate(&self) -> Result<()> {
        let first = self
            .tiers
            .first()
            .ok_or_else(|| AutocorrectError::configuration("threshold tiers must not be empty"))?;

        if first.min_len != 0 {
            return Err(AutocorrectError::configuration(format!(
                "first threshold tier must start at length 0, not {}",
                first.min_len
            )));
        }

        for pair in self.tiers.windows(2) {
            if pair[1].min_len <= pair[0].min_len {
                return Err(AutocorrectError::configuration(format!(
                    "threshold tiers must have increasing lengths ({} after {})",
                    pair[1].min_len, pair[0].min_len
                )));
            }
        }

        if self.max_threshold() >= NOT_COMPARABLE {
            return Err(AutocorrectError::configuration(format!(
                "thresholds must be below {NOT_COMPARABLE}"
            )));
        }

        Ok(())
    }
}

/// Configuration for [`AutocorrectEngine`](crate::spelling::engine::AutocorrectEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Characters words may contain.
    pub alphabet: Alphabet,
    /// Window length `n` of the rolling hash.
    pub ngram: usize,
    /// Queries up to this length take the short-word path.
    pub short_len: usize,
    /// Length-adaptive threshold policy.
    pub thresholds: ThresholdConfig,
    /// Alphabetize each same-distance group of suggestions.
    pub sort_groups: bool,
    /// Truncate the final suggestion list.
    pub max_suggestions: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            alphabet: Alphabet::Standard,
            ngram: 2,
            short_len: 3,
            thresholds: ThresholdConfig::default(),
            sort_groups: false,
            max_suggestions: None,
        }
    }
}

impl EngineConfig {
    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Size of the hash space, `R^n`.
    pub fn hash_space(&self) -> Result<u64> {
        let exponent = u32::try_from(self.ngram).map_err(|_| {
            AutocorrectError::configuration(format!("ngram length {} is too large", self.ngram))
        })?;

        self.alphabet.radix().checked_pow(exponent).ok_or_else(|| {
            AutocorrectError::configuration(format!(
                "ngram length {} overflows the hash space for radix {}",
                self.ngram,
                self.alphabet.radix()
            ))
        })
    }

    /// Reject configurations that cannot build an index.
    pub fn validate(&self) -> Result<()> {
        if self.ngram == 0 {
            return Err(AutocorrectError::configuration(
                "ngram length must be at least 1",
            ));
        }
        self.hash_space()?;
        self.thresholds.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let thresholds = ThresholdConfig::default();

        assert_eq!(thresholds.for_length(0), 2);
        assert_eq!(thresholds.for_length(4), 2);
        assert_eq!(thresholds.for_length(8), 2);
        assert_eq!(thresholds.for_length(9), 3);
        assert_eq!(thresholds.for_length(12), 3);
        assert_eq!(thresholds.for_length(13), 4);
        assert_eq!(thresholds.for_length(40), 4);
        assert_eq!(thresholds.short_threshold, 1);
        assert_eq!(thresholds.max_threshold(), 4);
    }

    #[test]
    fn test_fixed_thresholds() {
        let thresholds = ThresholdConfig::fixed(3);
        assert_eq!(thresholds.for_length(1), 3);
        assert_eq!(thresholds.for_length(100), 3);
        assert!(thresholds.validate().is_ok());
    }

    #[test]
    fn test_threshold_validation() {
        let empty = ThresholdConfig {
            tiers: vec![],
            short_threshold: 1,
        };
        assert!(empty.validate().is_err());

        let gap = ThresholdConfig {
            tiers: vec![ThresholdTier::new(4, 2)],
            short_threshold: 1,
        };
        assert!(gap.validate().is_err());

        let unordered = ThresholdConfig {
            tiers: vec![ThresholdTier::new(0, 2), ThresholdTier::new(0, 3)],
            short_threshold: 1,
        };
        assert!(unordered.validate().is_err());

        let unbounded_short = ThresholdConfig {
            short_threshold: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(
            unbounded_short.validate(),
            Err(AutocorrectError::Configuration(_))
        ));
        assert!(ThresholdConfig::fixed(usize::MAX).validate().is_err());
        assert!(ThresholdConfig::fixed(usize::MAX - 1).validate().is_ok());
    }

    #[test]
    fn test_unbounded_short_threshold_in_file_is_rejected() {
        let err = serde_json::from_str::<EngineConfig>(
            r#"{ "thresholds": { "short_threshold": 18446744073709551615 } }"#,
        )
        .map_err(AutocorrectError::from)
        .and_then(|config| config.validate())
        .unwrap_err();
        assert!(matches!(err, AutocorrectError::Configuration(_)));
    }

    #[test]
    fn test_engine_config_validation() {
        assert!(EngineConfig::default().validate().is_ok());

        let config = EngineConfig {
            ngram: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AutocorrectError::Configuration(_))
        ));

        let config = EngineConfig {
            ngram: 20,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_hash_space() {
        let config = EngineConfig::default();
        assert_eq!(config.hash_space().unwrap(), 27 * 27);

        let config = EngineConfig {
            alphabet: Alphabet::Extended,
            ngram: 4,
            ..Default::default()
        };
        assert_eq!(config.hash_space().unwrap(), 28u64.pow(4));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "ngram": 3, "sort_groups": true }"#).unwrap();

        assert_eq!(config.ngram, 3);
        assert!(config.sort_groups);
        assert_eq!(config.short_len, 3);
        assert_eq!(config.alphabet, Alphabet::Standard);
        assert_eq!(config.thresholds, ThresholdConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "alphabet": "extended", "thresholds": {{ "tiers": [{{ "min_len": 0, "max_distance": 1 }}] }} }}"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = EngineConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.alphabet, Alphabet::Extended);
        assert_eq!(config.thresholds.for_length(20), 1);
        assert_eq!(config.thresholds.short_threshold, 1);
    }
}
