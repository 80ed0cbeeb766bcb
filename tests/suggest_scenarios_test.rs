use autocorrect::error::{AutocorrectError, Result};
use autocorrect::spelling::{
    Alphabet, AutocorrectEngine, EngineConfig, SuggestionResult, ThresholdConfig,
};

const SAMPLE: [&str; 4] = ["cat", "cats", "cot", "dog"];

fn engine_with(words: &[&str], config: EngineConfig) -> Result<AutocorrectEngine> {
    AutocorrectEngine::with_config(words.iter().copied(), config)
}

fn distances(result: &SuggestionResult) -> Vec<usize> {
    result.suggestions().iter().map(|s| s.distance).collect()
}

#[test]
fn short_query_is_matched_by_substitution_only() -> Result<()> {
    let engine = AutocorrectEngine::build(SAMPLE)?;

    let result = engine.suggest("cxt");
    assert_eq!(result.words(), vec!["cat", "cot"]);
    assert_eq!(distances(&result), vec![1, 1]);

    // "cats" is one insertion away but the short path never compares lengths
    let result = engine.suggest("cas");
    assert_eq!(result.words(), vec!["cat"]);
    Ok(())
}

#[test]
fn short_query_excludes_words_two_substitutions_away() -> Result<()> {
    let engine = AutocorrectEngine::build(["cat", "car", "cut", "dig"])?;

    let result = engine.suggest("cax");
    assert_eq!(result.words(), vec!["cat", "car"]);
    Ok(())
}

#[test]
fn long_query_groups_suggestions_by_distance() -> Result<()> {
    let config = EngineConfig {
        short_len: 2,
        ..Default::default()
    };
    let engine = engine_with(&SAMPLE, config)?;

    let result = engine.suggest("coats");
    assert_eq!(result.words(), vec!["cats", "cot", "cat"]);
    assert_eq!(distances(&result), vec![1, 2, 2]);
    Ok(())
}

#[test]
fn sort_groups_alphabetizes_each_distance_group() -> Result<()> {
    let config = EngineConfig {
        short_len: 2,
        sort_groups: true,
        ..Default::default()
    };
    let engine = engine_with(&SAMPLE, config)?;

    assert_eq!(engine.suggest("coats").words(), vec!["cats", "cat", "cot"]);
    Ok(())
}

#[test]
fn max_suggestions_truncates_after_ordering() -> Result<()> {
    let config = EngineConfig {
        short_len: 2,
        max_suggestions: Some(2),
        ..Default::default()
    };
    let engine = engine_with(&SAMPLE, config)?;

    assert_eq!(engine.suggest("coats").words(), vec!["cats", "cot"]);
    Ok(())
}

#[test]
fn dictionary_words_are_exact_matches() -> Result<()> {
    let config = EngineConfig {
        short_len: 2,
        ..Default::default()
    };
    let engine = engine_with(&SAMPLE, config)?;

    for word in SAMPLE {
        assert_eq!(engine.suggest(word), SuggestionResult::ExactMatch);
    }
    Ok(())
}

#[test]
fn query_shorter_than_window_yields_no_suggestions() -> Result<()> {
    let config = EngineConfig {
        ngram: 4,
        short_len: 2,
        ..Default::default()
    };
    let engine = engine_with(&["cats", "coat", "scat"], config)?;

    let result = engine.try_suggest("cat")?;
    assert_eq!(result, SuggestionResult::Suggestions(Vec::new()));
    Ok(())
}

#[test]
fn query_of_short_len_takes_short_path_with_wide_windows() -> Result<()> {
    let config = EngineConfig {
        ngram: 4,
        short_len: 3,
        ..Default::default()
    };
    let engine = engine_with(&["cat", "cot", "cats"], config)?;

    assert_eq!(engine.suggest("cut").words(), vec!["cat", "cot"]);
    Ok(())
}

#[test]
fn query_of_window_length_uses_buckets() -> Result<()> {
    let config = EngineConfig {
        ngram: 4,
        short_len: 3,
        ..Default::default()
    };
    let engine = engine_with(&["cats", "coat", "boats"], config)?;

    let result = engine.suggest("coats");
    assert_eq!(result.words(), vec!["coat", "boats"]);
    assert_eq!(distances(&result), vec![1, 1]);

    // a single window shared with nothing
    assert!(engine.suggest("cass").is_empty());
    Ok(())
}

#[test]
fn repeated_windows_never_repeat_suggestions() -> Result<()> {
    let config = EngineConfig {
        short_len: 2,
        ..Default::default()
    };
    let engine = engine_with(&["banana", "bandana", "cabana"], config)?;

    let result = engine.suggest("bananas");
    let mut words = result.words();
    assert_eq!(words[0], "banana");
    assert_eq!(result.suggestions()[0].distance, 1);
    assert!(result.suggestions().iter().all(|s| s.distance <= 2));

    let total = words.len();
    words.sort_unstable();
    words.dedup();
    assert_eq!(words.len(), total);
    Ok(())
}

#[test]
fn short_path_excludes_unequal_lengths_at_any_threshold() -> Result<()> {
    let config = EngineConfig {
        thresholds: ThresholdConfig {
            short_threshold: usize::MAX - 1,
            ..Default::default()
        },
        ..Default::default()
    };
    let engine = engine_with(&["cat", "ca"], config)?;

    let result = engine.suggest("cax");
    assert_eq!(result.words(), vec!["cat"]);
    assert_eq!(distances(&result), vec![1]);
    Ok(())
}

#[test]
fn short_threshold_equal_to_sentinel_is_rejected() {
    let config: EngineConfig =
        serde_json::from_str(r#"{ "thresholds": { "short_threshold": 18446744073709551615 } }"#)
            .unwrap();

    let result = AutocorrectEngine::with_config(["cat", "ca"], config);
    assert!(matches!(result, Err(AutocorrectError::Configuration(_))));
}

#[test]
fn extended_alphabet_indexes_hyphenated_words() -> Result<()> {
    let config = EngineConfig {
        alphabet: Alphabet::Extended,
        ..Default::default()
    };
    let engine = engine_with(&["well-known", "well-done", "known"], config)?;

    let result = engine.suggest("wel-known");
    assert_eq!(result.words()[0], "well-known");
    assert!(engine.suggest("well-known").is_exact_match());
    Ok(())
}

#[test]
fn standard_alphabet_rejects_hyphenated_dictionary() {
    let result = AutocorrectEngine::build(["well-known"]);
    assert!(matches!(
        result,
        Err(AutocorrectError::InvalidCharacter { ch: '-', position: 4 })
    ));
}

#[test]
fn invalid_query_is_reported_or_ignored() -> Result<()> {
    let engine = AutocorrectEngine::build(SAMPLE)?;

    assert!(engine.suggest("Cat").is_empty());
    assert!(engine.suggest("c4t").is_empty());

    let err = engine.try_suggest("c4t").unwrap_err();
    assert!(err.is_invalid_input());
    Ok(())
}

#[test]
fn empty_inputs_produce_empty_results() -> Result<()> {
    let engine = AutocorrectEngine::build(Vec::<String>::new())?;
    assert!(engine.suggest("anything").is_empty());
    assert!(engine.index().is_empty());

    let engine = AutocorrectEngine::build(SAMPLE)?;
    assert!(engine.suggest("").is_empty());
    Ok(())
}

#[test]
fn engine_answers_queries_from_many_threads() -> Result<()> {
    let config = EngineConfig {
        short_len: 2,
        ..Default::default()
    };
    let engine = engine_with(&SAMPLE, config)?;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.suggest("coats").words().join(",")))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "cats,cot,cat");
        }
    });
    Ok(())
}
