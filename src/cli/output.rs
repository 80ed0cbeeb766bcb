//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{AutocorrectArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::engine::{AutocorrectEngine, EngineStats};
use crate::spelling::suggest::SuggestionResult;

/// Result structure for one checked word.
#[derive(Debug, Serialize)]
pub struct QueryResult<'a> {
    pub query: &'a str,
    pub result: &'a SuggestionResult,
}

/// Result structure for index statistics.
#[derive(Debug, Serialize)]
pub struct StatsResult<'a> {
    pub alphabet: &'a str,
    pub short_len: usize,
    #[serde(flatten)]
    pub stats: EngineStats,
}

/// Write the outcome of one query.
pub fn output_suggestions<W: Write>(
    out: &mut W,
    query: &str,
    result: &SuggestionResult,
    args: &AutocorrectArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            writeln!(out, "{}", format_suggestions_human(query, result))?;
            Ok(())
        }
        OutputFormat::Json => output_json(out, &QueryResult { query, result }, args),
    }
}

/// One-line human summary of a query outcome.
pub fn format_suggestions_human(query: &str, result: &SuggestionResult) -> String {
    match result {
        SuggestionResult::ExactMatch => format!("{query}: correct"),
        SuggestionResult::Suggestions(suggestions) if suggestions.is_empty() => {
            format!("{query}: no suggestions")
        }
        SuggestionResult::Suggestions(suggestions) => {
            let words: Vec<String> = suggestions
                .iter()
                .map(|s| format!("{} ({})", s.word, s.distance))
                .collect();
            format!("{query}: {}", words.join(", "))
        }
    }
}

/// Write engine statistics.
pub fn output_stats<W: Write>(
    out: &mut W,
    engine: &AutocorrectEngine,
    args: &AutocorrectArgs,
) -> Result<()> {
    let result = StatsResult {
        alphabet: engine.config().alphabet.name(),
        short_len: engine.config().short_len,
        stats: engine.stats(),
    };

    match args.output_format {
        OutputFormat::Json => output_json(out, &result, args),
        OutputFormat::Human => {
            writeln!(out, "Index Statistics:")?;
            writeln!(out, "════════════════")?;
            writeln!(out, "Words: {}", result.stats.words)?;
            writeln!(
                out,
                "Short words (length <= {}): {}",
                result.short_len, result.stats.short_words
            )?;
            writeln!(
                out,
                "Alphabet: {} (R = {})",
                result.alphabet, result.stats.alphabet_size
            )?;
            writeln!(out, "N-gram length: {}", result.stats.ngram)?;
            writeln!(out, "Buckets: {}", result.stats.buckets)?;
            writeln!(out, "Bucket entries: {}", result.stats.bucket_entries)?;
            Ok(())
        }
    }
}

/// Output in JSON format.
fn output_json<W: Write, T: Serialize>(out: &mut W, result: &T, args: &AutocorrectArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::suggest::Suggestion;
    use clap::Parser;

    fn args(extra: &[&str]) -> AutocorrectArgs {
        let mut argv = vec!["autocorrect"];
        argv.extend_from_slice(extra);
        argv.extend_from_slice(&["stats", "d.txt"]);
        AutocorrectArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_human_suggestions() {
        let result = SuggestionResult::Suggestions(vec![
            Suggestion::new("cat".to_string(), 1),
            Suggestion::new("cats".to_string(), 2),
        ]);
        assert_eq!(
            format_suggestions_human("cxt", &result),
            "cxt: cat (1), cats (2)"
        );
        assert_eq!(
            format_suggestions_human("cat", &SuggestionResult::ExactMatch),
            "cat: correct"
        );
        assert_eq!(
            format_suggestions_human("zzz", &SuggestionResult::Suggestions(Vec::new())),
            "zzz: no suggestions"
        );
    }

    #[test]
    fn test_json_suggestions() {
        let mut out = Vec::new();
        output_suggestions(
            &mut out,
            "cat",
            &SuggestionResult::ExactMatch,
            &args(&["--format", "json"]),
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.trim(),
            r#"{"query":"cat","result":{"kind":"exact_match"}}"#
        );
    }

    #[test]
    fn test_stats_output() {
        let engine = AutocorrectEngine::build(["cat", "cats", "dog"]).unwrap();

        let mut out = Vec::new();
        output_stats(&mut out, &engine, &args(&[])).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Words: 3"));
        assert!(text.contains("Alphabet: standard (R = 27)"));

        let mut out = Vec::new();
        output_stats(&mut out, &engine, &args(&["-f", "json"])).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["words"], 3);
        assert_eq!(value["alphabet"], "standard");
        assert_eq!(value["short_words"], 2);
    }
}
