//! Command implementations for the autocorrect CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::dictionary::DictionaryLoader;
use crate::spelling::engine::AutocorrectEngine;

/// Words that end the interactive loop.
const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

/// Execute a CLI command.
pub fn execute_command(args: AutocorrectArgs) -> Result<()> {
    match &args.command {
        Command::Suggest(suggest_args) => suggest_words(suggest_args, &args),
        Command::Repl(repl_args) => run_repl(repl_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Load a dictionary file and build an engine over it.
pub fn load_engine(dictionary: &Path, cli_args: &AutocorrectArgs) -> Result<AutocorrectEngine> {
    let config = cli_args.engine_config()?;
    let start_time = Instant::now();

    let list = DictionaryLoader::new(config.alphabet)
        .with_policy(cli_args.engine.on_malformed)
        .load_from_file(dictionary)?;

    if list.skipped > 0 {
        warn!(
            "Skipped {} malformed entries in {}",
            list.skipped,
            dictionary.display()
        );
    }

    let engine = AutocorrectEngine::with_config(list.words, config)?;
    info!(
        "Loaded {} words from {} in {:?}",
        engine.index().len(),
        dictionary.display(),
        start_time.elapsed()
    );

    Ok(engine)
}

/// Prepare a raw token for the engine. The engine itself never normalizes.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Suggest corrections for the words given on the command line.
fn suggest_words(args: &SuggestArgs, cli_args: &AutocorrectArgs) -> Result<()> {
    let engine = load_engine(&args.dictionary, cli_args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for raw in &args.words {
        let query = normalize_query(raw);
        let result = engine.suggest(&query);
        output_suggestions(&mut out, &query, &result, cli_args)?;
    }

    Ok(())
}

/// Read one word per line from standard input until EOF or an exit command.
fn run_repl(args: &ReplArgs, cli_args: &AutocorrectArgs) -> Result<()> {
    let engine = load_engine(&args.dictionary, cli_args)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let interactive = cli_args.output_format == OutputFormat::Human && cli_args.verbosity() > 0;

    if interactive {
        writeln!(
            out,
            "Loaded {} words. Type a word to check it, or 'exit' to quit.",
            engine.index().len()
        )?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let query = normalize_query(&line?);

        if query.is_empty() {
            continue;
        }
        if EXIT_COMMANDS.contains(&query.as_str()) {
            break;
        }

        let result = engine.suggest(&query);
        output_suggestions(&mut out, &query, &result, cli_args)?;
    }

    Ok(())
}

/// Show statistics about the index built from a dictionary.
fn show_stats(args: &StatsArgs, cli_args: &AutocorrectArgs) -> Result<()> {
    let engine = load_engine(&args.dictionary, cli_args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    output_stats(&mut out, &engine, cli_args)
}
