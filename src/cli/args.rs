//! Command line argument parsing for the autocorrect CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::alphabet::Alphabet;
use crate::spelling::config::EngineConfig;
use crate::spelling::dictionary::MalformedPolicy;

/// Autocorrect - suggest dictionary words for misspelled ones
#[derive(Parser, Debug, Clone)]
#[command(name = "autocorrect")]
#[command(about = "Suggest dictionary words similar to a misspelled word")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct AutocorrectArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl AutocorrectArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Resolve the engine configuration: defaults, then the config file,
    /// then individual flags.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load_from_file(path)?,
            None => EngineConfig::default(),
        };
        self.engine.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}

/// Engine settings that override the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Character set of the dictionary
    #[arg(long, global = true)]
    pub alphabet: Option<Alphabet>,

    /// N-gram window length
    #[arg(long, global = true)]
    pub ngram: Option<usize>,

    /// Queries up to this length are matched by substitutions only
    #[arg(long, global = true)]
    pub short_len: Option<usize>,

    /// Alphabetize suggestions at the same distance
    #[arg(long, global = true)]
    pub sort_groups: bool,

    /// Maximum number of suggestions per word
    #[arg(short, long, global = true)]
    pub limit: Option<usize>,

    /// How to treat dictionary entries outside the alphabet
    #[arg(long, global = true, default_value = "skip")]
    pub on_malformed: MalformedPolicy,
}

impl EngineArgs {
    fn apply(&self, config: &mut EngineConfig) {
        if let Some(alphabet) = self.alphabet {
            config.alphabet = alphabet;
        }
        if let Some(ngram) = self.ngram {
            config.ngram = ngram;
        }
        if let Some(short_len) = self.short_len {
            config.short_len = short_len;
        }
        if self.sort_groups {
            config.sort_groups = true;
        }
        if self.limit.is_some() {
            config.max_suggestions = self.limit;
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest corrections for one or more words
    Suggest(SuggestArgs),

    /// Read words from standard input and suggest corrections interactively
    Repl(ReplArgs),

    /// Show dictionary index statistics
    Stats(StatsArgs),
}

/// Arguments for suggesting corrections
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Dictionary file path
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Words to check
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    /// Dictionary file path
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Dictionary file path
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
