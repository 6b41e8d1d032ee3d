//! Command line argument parsing for the teiweight CLI using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{StopWords, TeiWeightConfig};
use crate::document::InputFormat;
use crate::scoring::LogBase;

/// teiweight - TF-IDF term weighting over TEI-encoded corpora
#[derive(Parser, Debug, Clone)]
#[command(name = "teiweight")]
#[command(about = "TF-IDF term weighting over TEI-encoded corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TeiWeightArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "TEIWEIGHT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TeiWeightArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write the plain text of each TEI file
    Extract(ExtractArgs),

    /// Write lowercase token derivatives of a corpus
    Tokenize(TokenizeArgs),

    /// Show corpus statistics
    Stats(StatsArgs),

    /// Report TF, IDF and TF-IDF of terms
    Score(ScoreArgs),

    /// Show the highest weighted terms of each document
    Top(TopArgs),
}

/// Options shared by every command that reads a corpus
#[derive(Args, Debug, Clone, Default)]
pub struct CorpusOptions {
    /// Which files to read
    #[arg(long, value_name = "FORMAT", default_value = "auto")]
    pub input_format: InputFormat,

    /// Stop word list to remove (overrides the configuration file)
    #[arg(long, value_name = "LIST")]
    pub stop_words: Option<StopWords>,

    /// Drop purely numeric tokens
    #[arg(long)]
    pub skip_numbers: bool,

    /// Extract the TEI header as well as the text
    #[arg(long)]
    pub include_header: bool,

    /// Skip a TEI element and everything inside it (repeatable)
    #[arg(long = "exclude", value_name = "ELEMENT")]
    pub exclude: Vec<String>,
}

impl CorpusOptions {
    /// Apply these flags on top of a loaded configuration.
    pub fn apply(&self, config: &mut TeiWeightConfig) {
        if let Some(stop_words) = self.stop_words {
            config.analysis.stop_words = stop_words;
        }
        if self.skip_numbers {
            config.analysis.skip_numbers = true;
        }
        if self.include_header {
            config.tei.include_header = true;
        }
        for element in &self.exclude {
            if !config.tei.exclude_elements.contains(element) {
                config.tei.exclude_elements.push(element.clone());
            }
        }
    }
}

/// Arguments for extracting plain text
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// Directory of TEI files
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory to write `<id>.txt` files to
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Extract the TEI header as well as the text
    #[arg(long)]
    pub include_header: bool,

    /// Skip a TEI element and everything inside it (repeatable)
    #[arg(long = "exclude", value_name = "ELEMENT")]
    pub exclude: Vec<String>,
}

/// Arguments for writing token derivatives
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Corpus directory
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory to write `<id>.tok` files to
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub corpus: CorpusOptions,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Corpus directory
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    #[command(flatten)]
    pub corpus: CorpusOptions,
}

/// Arguments for scoring terms
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    /// Corpus directory
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Terms to score
    #[arg(value_name = "TERM", required = true)]
    pub terms: Vec<String>,

    /// Logarithm base for IDF (overrides the configuration file)
    #[arg(long, value_name = "BASE")]
    pub log_base: Option<LogBase>,

    #[command(flatten)]
    pub corpus: CorpusOptions,
}

/// Arguments for listing top terms
#[derive(Parser, Debug, Clone)]
pub struct TopArgs {
    /// Corpus directory
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Number of terms per document
    #[arg(short = 'k', long, default_value = "10")]
    pub limit: usize,

    /// Logarithm base for IDF (overrides the configuration file)
    #[arg(long, value_name = "BASE")]
    pub log_base: Option<LogBase>,

    #[command(flatten)]
    pub corpus: CorpusOptions,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
