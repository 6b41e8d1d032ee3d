//! Configuration for corpus loading and scoring.
//!
//! Read from a JSON file; every field is optional and falls back to the
//! defaults below. Command line flags override file values.
//!
//! ```json
//! {
//!   "analysis": { "tokenizer": "regex", "pattern": "\\p{L}+", "stop_words": "latin" },
//!   "tei": { "include_header": false, "exclude_elements": ["note", "bibl"] },
//!   "scoring": { "log_base": "ten" }
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::token_filter::token_type::TokenTypeFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::document::tei::TeiOptions;
use crate::error::{Result, TeiWeightError};
use crate::scoring::LogBase;

/// Tokenizer selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Unicode word boundaries
    #[default]
    UnicodeWord,
    /// Regular expression matches (or gaps)
    Regex,
    /// Whitespace split
    Whitespace,
}

/// Built-in stop word lists.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    /// Keep every token
    #[default]
    None,
    /// Common English function words
    English,
    /// Common Latin function words
    Latin,
}

/// Analysis pipeline settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Which tokenizer splits the text.
    pub tokenizer: TokenizerKind,

    /// Pattern for the regex tokenizer.
    pub pattern: Option<String>,

    /// Treat the regex pattern as a separator instead of a token.
    pub gaps: bool,

    /// Lowercase every token.
    pub lowercase: bool,

    /// Built-in stop word list to remove.
    pub stop_words: StopWords,

    /// Additional stop words to remove.
    pub custom_stop_words: Vec<String>,

    /// Drop purely numeric tokens (line and folio numbers).
    pub skip_numbers: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerKind::UnicodeWord,
            pattern: None,
            gaps: false,
            lowercase: true,
            stop_words: StopWords::None,
            custom_stop_words: Vec::new(),
            skip_numbers: false,
        }
    }
}

impl AnalysisConfig {
    fn build_tokenizer(&self) -> Result<Arc<dyn Tokenizer>> {
        Ok(match self.tokenizer {
            TokenizerKind::UnicodeWord => Arc::new(UnicodeWordTokenizer::new()),
            TokenizerKind::Whitespace => Arc::new(WhitespaceTokenizer::new()),
            TokenizerKind::Regex => {
                let pattern = self
                    .pattern
                    .as_deref()
                    .unwrap_or(RegexTokenizer::DEFAULT_PATTERN);
                if self.gaps {
                    Arc::new(RegexTokenizer::with_gaps(pattern)?)
                } else {
                    Arc::new(RegexTokenizer::with_pattern(pattern)?)
                }
            }
        })
    }

    /// Build the analyzer these settings describe.
    pub fn build_analyzer(&self) -> Result<Arc<dyn Analyzer>> {
        let mut analyzer = PipelineAnalyzer::new(self.build_tokenizer()?);

        if self.lowercase {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }

        if self.skip_numbers {
            analyzer = analyzer.add_filter(Arc::new(TokenTypeFilter::numbers()));
        }

        let mut stop_filter = match self.stop_words {
            StopWords::None => None,
            StopWords::English => Some(StopFilter::new()),
            StopWords::Latin => Some(StopFilter::latin()),
        };
        if !self.custom_stop_words.is_empty() {
            let custom = self.custom_stop_words.iter().cloned();
            stop_filter = Some(match stop_filter {
                Some(filter) => filter.with_words(custom),
                None => StopFilter::from_words(custom),
            });
        }
        if let Some(filter) = stop_filter {
            analyzer = analyzer.add_filter(Arc::new(filter));
        }

        debug!("built analyzer {analyzer:?}");
        Ok(Arc::new(analyzer))
    }
}

/// Scoring settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Logarithm base for IDF.
    pub log_base: LogBase,
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeiWeightConfig {
    pub analysis: AnalysisConfig,
    pub tei: TeiOptions,
    pub scoring: ScoringConfig,
}

impl TeiWeightConfig {
    /// Load and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TeiWeightError::config(format!("cannot open {}: {e}", path.display()))
        })?;
        let config: TeiWeightConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check settings that serde cannot.
    pub fn validate(&self) -> Result<()> {
        let analysis = &self.analysis;
        if analysis.tokenizer != TokenizerKind::Regex
            && (analysis.pattern.is_some() || analysis.gaps)
        {
            return Err(TeiWeightError::config(
                "'pattern' and 'gaps' only apply to the regex tokenizer",
            ));
        }
        if let Some(pattern) = &analysis.pattern {
            RegexTokenizer::with_pattern(pattern)
                .map_err(|e| TeiWeightError::config(e.to_string()))?;
        }
        if self.tei.exclude_elements.iter().any(|name| name.is_empty()) {
            return Err(TeiWeightError::config("empty element name in 'exclude_elements'"));
        }
        Ok(())
    }
}
