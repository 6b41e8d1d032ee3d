//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::{Result, TeiWeightError};

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// By default every match of the pattern is a token. In gap mode the
/// pattern describes separators and the text between matches becomes the
/// tokens.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Arc<Regex>,
    gaps: bool,
}

impl RegexTokenizer {
    /// Default pattern: runs of word characters.
    pub const DEFAULT_PATTERN: &'static str = r"\w+";

    /// Create a new regex tokenizer with the default pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(Self::DEFAULT_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Arc::new(Self::compile(pattern)?),
            gaps: false,
        })
    }

    /// Create a tokenizer that extracts gaps (text between matches) instead of matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Arc::new(Self::compile(pattern)?),
            gaps: true,
        })
    }

    fn compile(pattern: &str) -> Result<Regex> {
        Regex::new(pattern)
            .map_err(|e| TeiWeightError::analysis(format!("Invalid regex pattern: {e}")))
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer extracts gaps.
    pub fn gaps(&self) -> bool {
        self.gaps
    }

    fn make_token(text: &str, position: usize, start: usize, end: usize) -> Token {
        let word = &text[start..end];
        Token::with_offsets(word, position, start, end).with_token_type(TokenType::detect(word))
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = if self.gaps {
            let mut spans = Vec::new();
            let mut last_end = 0;

            for mat in self.pattern.find_iter(text) {
                if mat.start() > last_end {
                    spans.push((last_end, mat.start()));
                }
                last_end = mat.end();
            }
            if last_end < text.len() {
                spans.push((last_end, text.len()));
            }

            spans
                .into_iter()
                .enumerate()
                .map(|(position, (start, end))| Self::make_token(text, position, start, end))
                .collect()
        } else {
            self.pattern
                .find_iter(text)
                .filter(|mat| !mat.is_empty())
                .enumerate()
                .map(|(position, mat)| Self::make_token(text, position, mat.start(), mat.end()))
                .collect()
        };

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
