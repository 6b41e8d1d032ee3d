//! Stop filter implementation.
//!
//! Removes function words before counting. Not part of the default pipeline
//! (the textbook TF-IDF walkthrough counts every token), but useful for
//! `top` listings where function words would otherwise dominate.
//!
//! # Examples
//!
//! ```
//! use teiweight::analysis::token_filter::Filter;
//! use teiweight::analysis::token_filter::stop::StopFilter;
//! use teiweight::analysis::token::Token;
//!
//! let filter = StopFilter::latin();
//! let tokens = vec![
//!     Token::new("arma", 0),
//!     Token::new("et", 1),
//!     Token::new("virum", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[1].text, "virum");
//! ```

use std::collections::HashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

const DEFAULT_LATIN_STOP_WORDS: &[&str] = &[
    "a", "ab", "ac", "ad", "at", "atque", "aut", "autem", "cum", "de", "dum", "e", "enim", "est",
    "et", "etiam", "ex", "haec", "hic", "iam", "in", "inter", "ita", "nam", "ne", "nec", "neque",
    "non", "per", "post", "quam", "que", "qui", "quia", "quid", "quidem", "quod", "sed", "si",
    "sic", "sub", "sunt", "tamen", "tum", "ut", "vel",
];

/// A filter that removes (or marks) stop words.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: HashSet<String>,
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a stop filter with the default English list.
    pub fn new() -> Self {
        Self::from_words(DEFAULT_ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Create a stop filter with the default Latin list.
    pub fn latin() -> Self {
        Self::from_words(DEFAULT_LATIN_STOP_WORDS.iter().copied())
    }

    /// Create a stop filter from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            stop_words: words.into_iter().map(Into::into).collect(),
            remove_stopped: true,
        }
    }

    /// Add more words to the list.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Keep stop words in the stream, marked as stopped, instead of removing them.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check whether a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Whether the stop list is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None
                    } else {
                        Some(token.stop())
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::new();
        let tokens = vec![
            Token::new("the", 0),
            Token::new("wrath", 1),
            Token::new("of", 2),
            Token::new("achilles", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "wrath");
        assert_eq!(result[1].text, "achilles");
    }

    #[test]
    fn test_stop_filter_preserve_stopped() {
        let filter = StopFilter::from_words(vec!["que"]).remove_stopped(false);
        let tokens = vec![Token::new("arma", 0), Token::new("que", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert!(!result[0].is_stopped());
        assert!(result[1].is_stopped());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
        assert!(!StopFilter::latin().is_empty());
    }
}
