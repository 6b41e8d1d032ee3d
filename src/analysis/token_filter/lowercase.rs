//! Lowercase filter implementation.
//!
//! Term counting is case-insensitive, so this filter runs in every default
//! pipeline. Non-ASCII text (Greek, accented Latin) goes through Unicode
//! lowercasing; pure ASCII takes the cheaper byte-wise path.
//!
//! # Examples
//!
//! ```
//! use teiweight::analysis::token_filter::Filter;
//! use teiweight::analysis::token_filter::lowercase::LowercaseFilter;
//! use teiweight::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Μῆνιν", 0), Token::new("ACHILLES", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "μῆνιν");
//! assert_eq!(filtered[1].text, "achilles");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Stopped tokens pass through untouched; positions and offsets are kept.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }

    fn lowercase(text: &str) -> String {
        if text.is_ascii() {
            text.to_ascii_lowercase()
        } else {
            text.to_lowercase()
        }
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    token.with_text(Self::lowercase(&token.text))
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::new("Hello", 0),
            Token::new("WORLD", 1),
            Token::new("Test", 2).stop(),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "Test"); // stopped tokens are not processed
        assert!(result[2].is_stopped());
    }

    #[test]
    fn test_unicode_lowercase() {
        let filter = LowercaseFilter::new();
        let tokens = vec![Token::new("Ἀχιλῆος", 0), Token::new("ÆNEAS", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "ἀχιλῆος");
        assert_eq!(result[1].text, "æneas");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
