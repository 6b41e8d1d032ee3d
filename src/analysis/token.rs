//! Token types and utilities for text analysis.
//!
//! A [`Token`] is the unit that flows from a tokenizer through the filter
//! chain. Only the surviving token texts end up in a
//! [`Document`](crate::document::Document); positions and offsets are kept
//! for debugging and for filters that need them.
//!
//! # Examples
//!
//! ```
//! use teiweight::analysis::token::Token;
//!
//! let token = Token::with_offsets("arma", 0, 0, 4);
//! assert_eq!(token.text, "arma");
//! assert_eq!(token.end_offset, 4);
//! assert!(!token.is_stopped());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Whether this token has been marked as stopped (removed) by a filter
    pub stopped: bool,

    /// Script classification, if the tokenizer detected one
    pub token_type: Option<TokenType>,
}

/// Token type classification by script.
///
/// Classical corpora mix Latin-script and Greek-script texts, so Greek is
/// recognised separately from other alphabetic text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Latin-script letters and digits
    Alphanum,
    /// Numeric values
    Num,
    /// Greek letters (including polytonic forms)
    Greek,
    /// CJK (Chinese, Japanese, Korean) characters
    Cjk,
    /// Punctuation marks
    Punctuation,
    /// Other/unknown token types
    Other,
}

impl TokenType {
    /// Classify a word by its characters.
    pub fn detect(word: &str) -> TokenType {
        if word.is_empty() {
            return TokenType::Other;
        }

        if word.chars().all(|c| c.is_numeric()) {
            return TokenType::Num;
        }

        if word.chars().any(|c| {
            matches!(c,
                '\u{0370}'..='\u{03FF}' |  // Greek and Coptic
                '\u{1F00}'..='\u{1FFF}'    // Greek Extended
            )
        }) {
            return TokenType::Greek;
        }

        if word.chars().any(|c| {
            matches!(c,
                '\u{4E00}'..='\u{9FFF}' |
                '\u{3400}'..='\u{4DBF}' |
                '\u{20000}'..='\u{2A6DF}'
            )
        }) {
            return TokenType::Cjk;
        }

        if word.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
            return TokenType::Alphanum;
        }

        if word.chars().all(|c| c.is_ascii_punctuation()) {
            return TokenType::Punctuation;
        }

        TokenType::Other
    }
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            stopped: false,
            token_type: None,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
            token_type: None,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = Some(token_type);
        self
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert!(!token.stopped);
        assert!(token.token_type.is_none());
    }

    #[test]
    fn test_token_methods() {
        let token = Token::new("test", 0)
            .stop()
            .with_token_type(TokenType::Alphanum);

        assert!(token.is_stopped());
        assert_eq!(token.token_type, Some(TokenType::Alphanum));

        let renamed = token.with_text("TEST");
        assert_eq!(renamed.text, "TEST");
        assert!(renamed.is_stopped());
    }

    #[test]
    fn test_detect_token_type() {
        assert_eq!(TokenType::detect("virum"), TokenType::Alphanum);
        assert_eq!(TokenType::detect("1984"), TokenType::Num);
        assert_eq!(TokenType::detect("μῆνιν"), TokenType::Greek);
        assert_eq!(TokenType::detect("ἄειδε"), TokenType::Greek);
        assert_eq!(TokenType::detect("..."), TokenType::Punctuation);
        assert_eq!(TokenType::detect(""), TokenType::Other);
    }
}
