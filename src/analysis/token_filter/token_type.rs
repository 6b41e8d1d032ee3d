//! Token type filter implementation.
//!
//! Drops tokens by the script classification their tokenizer assigned.
//! Editions interleave line, section and folio numbers with the text;
//! [`TokenTypeFilter::numbers`] keeps them out of the counts.

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes tokens of the given types.
///
/// Tokens without a type pass through.
#[derive(Clone, Debug)]
pub struct TokenTypeFilter {
    removed: Vec<TokenType>,
}

impl TokenTypeFilter {
    /// Remove tokens of any of `types`.
    pub fn removing<I: IntoIterator<Item = TokenType>>(types: I) -> Self {
        TokenTypeFilter {
            removed: types.into_iter().collect(),
        }
    }

    /// Remove purely numeric tokens.
    pub fn numbers() -> Self {
        Self::removing([TokenType::Num])
    }

    fn keeps(&self, token: &Token) -> bool {
        token
            .token_type
            .is_none_or(|token_type| !self.removed.contains(&token_type))
    }
}

impl Filter for TokenTypeFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens.filter(|token| self.keeps(token)).collect();
        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "token_type"
    }
}
