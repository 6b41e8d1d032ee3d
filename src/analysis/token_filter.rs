//! Token filter implementations for token transformation.
//!
//! Filters receive the token stream produced by a tokenizer and return a
//! new stream, modifying or removing tokens.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stop::StopFilter`] - Removes stop words
//! - [`token_type::TokenTypeFilter`] - Removes tokens by type (e.g. numbers)
//!
//! # Examples
//!
//! ```
//! use teiweight::analysis::token_filter::Filter;
//! use teiweight::analysis::token_filter::lowercase::LowercaseFilter;
//! use teiweight::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Arma", 0), Token::new("VIRUMQUE", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "arma");
//! assert_eq!(filtered[1].text, "virumque");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod stop;
pub mod token_type;
