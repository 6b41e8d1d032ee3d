//! Text analysis module.
//!
//! Turns the plain text extracted from a document into the lowercase terms
//! that get counted: a tokenizer followed by a chain of token filters,
//! wrapped in an analyzer.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
