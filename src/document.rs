//! Document module.
//!
//! # Core Components
//!
//! - [`document::Document`] - An identifier plus its ordered, lowercase tokens
//! - [`tei`] - Plain-text extraction from TEI XML
//! - [`converter`] - Converters from source files (TEI, plain text, token
//!   derivatives) to documents

#[allow(clippy::module_inception)]
pub mod document;

pub mod converter;
pub mod tei;

pub use converter::{DocumentConverter, InputFormat};
pub use document::Document;
