//! Document converters for creating documents from source files.
//!
//! A [`DocumentConverter`] turns the content of one file into a
//! [`Document`]. Which converter handles a file is decided by
//! [`InputFormat`], usually from the file extension.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::document::document::Document;
use crate::error::Result;

pub mod tei;
pub mod text;
pub mod tokens;

/// A trait for converting file content into a Document.
///
/// # Example
///
/// ```
/// use teiweight::document::converter::DocumentConverter;
/// use teiweight::document::converter::tokens::TokenDocumentConverter;
///
/// let converter = TokenDocumentConverter::new();
/// let doc = converter.convert("aeneid", "arma virumque cano\n").unwrap();
/// assert_eq!(doc.len(), 3);
/// ```
pub trait DocumentConverter: Send + Sync {
    /// Convert file content into a document with the given identifier.
    fn convert(&self, id: &str, content: &str) -> Result<Document>;

    /// Get the name of this converter (for logging).
    fn name(&self) -> &'static str;
}

/// Source format of the files in an input directory.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Pick per file from the extension
    #[default]
    Auto,
    /// TEI XML (`.xml`)
    Tei,
    /// Plain extracted text (`.txt`)
    Text,
    /// Lowercase token derivatives (`.tok`)
    Tokens,
}

impl InputFormat {
    /// Extension used for token derivatives.
    pub const TOKENS_EXTENSION: &'static str = "tok";

    /// Extension used for plain text extracts.
    pub const TEXT_EXTENSION: &'static str = "txt";

    /// Resolve the format of a single file. Returns `None` for files this
    /// format does not read.
    pub fn resolve(self, path: &Path) -> Option<InputFormat> {
        let detected = match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "xml" => InputFormat::Tei,
            Self::TEXT_EXTENSION => InputFormat::Text,
            Self::TOKENS_EXTENSION => InputFormat::Tokens,
            _ => return None,
        };

        match self {
            InputFormat::Auto => Some(detected),
            explicit if explicit == detected => Some(detected),
            _ => None,
        }
    }
}
