//! Plain text document converter.
//!
//! Runs the configured analyzer over the whole file content.

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::document::converter::DocumentConverter;
use crate::document::document::Document;
use crate::error::Result;

/// A document converter for plain text files.
#[derive(Clone)]
pub struct TextDocumentConverter {
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TextDocumentConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextDocumentConverter")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl Default for TextDocumentConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDocumentConverter {
    /// Create a converter using the standard analyzer.
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(StandardAnalyzer::new()))
    }

    /// Create a converter with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        TextDocumentConverter { analyzer }
    }

    /// Get the analyzer used by this converter.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }
}

impl DocumentConverter for TextDocumentConverter {
    fn convert(&self, id: &str, content: &str) -> Result<Document> {
        Ok(Document::new(id, self.analyzer.terms(content)?))
    }

    fn name(&self) -> &'static str {
        "text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_converter() {
        let converter = TextDocumentConverter::new();
        let doc = converter
            .convert("gallic-war", "Gallia est omnis divisa in partes tres.")
            .unwrap();

        assert_eq!(doc.id(), "gallic-war");
        assert_eq!(
            doc.tokens(),
            &["gallia", "est", "omnis", "divisa", "in", "partes", "tres"]
        );
    }
}
