//! TEI XML document converter.
//!
//! Extracts the plain text with [`extract_text`] and runs the analyzer over it.

use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::document::converter::DocumentConverter;
use crate::document::document::Document;
use crate::document::tei::{TeiOptions, extract_text};
use crate::error::{Result, TeiWeightError};

/// A document converter for TEI XML files.
#[derive(Clone)]
pub struct TeiDocumentConverter {
    analyzer: Arc<dyn Analyzer>,
    options: TeiOptions,
}

impl std::fmt::Debug for TeiDocumentConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeiDocumentConverter")
            .field("analyzer", &self.analyzer.name())
            .field("options", &self.options)
            .finish()
    }
}

impl Default for TeiDocumentConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl TeiDocumentConverter {
    /// Create a TEI converter with the standard analyzer and default options.
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(StandardAnalyzer::new()))
    }

    /// Create a TEI converter with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        TeiDocumentConverter {
            analyzer,
            options: TeiOptions::default(),
        }
    }

    /// Set the extraction options.
    pub fn with_options(mut self, options: TeiOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the extraction options.
    pub fn options(&self) -> &TeiOptions {
        &self.options
    }

    /// Extract the plain text without analyzing it.
    pub fn extract(&self, id: &str, content: &str) -> Result<String> {
        extract_text(content, &self.options).map_err(|e| match e {
            TeiWeightError::Xml(msg) => TeiWeightError::xml(format!("{id}: {msg}")),
            other => other,
        })
    }
}

impl DocumentConverter for TeiDocumentConverter {
    fn convert(&self, id: &str, content: &str) -> Result<Document> {
        let text = self.extract(id, content)?;
        debug!("{id}: extracted {} bytes of text", text.len());
        Ok(Document::new(id, self.analyzer.terms(&text)?))
    }

    fn name(&self) -> &'static str {
        "tei"
    }
}
