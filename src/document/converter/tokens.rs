//! Token derivative converter.
//!
//! Reads files written by
//! [`CorpusLoader::write_derivatives`](crate::corpus::loader::CorpusLoader::write_derivatives):
//! whitespace-separated tokens. Tokens are lowercased again so hand-made
//! derivatives behave like generated ones; other filters are not reapplied.

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::document::converter::DocumentConverter;
use crate::document::document::Document;
use crate::error::Result;

/// A document converter for token derivative files.
#[derive(Clone, Debug)]
pub struct TokenDocumentConverter {
    analyzer: PipelineAnalyzer,
}

impl Default for TokenDocumentConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenDocumentConverter {
    /// Create a new token derivative converter.
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("derivative");

        TokenDocumentConverter { analyzer }
    }
}

impl DocumentConverter for TokenDocumentConverter {
    fn convert(&self, id: &str, content: &str) -> Result<Document> {
        Ok(Document::new(id, self.analyzer.terms(content)?))
    }

    fn name(&self) -> &'static str {
        "tokens"
    }
}
