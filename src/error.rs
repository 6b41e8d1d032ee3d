//! Error types for the teiweight library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`TeiWeightError`] enum.
//!
//! # Examples
//!
//! ```
//! use teiweight::error::{Result, TeiWeightError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TeiWeightError::analysis("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for teiweight operations.
#[derive(Error, Debug)]
pub enum TeiWeightError {
    /// I/O errors (missing files, unreadable directories, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed XML input
    #[error("XML error: {0}")]
    Xml(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A document identifier that is not part of the corpus
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Two source files mapped to the same document identifier
    #[error("Duplicate document: {0}")]
    DuplicateDocument(String),

    /// IDF requested for a term with a document frequency of zero
    #[error("Undefined IDF: term '{0}' does not occur in any document")]
    UndefinedIdf(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TeiWeightError.
pub type Result<T> = std::result::Result<T, TeiWeightError>;

impl TeiWeightError {
    /// Create a new XML error.
    pub fn xml<S: Into<String>>(msg: S) -> Self {
        TeiWeightError::Xml(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TeiWeightError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TeiWeightError::Config(msg.into())
    }

    /// Create a new document-not-found error.
    pub fn document_not_found<S: Into<String>>(id: S) -> Self {
        TeiWeightError::DocumentNotFound(id.into())
    }

    /// Create a new undefined IDF error.
    pub fn undefined_idf<S: Into<String>>(term: S) -> Self {
        TeiWeightError::UndefinedIdf(term.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TeiWeightError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TeiWeightError::xml("unexpected end of file");
        assert_eq!(error.to_string(), "XML error: unexpected end of file");

        let error = TeiWeightError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = TeiWeightError::undefined_idf("zeus");
        assert_eq!(
            error.to_string(),
            "Undefined IDF: term 'zeus' does not occur in any document"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = TeiWeightError::from(io_error);

        match error {
            TeiWeightError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_other_error_conversions() {
        let error = TeiWeightError::invalid_argument("-k must be at least 1");
        assert_eq!(error.to_string(), "Error: Invalid argument: -k must be at least 1");

        let error = TeiWeightError::from(anyhow::anyhow!("walk failed"));
        assert!(matches!(error, TeiWeightError::Anyhow(_)));

        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(TeiWeightError::from(json_error), TeiWeightError::Json(_)));
    }
}
