//! Document structure: an identifier plus its analyzed terms.

use serde::{Deserialize, Serialize};

/// A document is one source file after analysis.
///
/// The token sequence is fixed at construction; there are no mutators, so
/// counts derived from it never go stale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    id: String,
    tokens: Vec<String>,
}

impl Document {
    /// Create a document from an identifier and its ordered tokens.
    pub fn new<S: Into<String>>(id: S, tokens: Vec<String>) -> Self {
        Document {
            id: id.into(),
            tokens,
        }
    }

    /// The document identifier (the source file stem).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The ordered token sequence.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the document has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Render the tokens as a derivative: single spaces, trailing newline.
    pub fn to_derivative(&self) -> String {
        let mut out = self.tokens.join(" ");
        out.push('\n');
        out
    }
}
