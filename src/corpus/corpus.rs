//! The corpus: documents keyed by identifier, with their term counts.

use std::collections::{BTreeMap, BTreeSet};

use crate::corpus::term_counts::TermCounts;
use crate::document::Document;
use crate::error::{Result, TeiWeightError};

#[derive(Clone, Debug)]
struct Entry {
    document: Document,
    counts: TermCounts,
}

/// An immutable collection of documents.
///
/// The number of documents is fixed once the corpus is built. Iteration
/// follows identifier order, so every report comes out in the same order
/// regardless of how the documents were loaded.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    entries: BTreeMap<String, Entry>,
}

impl Corpus {
    /// Build a corpus, counting the terms of every document.
    ///
    /// Fails with [`TeiWeightError::DuplicateDocument`] if two documents
    /// share an identifier.
    pub fn from_documents<I>(documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = Document>,
    {
        let mut entries = BTreeMap::new();
        for document in documents {
            let id = document.id().to_string();
            if entries.contains_key(&id) {
                return Err(TeiWeightError::DuplicateDocument(id));
            }
            let counts = TermCounts::from_tokens(document.tokens());
            entries.insert(id, Entry { document, counts });
        }

        Ok(Corpus { entries })
    }

    /// Number of documents (n).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus has no documents.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a document.
    pub fn document(&self, id: &str) -> Option<&Document> {
        self.entries.get(id).map(|entry| &entry.document)
    }

    /// Look up the term counts of a document.
    pub fn term_counts(&self, id: &str) -> Option<&TermCounts> {
        self.entries.get(id).map(|entry| &entry.counts)
    }

    /// Document identifiers in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Documents in identifier order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.entries.values().map(|entry| &entry.document)
    }

    /// `(document, counts)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&Document, &TermCounts)> {
        self.entries
            .values()
            .map(|entry| (&entry.document, &entry.counts))
    }

    /// Total number of tokens over all documents.
    pub fn total_tokens(&self) -> usize {
        self.entries.values().map(|entry| entry.counts.total()).sum()
    }

    /// The set of distinct terms over all documents.
    pub fn vocabulary(&self) -> BTreeSet<&str> {
        self.entries
            .values()
            .flat_map(|entry| entry.counts.iter().map(|(term, _)| term))
            .collect()
    }

    /// Number of distinct terms over all documents.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, text: &str) -> Document {
        Document::new(id, text.split_whitespace().map(String::from).collect())
    }

    #[test]
    fn test_from_documents() {
        let corpus = Corpus::from_documents(vec![
            doc("odyssey", "andra moi ennepe mousa"),
            doc("iliad", "menin aeide thea"),
        ])
        .unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.ids().collect::<Vec<_>>(), vec!["iliad", "odyssey"]);
        assert_eq!(corpus.total_tokens(), 7);
        assert_eq!(corpus.vocabulary_size(), 7);
        assert_eq!(corpus.term_counts("iliad").unwrap().count("thea"), 1);
        assert_eq!(corpus.document("odyssey").unwrap().len(), 4);
        assert!(corpus.document("aeneid").is_none());
    }

    #[test]
    fn test_shared_vocabulary() {
        let corpus = Corpus::from_documents(vec![
            doc("a", "arma virumque cano"),
            doc("b", "arma cano"),
        ])
        .unwrap();

        assert_eq!(corpus.vocabulary_size(), 3);
    }

    #[test]
    fn test_duplicate_document() {
        let result = Corpus::from_documents(vec![doc("aeneid", "arma"), doc("aeneid", "cano")]);
        assert!(matches!(result, Err(TeiWeightError::DuplicateDocument(id)) if id == "aeneid"));
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::from_documents(Vec::new()).unwrap();
        assert!(corpus.is_empty());
        assert_eq!(corpus.total_tokens(), 0);
    }
}
