//! Textbook TF-IDF over a corpus snapshot.
//!
//! ```text
//! tf(d, t)     = count(t, d) / total_tokens(d)
//! df(t)        = |{ d : count(t, d) > 0 }|
//! idf(t)       = log(n / df(t))
//! tf_idf(d, t) = tf(d, t) * idf(t)
//! ```
//!
//! `idf` is undefined for a term that occurs in no document; the
//! calculator reports [`TeiWeightError::UndefinedIdf`] instead of dividing
//! by zero.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::corpus::{Corpus, TermCounts};
use crate::error::{Result, TeiWeightError};

/// Logarithm base used for IDF.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogBase {
    /// Common logarithm (log10), the textbook formulation
    #[default]
    Ten,
    /// Natural logarithm
    E,
    /// Binary logarithm
    Two,
}

impl LogBase {
    /// Apply the logarithm.
    pub fn log(self, x: f64) -> f64 {
        match self {
            LogBase::Ten => x.log10(),
            LogBase::E => x.ln(),
            LogBase::Two => x.log2(),
        }
    }
}

/// Statistics of one term in one document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentTermStats {
    pub document: String,
    pub count: usize,
    pub total_tokens: usize,
    pub tf: f64,
    /// `None` when the term's IDF is undefined.
    pub tf_idf: Option<f64>,
}

/// Statistics of one term across the corpus.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermReport {
    pub term: String,
    pub document_frequency: usize,
    pub documents_in_corpus: usize,
    /// `None` when the term occurs in no document.
    pub idf: Option<f64>,
    pub documents: Vec<DocumentTermStats>,
}

/// A term with its TF-IDF weight in some document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredTerm {
    pub term: String,
    pub count: usize,
    pub tf: f64,
    pub tf_idf: f64,
}

/// TF-IDF calculator borrowing a corpus.
#[derive(Clone, Copy, Debug)]
pub struct TfIdf<'a> {
    corpus: &'a Corpus,
    log_base: LogBase,
}

impl<'a> TfIdf<'a> {
    /// Create a calculator using log10.
    pub fn new(corpus: &'a Corpus) -> Self {
        TfIdf {
            corpus,
            log_base: LogBase::default(),
        }
    }

    /// Use a different logarithm base.
    pub fn with_log_base(mut self, log_base: LogBase) -> Self {
        self.log_base = log_base;
        self
    }

    /// The corpus being scored.
    pub fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    /// The logarithm base in use.
    pub fn log_base(&self) -> LogBase {
        self.log_base
    }

    fn counts(&self, document: &str) -> Result<&'a TermCounts> {
        self.corpus
            .term_counts(document)
            .ok_or_else(|| TeiWeightError::document_not_found(document))
    }

    fn tf_of(counts: &TermCounts, term: &str) -> f64 {
        match counts.total() {
            0 => 0.0,
            total => counts.count(term) as f64 / total as f64,
        }
    }

    fn idf_of(&self, term: &str, df: usize) -> Result<f64> {
        if df == 0 {
            return Err(TeiWeightError::undefined_idf(term));
        }
        Ok(self.log_base.log(self.corpus.len() as f64 / df as f64))
    }

    /// Relative frequency of `term` in `document`; zero when absent.
    pub fn term_frequency(&self, document: &str, term: &str) -> Result<f64> {
        Ok(Self::tf_of(self.counts(document)?, term))
    }

    /// Number of documents containing `term` at least once.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.corpus
            .iter()
            .filter(|(_, counts)| counts.contains(term))
            .count()
    }

    /// `log(n / df)`; fails with `UndefinedIdf` when df is zero.
    pub fn inverse_document_frequency(&self, term: &str) -> Result<f64> {
        self.idf_of(term, self.document_frequency(term))
    }

    /// `tf * idf` for one document.
    pub fn tf_idf(&self, document: &str, term: &str) -> Result<f64> {
        let tf = self.term_frequency(document, term)?;
        Ok(tf * self.inverse_document_frequency(term)?)
    }

    /// Every statistic of `term`, one row per document.
    ///
    /// Never fails: a term absent from the corpus gets `idf: None` and
    /// `tf_idf: None` on every row.
    pub fn term_report(&self, term: &str) -> TermReport {
        let df = self.document_frequency(term);
        let idf = self.idf_of(term, df).ok();

        let documents = self
            .corpus
            .iter()
            .map(|(document, counts)| {
                let tf = Self::tf_of(counts, term);
                DocumentTermStats {
                    document: document.id().to_string(),
                    count: counts.count(term),
                    total_tokens: counts.total(),
                    tf,
                    tf_idf: idf.map(|idf| tf * idf),
                }
            })
            .collect();

        TermReport {
            term: term.to_string(),
            document_frequency: df,
            documents_in_corpus: self.corpus.len(),
            idf,
            documents,
        }
    }

    /// The `k` highest TF-IDF terms of `document`, ties broken alphabetically.
    pub fn top_terms(&self, document: &str, k: usize) -> Result<Vec<ScoredTerm>> {
        let counts = self.counts(document)?;

        let mut scored = Vec::with_capacity(counts.unique_terms());
        for (term, count) in counts.iter() {
            let tf = Self::tf_of(counts, term);
            let idf = self.inverse_document_frequency(term)?;
            scored.push(ScoredTerm {
                term: term.to_string(),
                count,
                tf,
                tf_idf: tf * idf,
            });
        }

        scored.sort_by(|a, b| {
            b.tf_idf
                .total_cmp(&a.tf_idf)
                .then_with(|| a.term.cmp(&b.term))
        });
        scored.truncate(k);
        Ok(scored)
    }
}
