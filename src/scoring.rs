//! Term weighting.

pub mod tfidf;

pub use tfidf::{DocumentTermStats, LogBase, ScoredTerm, TermReport, TfIdf};
