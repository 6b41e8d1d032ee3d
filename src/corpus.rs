//! Corpus module.
//!
//! - [`term_counts::TermCounts`] - Per-document term multiset
//! - [`corpus::Corpus`] - Documents keyed by identifier, fixed once built
//! - [`loader::CorpusLoader`] - Directory loading and derivative writing

#[allow(clippy::module_inception)]
pub mod corpus;

pub mod loader;
pub mod term_counts;

pub use corpus::Corpus;
pub use loader::CorpusLoader;
pub use term_counts::TermCounts;
