//! # teiweight
//!
//! TF-IDF term weighting over corpora of TEI-encoded texts.
//!
//! ## Features
//!
//! - Plain-text extraction from TEI XML, header and notes optional
//! - Configurable analysis pipeline (tokenizer plus token filters)
//! - Parallel corpus loading with deterministic results
//! - Textbook TF, DF, IDF and TF-IDF with a guarded undefined IDF
//!
//! ```no_run
//! use teiweight::prelude::*;
//!
//! let corpus = CorpusLoader::default().load_dir("corpus")?;
//! let report = TfIdf::new(&corpus).term_report("arma");
//! println!("{} documents contain 'arma'", report.document_frequency);
//! # Ok::<(), TeiWeightError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod scoring;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer};
    pub use crate::config::TeiWeightConfig;
    pub use crate::corpus::{Corpus, CorpusLoader, TermCounts};
    pub use crate::document::tei::TeiOptions;
    pub use crate::document::{Document, DocumentConverter, InputFormat};
    pub use crate::error::{Result, TeiWeightError};
    pub use crate::scoring::{LogBase, TermReport, TfIdf};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
