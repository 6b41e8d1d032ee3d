//! Output formatting for CLI commands.
//!
//! Every command produces a serializable result. JSON output is the
//! serde representation; human and CSV output come from [`Report`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TeiWeightArgs};
use crate::error::Result;
use crate::scoring::{LogBase, ScoredTerm, TermReport};

/// A command result that can be rendered in every output format.
pub trait Report: Serialize {
    /// Lines of human-readable output.
    fn human_lines(&self) -> Vec<String>;

    /// Column names of the CSV table.
    fn csv_header(&self) -> &'static [&'static str];

    /// Rows of the CSV table.
    fn csv_rows(&self) -> Vec<Vec<String>>;
}

/// Result of writing one file per document.
#[derive(Debug, Serialize, Deserialize)]
pub struct FilesWritten {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Token count of one document.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentStats {
    pub document: String,
    pub tokens: usize,
    pub unique_terms: usize,
}

/// Corpus statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusStats {
    pub documents: usize,
    pub total_tokens: usize,
    pub vocabulary_size: usize,
    pub per_document: Vec<DocumentStats>,
}

/// Reports for the requested terms.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResults {
    pub log_base: LogBase,
    pub terms: Vec<TermReport>,
}

/// Highest weighted terms of one document.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentTopTerms {
    pub document: String,
    pub terms: Vec<ScoredTerm>,
}

/// Highest weighted terms of every document.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopTermsResults {
    pub log_base: LogBase,
    pub documents: Vec<DocumentTopTerms>,
}

impl Report for FilesWritten {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.files.len() + 1);
        lines.push(format!(
            "Wrote {} files to {}",
            self.files.len(),
            self.output_dir.display()
        ));
        lines.extend(self.files.iter().map(|path| format!("  {}", path.display())));
        lines
    }

    fn csv_header(&self) -> &'static [&'static str] {
        &["file"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        self.files
            .iter()
            .map(|path| vec![path.display().to_string()])
            .collect()
    }
}

impl Report for CorpusStats {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "Corpus Statistics:".to_string(),
            "══════════════════".to_string(),
            format!("Documents: {}", self.documents),
            format!("Total tokens: {}", self.total_tokens),
            format!("Vocabulary size: {}", self.vocabulary_size),
        ];

        if !self.per_document.is_empty() {
            lines.push(String::new());
            lines.push("Documents:".to_string());
            lines.push("──────────".to_string());
            for stats in &self.per_document {
                lines.push(format!(
                    "{}: {} tokens, {} unique terms",
                    stats.document, stats.tokens, stats.unique_terms
                ));
            }
        }
        lines
    }

    fn csv_header(&self) -> &'static [&'static str] {
        &["document", "tokens", "unique_terms"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        self.per_document
            .iter()
            .map(|stats| {
                vec![
                    stats.document.clone(),
                    stats.tokens.to_string(),
                    stats.unique_terms.to_string(),
                ]
            })
            .collect()
    }
}

impl Report for ScoreResults {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (i, report) in self.terms.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.push(format!("Term: {}", report.term));
            lines.push("─".repeat(6 + report.term.chars().count()));
            lines.push(format!(
                "Document frequency: {} of {}",
                report.document_frequency, report.documents_in_corpus
            ));
            lines.push(format!("IDF: {}", format_weight(report.idf)));

            for stats in &report.documents {
                lines.push(format!(
                    "  {}: count {} of {}, TF {:.4}, TF-IDF {}",
                    stats.document,
                    stats.count,
                    stats.total_tokens,
                    stats.tf,
                    format_weight(stats.tf_idf)
                ));
            }
        }
        lines
    }

    fn csv_header(&self) -> &'static [&'static str] {
        &[
            "term",
            "document",
            "count",
            "total_tokens",
            "tf",
            "df",
            "idf",
            "tf_idf",
        ]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        for report in &self.terms {
            for stats in &report.documents {
                rows.push(vec![
                    report.term.clone(),
                    stats.document.clone(),
                    stats.count.to_string(),
                    stats.total_tokens.to_string(),
                    stats.tf.to_string(),
                    report.document_frequency.to_string(),
                    optional_number(report.idf),
                    optional_number(stats.tf_idf),
                ]);
            }
        }
        rows
    }
}

impl Report for TopTermsResults {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (i, top) in self.documents.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.push(format!("Document: {}", top.document));
            lines.push("─".repeat(10 + top.document.chars().count()));
            if top.terms.is_empty() {
                lines.push("  (no terms)".to_string());
            }
            for (rank, scored) in top.terms.iter().enumerate() {
                lines.push(format!(
                    "  {:>2}. {} (TF-IDF {:.4}, count {})",
                    rank + 1,
                    scored.term,
                    scored.tf_idf,
                    scored.count
                ));
            }
        }
        lines
    }

    fn csv_header(&self) -> &'static [&'static str] {
        &["document", "rank", "term", "count", "tf", "tf_idf"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        for top in &self.documents {
            for (rank, scored) in top.terms.iter().enumerate() {
                rows.push(vec![
                    top.document.clone(),
                    (rank + 1).to_string(),
                    scored.term.clone(),
                    scored.count.to_string(),
                    scored.tf.to_string(),
                    scored.tf_idf.to_string(),
                ]);
            }
        }
        rows
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Report>(message: &str, result: &T, args: &TeiWeightArgs) -> Result<()> {
    let rendered = render(result, args.output_format, args.pretty)?;
    if args.output_format == OutputFormat::Human && args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{rendered}");
    Ok(())
}

/// Render a result as text, newline terminated.
pub fn render<T: Report>(result: &T, format: OutputFormat, pretty: bool) -> Result<String> {
    let mut out = match format {
        OutputFormat::Human => result.human_lines().join("\n"),
        OutputFormat::Json if pretty => serde_json::to_string_pretty(result)?,
        OutputFormat::Json => serde_json::to_string(result)?,
        OutputFormat::Csv => render_csv(result),
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

fn render_csv<T: Report>(result: &T) -> String {
    let mut lines = Vec::new();
    lines.push(result.csv_header().join(","));
    for row in result.csv_rows() {
        let fields: Vec<String> = row.iter().map(|field| format_csv_value(field)).collect();
        lines.push(fields.join(","));
    }
    lines.join("\n")
}

/// Quote a CSV field when it needs it.
fn format_csv_value(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn format_weight(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.4}"),
        None => "undefined (term occurs in no document)".to_string(),
    }
}

fn optional_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
