//! Loading a corpus from a directory and writing derived files back out.
//!
//! Files are read and analyzed in parallel with rayon. The resulting
//! documents are put in identifier order before the corpus is built, so
//! the outcome never depends on thread scheduling.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::corpus::corpus::Corpus;
use crate::document::Document;
use crate::document::converter::tei::TeiDocumentConverter;
use crate::document::converter::text::TextDocumentConverter;
use crate::document::converter::tokens::TokenDocumentConverter;
use crate::document::converter::{DocumentConverter, InputFormat};
use crate::document::tei::TeiOptions;
use crate::error::{Result, TeiWeightError};

/// A source file and the format it will be read as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    /// Document identifier (the file stem).
    pub id: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// Resolved format.
    pub format: InputFormat,
}

/// Reads a directory of source files into a [`Corpus`].
#[derive(Clone, Debug)]
pub struct CorpusLoader {
    format: InputFormat,
    tei: TeiDocumentConverter,
    text: TextDocumentConverter,
    tokens: TokenDocumentConverter,
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new(Arc::new(StandardAnalyzer::new()), TeiOptions::default())
    }
}

impl CorpusLoader {
    /// Create a loader that analyzes TEI and plain text with `analyzer`.
    pub fn new(analyzer: Arc<dyn Analyzer>, tei_options: TeiOptions) -> Self {
        CorpusLoader {
            format: InputFormat::Auto,
            tei: TeiDocumentConverter::with_analyzer(Arc::clone(&analyzer))
                .with_options(tei_options),
            text: TextDocumentConverter::with_analyzer(analyzer),
            tokens: TokenDocumentConverter::new(),
        }
    }

    /// Restrict loading to one input format.
    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.format = format;
        self
    }

    /// The input format this loader reads.
    pub fn format(&self) -> InputFormat {
        self.format
    }

    fn converter(&self, format: InputFormat) -> &dyn DocumentConverter {
        match format {
            InputFormat::Tei | InputFormat::Auto => &self.tei,
            InputFormat::Text => &self.text,
            InputFormat::Tokens => &self.tokens,
        }
    }

    /// List the files of `dir` this loader reads, sorted by file name.
    pub fn list_sources<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<SourceFile>> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| with_path(e, dir))?;

        let mut sources = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| with_path(e, dir))?.path();
            if !path.is_file() {
                continue;
            }

            let Some(format) = self.format.resolve(&path) else {
                debug!("skipping {}", path.display());
                continue;
            };
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!("skipping {}: file name is not valid UTF-8", path.display());
                continue;
            };

            sources.push(SourceFile {
                id: id.to_string(),
                path: path.clone(),
                format,
            });
        }

        sources.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(sources)
    }

    /// Read and analyze one source file.
    pub fn load_file(&self, source: &SourceFile) -> Result<Document> {
        let content = fs::read_to_string(&source.path).map_err(|e| with_path(e, &source.path))?;
        let converter = self.converter(source.format);
        let document = converter.convert(&source.id, &content)?;
        debug!(
            "{}: {} tokens via {} converter",
            source.id,
            document.len(),
            converter.name()
        );
        Ok(document)
    }

    /// Load every matching file of `dir` into a corpus.
    pub fn load_dir<P: AsRef<Path>>(&self, dir: P) -> Result<Corpus> {
        let dir = dir.as_ref();
        let sources = self.list_sources(dir)?;
        if sources.is_empty() {
            warn!(
                "no {:?} input files found in {}",
                self.format,
                dir.display()
            );
        }

        let mut documents = sources
            .par_iter()
            .map(|source| self.load_file(source))
            .collect::<Result<Vec<_>>>()?;
        documents.sort_by(|a, b| a.id().cmp(b.id()));

        let corpus = Corpus::from_documents(documents)?;
        info!(
            "loaded {} documents ({} tokens) from {}",
            corpus.len(),
            corpus.total_tokens(),
            dir.display()
        );
        Ok(corpus)
    }

    /// Write each document's tokens to `<out_dir>/<id>.tok`.
    pub fn write_derivatives<P: AsRef<Path>>(
        &self,
        corpus: &Corpus,
        out_dir: P,
    ) -> Result<Vec<PathBuf>> {
        let out_dir = out_dir.as_ref();
        fs::create_dir_all(out_dir).map_err(|e| with_path(e, out_dir))?;

        let mut written = Vec::with_capacity(corpus.len());
        for document in corpus.documents() {
            let path = out_dir.join(format!(
                "{}.{}",
                document.id(),
                InputFormat::TOKENS_EXTENSION
            ));
            fs::write(&path, document.to_derivative()).map_err(|e| with_path(e, &path))?;
            written.push(path);
        }

        info!("wrote {} token files to {}", written.len(), out_dir.display());
        Ok(written)
    }

    /// Write the extracted plain text of each TEI file in `dir` to `<out_dir>/<id>.txt`.
    pub fn write_plain_text<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        dir: P,
        out_dir: Q,
    ) -> Result<Vec<PathBuf>> {
        let out_dir = out_dir.as_ref();
        let sources: Vec<SourceFile> = self
            .list_sources(dir)?
            .into_iter()
            .filter(|source| source.format == InputFormat::Tei)
            .collect();
        fs::create_dir_all(out_dir).map_err(|e| with_path(e, out_dir))?;

        let written = sources
            .par_iter()
            .map(|source| -> Result<PathBuf> {
                let content =
                    fs::read_to_string(&source.path).map_err(|e| with_path(e, &source.path))?;
                let mut text = self.tei.extract(&source.id, &content)?;
                text.push('\n');

                let path =
                    out_dir.join(format!("{}.{}", source.id, InputFormat::TEXT_EXTENSION));
                fs::write(&path, text).map_err(|e| with_path(e, &path))?;
                Ok(path)
            })
            .collect::<Result<Vec<_>>>()?;

        info!("wrote {} text files to {}", written.len(), out_dir.display());
        Ok(written)
    }
}

fn with_path(error: io::Error, path: &Path) -> TeiWeightError {
    TeiWeightError::Io(io::Error::new(
        error.kind(),
        format!("{}: {error}", path.display()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TEI: &str = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0">
        <teiHeader><title>Fragment</title></teiHeader>
        <text><body><p>Gallia est omnis divisa in partes tres</p></body></text>
    </TEI>"#;

    #[test]
    fn test_list_sources_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.xml"), TEI).unwrap();
        fs::write(dir.path().join("a.xml"), TEI).unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();
        fs::create_dir(dir.path().join("sub.xml")).unwrap();

        let sources = CorpusLoader::default().list_sources(dir.path()).unwrap();

        let ids: Vec<&str> = sources.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(sources.iter().all(|s| s.format == InputFormat::Tei));
    }

    #[test]
    fn test_load_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("caesar.xml"), TEI).unwrap();
        fs::write(dir.path().join("cicero.tok"), "quo usque tandem\n").unwrap();

        let corpus = CorpusLoader::default().load_dir(dir.path()).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.document("caesar").unwrap().len(), 7);
        assert_eq!(corpus.term_counts("cicero").unwrap().count("tandem"), 1);
        assert!(corpus.term_counts("caesar").unwrap().count("fragment") == 0);
    }

    #[test]
    fn test_load_missing_dir() {
        let result = CorpusLoader::default().load_dir("/nonexistent/teiweight/corpus");
        match result {
            Err(TeiWeightError::Io(e)) => assert!(e.to_string().contains("/nonexistent/teiweight/corpus")),
            other => panic!("Expected IO error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_ids_across_formats() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("caesar.xml"), TEI).unwrap();
        fs::write(dir.path().join("caesar.tok"), "gallia est\n").unwrap();

        let result = CorpusLoader::default().load_dir(dir.path());
        assert!(matches!(result, Err(TeiWeightError::DuplicateDocument(_))));

        let corpus = CorpusLoader::default()
            .with_format(InputFormat::Tokens)
            .load_dir(dir.path())
            .unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.document("caesar").unwrap().len(), 2);
    }

    #[test]
    fn test_derivatives_round_trip() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(src.path().join("caesar.xml"), TEI).unwrap();
        fs::write(
            src.path().join("homer.txt"),
            "Μῆνιν ἄειδε θεὰ, Πηληϊάδεω Ἀχιλῆος",
        )
        .unwrap();

        let loader = CorpusLoader::default();
        let corpus = loader.load_dir(src.path()).unwrap();
        let written = loader.write_derivatives(&corpus, out.path()).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(
            fs::read_to_string(out.path().join("homer.tok")).unwrap(),
            "μῆνιν ἄειδε θεὰ πηληϊάδεω ἀχιλῆος\n"
        );

        let reloaded = loader.load_dir(out.path()).unwrap();
        for (original, copy) in corpus.iter().zip(reloaded.iter()) {
            assert_eq!(original.0, copy.0);
            assert_eq!(original.1, copy.1);
        }
    }

    #[test]
    fn test_write_plain_text() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(src.path().join("caesar.xml"), TEI).unwrap();
        fs::write(src.path().join("cicero.tok"), "quo usque\n").unwrap();

        let written = CorpusLoader::default()
            .write_plain_text(src.path(), out.path())
            .unwrap();

        assert_eq!(written, vec![out.path().join("caesar.txt")]);
        assert_eq!(
            fs::read_to_string(&written[0]).unwrap(),
            "Gallia est omnis divisa in partes tres\n"
        );
    }
}
