//! Command implementations for the teiweight CLI.

use log::{debug, info};

use crate::analysis::analyzer::Analyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::TeiWeightConfig;
use crate::corpus::{Corpus, CorpusLoader};
use crate::document::InputFormat;
use crate::error::{Result, TeiWeightError};
use crate::scoring::TfIdf;

/// Execute a CLI command.
pub fn execute_command(args: TeiWeightArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Extract(extract_args) => extract(extract_args, config, &args),
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args, config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, config, &args),
        Command::Score(score_args) => score_terms(score_args, config, &args),
        Command::Top(top_args) => top_terms(top_args, config, &args),
    }
}

/// Load the configuration file named on the command line, or the defaults.
pub fn load_config(args: &TeiWeightArgs) -> Result<TeiWeightConfig> {
    match &args.config {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            TeiWeightConfig::load(path)
        }
        None => Ok(TeiWeightConfig::default()),
    }
}

/// Build a loader for `options` layered over `config`.
pub fn build_loader(
    mut config: TeiWeightConfig,
    options: &CorpusOptions,
) -> Result<(CorpusLoader, TeiWeightConfig)> {
    options.apply(&mut config);
    config.validate()?;

    let analyzer = config.analysis.build_analyzer()?;
    let loader =
        CorpusLoader::new(analyzer, config.tei.clone()).with_format(options.input_format);
    Ok((loader, config))
}

fn load_corpus(
    input: &std::path::Path,
    config: TeiWeightConfig,
    options: &CorpusOptions,
) -> Result<(Corpus, TeiWeightConfig)> {
    let (loader, config) = build_loader(config, options)?;
    let corpus = loader.load_dir(input)?;
    Ok((corpus, config))
}

/// Write the plain text of each TEI file.
fn extract(args: &ExtractArgs, config: TeiWeightConfig, cli_args: &TeiWeightArgs) -> Result<()> {
    let options = CorpusOptions {
        input_format: InputFormat::Tei,
        include_header: args.include_header,
        exclude: args.exclude.clone(),
        ..CorpusOptions::default()
    };
    let (loader, _) = build_loader(config, &options)?;
    let files = loader.write_plain_text(&args.input_dir, &args.output_dir)?;

    output_result(
        "Plain text extracted",
        &FilesWritten {
            output_dir: args.output_dir.clone(),
            files,
        },
        cli_args,
    )
}

/// Write the lowercase token derivative of each document.
fn tokenize(args: &TokenizeArgs, config: TeiWeightConfig, cli_args: &TeiWeightArgs) -> Result<()> {
    let (loader, _) = build_loader(config, &args.corpus)?;
    let corpus = loader.load_dir(&args.input_dir)?;
    let files = loader.write_derivatives(&corpus, &args.output_dir)?;

    output_result(
        "Token derivatives written",
        &FilesWritten {
            output_dir: args.output_dir.clone(),
            files,
        },
        cli_args,
    )
}

/// Corpus statistics for a directory.
pub fn corpus_stats(corpus: &Corpus) -> CorpusStats {
    CorpusStats {
        documents: corpus.len(),
        total_tokens: corpus.total_tokens(),
        vocabulary_size: corpus.vocabulary_size(),
        per_document: corpus
            .iter()
            .map(|(document, counts)| DocumentStats {
                document: document.id().to_string(),
                tokens: counts.total(),
                unique_terms: counts.unique_terms(),
            })
            .collect(),
    }
}

/// Show corpus statistics.
fn show_stats(args: &StatsArgs, config: TeiWeightConfig, cli_args: &TeiWeightArgs) -> Result<()> {
    let (corpus, _) = load_corpus(&args.input_dir, config, &args.corpus)?;
    output_result("Corpus statistics", &corpus_stats(&corpus), cli_args)
}

/// Score terms against a corpus.
///
/// Each term goes through the corpus analyzer so it is normalized the same
/// way as the documents. A term the analyzer splits is scored per part; one
/// it removes entirely (a stop word) is scored as typed.
pub fn score(
    corpus: &Corpus,
    terms: &[String],
    analyzer: &dyn Analyzer,
    calculator: TfIdf<'_>,
) -> Result<ScoreResults> {
    let mut reports = Vec::with_capacity(terms.len());
    for raw in terms {
        let mut analyzed = analyzer.terms(raw)?;
        if analyzed.is_empty() {
            analyzed.push(raw.clone());
        }
        for term in analyzed {
            debug!("scoring '{term}' over {} documents", corpus.len());
            reports.push(calculator.term_report(&term));
        }
    }

    Ok(ScoreResults {
        log_base: calculator.log_base(),
        terms: reports,
    })
}

/// Report TF, IDF and TF-IDF of the requested terms.
fn score_terms(args: &ScoreArgs, config: TeiWeightConfig, cli_args: &TeiWeightArgs) -> Result<()> {
    let (corpus, config) = load_corpus(&args.input_dir, config, &args.corpus)?;
    let analyzer = config.analysis.build_analyzer()?;
    let log_base = args.log_base.unwrap_or(config.scoring.log_base);
    let calculator = TfIdf::new(&corpus).with_log_base(log_base);

    let results = score(&corpus, &args.terms, analyzer.as_ref(), calculator)?;
    output_result("Term scores", &results, cli_args)
}

/// Highest weighted terms of every document.
pub fn top(corpus: &Corpus, limit: usize, calculator: TfIdf<'_>) -> Result<TopTermsResults> {
    if limit == 0 {
        return Err(TeiWeightError::invalid_argument("-k must be at least 1"));
    }

    let documents = corpus
        .ids()
        .map(|id| {
            Ok(DocumentTopTerms {
                document: id.to_string(),
                terms: calculator.top_terms(id, limit)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TopTermsResults {
        log_base: calculator.log_base(),
        documents,
    })
}

/// Show the highest weighted terms of each document.
fn top_terms(args: &TopArgs, config: TeiWeightConfig, cli_args: &TeiWeightArgs) -> Result<()> {
    let (corpus, config) = load_corpus(&args.input_dir, config, &args.corpus)?;
    let log_base = args.log_base.unwrap_or(config.scoring.log_base);
    let calculator = TfIdf::new(&corpus).with_log_base(log_base);

    output_result("Top terms", &top(&corpus, args.limit, calculator)?, cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::document::Document;
    use crate::scoring::LogBase;

    fn corpus() -> Corpus {
        let doc = |id: &str, text: &str| {
            Document::new(id, text.split_whitespace().map(String::from).collect())
        };
        Corpus::from_documents(vec![
            doc("aeneid", "arma virumque cano troiae"),
            doc("georgics", "quid faciat laetas segetes"),
            doc("eclogues", "tityre tu patulae recubans sub tegmine fagi cano"),
        ])
        .unwrap()
    }

    #[test]
    fn test_score_lowercases_terms() {
        let corpus = corpus();
        let analyzer = AnalysisConfig::default().build_analyzer().unwrap();
        let results = score(
            &corpus,
            &["CANO".to_string(), "Achilles".to_string()],
            analyzer.as_ref(),
            TfIdf::new(&corpus),
        )
        .unwrap();

        assert_eq!(results.log_base, LogBase::Ten);
        assert_eq!(results.terms[0].term, "cano");
        assert_eq!(results.terms[0].document_frequency, 2);
        assert!(results.terms[0].idf.is_some());
        assert_eq!(results.terms[1].term, "achilles");
        assert_eq!(results.terms[1].idf, None);
    }

    #[test]
    fn test_score_follows_configured_case() {
        let corpus = Corpus::from_documents(vec![
            Document::new("aeneid", vec!["Troiae".to_string(), "cano".to_string()]),
            Document::new("georgics", vec!["segetes".to_string()]),
        ])
        .unwrap();
        let analyzer = AnalysisConfig {
            lowercase: false,
            ..AnalysisConfig::default()
        }
        .build_analyzer()
        .unwrap();

        let results = score(
            &corpus,
            &["Troiae".to_string()],
            analyzer.as_ref(),
            TfIdf::new(&corpus),
        )
        .unwrap();

        assert_eq!(results.terms[0].term, "Troiae");
        assert_eq!(results.terms[0].document_frequency, 1);
        assert!(results.terms[0].idf.is_some());
    }

    #[test]
    fn test_score_splits_and_keeps_stop_words() {
        let corpus = corpus();
        let analyzer = AnalysisConfig {
            custom_stop_words: vec!["sub".to_string()],
            ..AnalysisConfig::default()
        }
        .build_analyzer()
        .unwrap();

        let results = score(
            &corpus,
            &["Arma, virumque".to_string(), "sub".to_string()],
            analyzer.as_ref(),
            TfIdf::new(&corpus),
        )
        .unwrap();

        let terms: Vec<&str> = results.terms.iter().map(|r| r.term.as_str()).collect();
        assert_eq!(terms, vec!["arma", "virumque", "sub"]);
    }

    #[test]
    fn test_top_covers_every_document() {
        let corpus = corpus();
        let results = top(&corpus, 2, TfIdf::new(&corpus).with_log_base(LogBase::E)).unwrap();

        let ids: Vec<&str> = results.documents.iter().map(|d| d.document.as_str()).collect();
        assert_eq!(ids, vec!["aeneid", "eclogues", "georgics"]);
        assert!(results.documents.iter().all(|d| d.terms.len() == 2));
        assert_eq!(results.log_base, LogBase::E);

        assert!(matches!(
            top(&corpus, 0, TfIdf::new(&corpus)),
            Err(TeiWeightError::Other(_))
        ));
    }

    #[test]
    fn test_corpus_stats() {
        let stats = corpus_stats(&corpus());

        assert_eq!(stats.documents, 3);
        assert_eq!(stats.total_tokens, 16);
        assert_eq!(stats.vocabulary_size, 15);
        assert_eq!(stats.per_document[1].document, "eclogues");
        assert_eq!(stats.per_document[1].tokens, 8);
    }
}
