//! Criterion benchmarks for teiweight.
//!
//! Covers the three hot paths of a scoring run:
//! - TEI text extraction and analysis
//! - Corpus construction (term counting)
//! - TF-IDF scoring

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use teiweight::analysis::analyzer::{Analyzer, StandardAnalyzer};
use teiweight::corpus::Corpus;
use teiweight::document::Document;
use teiweight::document::tei::{TeiOptions, extract_text};
use teiweight::scoring::TfIdf;

const WORDS: &[&str] = &[
    "arma", "virumque", "cano", "troiae", "qui", "primus", "ab", "oris", "italiam", "fato",
    "profugus", "laviniaque", "venit", "litora", "multum", "ille", "et", "terris", "iactatus",
    "alto", "vi", "superum", "saevae", "memorem", "iunonis", "ob", "iram", "musa", "mihi",
    "causas", "memora",
];

/// Generate token sequences for benchmarking.
fn generate_tokens(count: usize) -> Vec<Vec<String>> {
    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100);
        let tokens = (0..doc_length)
            .map(|j| WORDS[(i * 7 + j * 13) % WORDS.len()].to_string())
            .collect();
        documents.push(tokens);
    }
    documents
}

fn generate_tei(tokens: &[String]) -> String {
    let lines: Vec<String> = tokens
        .chunks(8)
        .map(|line| format!("<l>{}</l>", line.join(" ")))
        .collect();
    format!(
        r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><teiHeader><title>Bench</title></teiHeader><text><body><lg>{}</lg></body></text></TEI>"#,
        lines.concat()
    )
}

fn build_corpus(documents: &[Vec<String>]) -> Corpus {
    Corpus::from_documents(
        documents
            .iter()
            .enumerate()
            .map(|(i, tokens)| Document::new(format!("doc{i:04}"), tokens.clone())),
    )
    .unwrap()
}

/// Benchmark TEI extraction and analysis.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = StandardAnalyzer::new();
    let options = TeiOptions::default();
    let documents: Vec<String> = generate_tokens(100).iter().map(|t| generate_tei(t)).collect();

    group.bench_function("extract_tei", |b| {
        b.iter(|| black_box(extract_text(black_box(&documents[0]), &options)))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("extract_and_analyze_batch", |b| {
        b.iter(|| {
            for xml in &documents {
                let text = extract_text(black_box(xml), &options).unwrap();
                let _ = black_box(analyzer.terms(&text));
            }
        })
    });

    group.finish();
}

/// Benchmark corpus construction.
fn bench_corpus_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus");

    let documents = generate_tokens(1000);
    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("build_corpus", |b| {
        b.iter(|| black_box(build_corpus(black_box(&documents))))
    });

    group.finish();
}

/// Benchmark TF-IDF scoring.
fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");

    let corpus = build_corpus(&generate_tokens(1000));
    let calculator = TfIdf::new(&corpus);

    group.bench_function("term_report", |b| {
        b.iter(|| black_box(calculator.term_report(black_box("troiae"))))
    });

    group.bench_function("top_terms", |b| {
        b.iter(|| black_box(calculator.top_terms(black_box("doc0500"), 10)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_text_analysis,
    bench_corpus_building,
    bench_scoring
);

criterion_main!(benches);
